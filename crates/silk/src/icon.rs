use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const ICON_LOOKUP_SIZE: u16 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconName(String);

crate::impl_string_newtype!(IconName);

static RESOLVED: OnceLock<RwLock<HashMap<IconName, Option<PathBuf>>>> = OnceLock::new();

/// Resolves an icon-theme name (or an absolute file path) to an image file.
/// Lookups are memoized, including misses.
pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    let cache = RESOLVED.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = cache.read().get(icon_name) {
        return hit.clone();
    }

    let found = lookup(icon_name.as_str())
        .with_size(ICON_LOOKUP_SIZE)
        .with_scale(1)
        .find();
    if found.is_none() {
        log::debug!("No themed icon found for '{}'", icon_name);
    }
    cache.write().insert(icon_name.clone(), found.clone());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_resolves_to_nothing() {
        assert_eq!(find_icon_path(&IconName::new("")), None);
    }

    #[test]
    fn test_absolute_path_is_used_as_is() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let name = IconName::new(manifest.to_string_lossy());
        assert_eq!(find_icon_path(&name), Some(manifest));
    }

    #[test]
    fn test_missing_absolute_path_is_none() {
        let name = IconName::new("/definitely/not/here/icon.png");
        assert_eq!(find_icon_path(&name), None);
    }
}
