use crate::app::{AppName, Network, SelectedItem};
use crate::layout::SLOT_COUNT;
use thiserror::Error;

pub const MAX_PICKS: usize = SLOT_COUNT;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("At most {MAX_PICKS} apps can be placed on the web")]
    Full,
    #[error("Unknown app '{0}'")]
    Unknown(AppName),
}

/// Working state of the add-apps screen. Picks keep the order in which they
/// were made, which is the order they fill the slots in.
#[derive(Debug, Clone)]
pub struct AppPicker {
    catalog: Vec<SelectedItem>,
    picks: Vec<SelectedItem>,
}

impl AppPicker {
    pub fn new(initial: &[SelectedItem]) -> Self {
        Self::with_catalog(Network::catalog(), initial)
    }

    pub fn with_catalog(catalog: Vec<SelectedItem>, initial: &[SelectedItem]) -> Self {
        Self {
            catalog,
            picks: initial.iter().take(MAX_PICKS).cloned().collect(),
        }
    }

    pub fn catalog(&self) -> &[SelectedItem] {
        &self.catalog
    }

    pub fn picks(&self) -> &[SelectedItem] {
        &self.picks
    }

    pub fn is_picked(&self, name: &AppName) -> bool {
        self.picks.iter().any(|p| &p.name == name)
    }

    /// Returns whether anything changed.
    pub fn set(&mut self, name: &AppName, picked: bool) -> Result<bool, PickerError> {
        match (picked, self.is_picked(name)) {
            (true, true) | (false, false) => Ok(false),
            (false, true) => {
                self.picks.retain(|p| &p.name != name);
                Ok(true)
            }
            (true, false) => {
                if self.picks.len() >= MAX_PICKS {
                    return Err(PickerError::Full);
                }
                let item = self
                    .catalog
                    .iter()
                    .find(|i| &i.name == name)
                    .cloned()
                    .ok_or_else(|| PickerError::Unknown(name.clone()))?;
                self.picks.push(item);
                Ok(true)
            }
        }
    }

    /// Returns the new picked state.
    pub fn toggle(&mut self, name: &AppName) -> Result<bool, PickerError> {
        let picked = !self.is_picked(name);
        self.set(name, picked)?;
        Ok(picked)
    }

    pub fn confirm(self) -> Vec<SelectedItem> {
        self.picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn name(n: Network) -> AppName {
        AppName::new(n.to_string())
    }

    #[test]
    fn test_picks_keep_order() {
        let mut picker = AppPicker::new(&[]);
        picker.toggle(&name(Network::Reddit)).unwrap();
        picker.toggle(&name(Network::Facebook)).unwrap();
        picker.toggle(&name(Network::Discord)).unwrap();
        picker.toggle(&name(Network::Facebook)).unwrap();

        let names: Vec<_> = picker.confirm().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec![name(Network::Reddit), name(Network::Discord)]);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut picker = AppPicker::new(&[Network::X.item()]);
        assert_eq!(picker.set(&name(Network::X), true), Ok(false));
        assert_eq!(picker.set(&name(Network::YouTube), false), Ok(false));
        assert_eq!(picker.picks().len(), 1);
    }

    #[test]
    fn test_limit() {
        let mut picker = AppPicker::new(&[]);
        for network in Network::iter().take(MAX_PICKS) {
            assert_eq!(picker.set(&name(network), true), Ok(true));
        }
        let ninth = Network::iter().nth(MAX_PICKS).unwrap();
        assert_eq!(picker.set(&name(ninth), true), Err(PickerError::Full));
        assert!(!picker.is_picked(&name(ninth)));
    }

    #[test]
    fn test_unknown_app() {
        let mut picker = AppPicker::new(&[]);
        let ghost = AppName::new("Friendster");
        assert_eq!(
            picker.set(&ghost, true),
            Err(PickerError::Unknown(ghost.clone()))
        );
    }

    #[test]
    fn test_initial_selection_is_preserved() {
        let initial = vec![Network::TikTok.item(), Network::Telegram.item()];
        let picker = AppPicker::new(&initial);
        assert!(picker.is_picked(&name(Network::TikTok)));
        assert_eq!(picker.confirm(), initial);
    }
}
