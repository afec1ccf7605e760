use crate::events::AppEvent;
use async_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Editors emit several events per save; they are folded into one reload.
pub const DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Config path {0} has no parent directory")]
    NoParent(PathBuf),
    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whether a filesystem event touches the config file itself.
pub fn is_reload_event(event: &Event, config_path: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    relevant && event.paths.iter().any(|p| p == config_path)
}

/// Watches the directory holding `config_path` and sends
/// [`AppEvent::ConfigReload`] until the receiving side goes away.
pub async fn watch_config(config_path: PathBuf, tx: Sender<AppEvent>) -> Result<(), WatchError> {
    let dir = config_path
        .parent()
        .ok_or_else(|| WatchError::NoParent(config_path.clone()))?
        .to_path_buf();
    fs_err::create_dir_all(&dir)?;

    let (changes_tx, changes_rx) = async_channel::unbounded::<()>();
    let path = config_path.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) if is_reload_event(&event, &path) => {
                let _ = changes_tx.send_blocking(());
            }
            Ok(_) => {}
            Err(e) => log::warn!("Watch error: {}", e),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    log::debug!("Watching {}", config_path.display());

    while changes_rx.recv().await.is_ok() {
        while let Ok(Ok(())) = tokio::time::timeout(DEBOUNCE, changes_rx.recv()).await {}
        if tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
    Ok(())
}
