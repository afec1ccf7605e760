use crate::events::AppEvent;
use crate::sys::watch;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the config watcher on its own Tokio runtime, off the GTK main thread.
pub fn start_background_services(config_path: PathBuf, tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        match rt.block_on(watch::watch_config(config_path, tx)) {
            Ok(()) => log::debug!("Config watcher stopped"),
            Err(e) => log::error!("Config watcher failed: {}", e),
        }
    });
}
