//! Configuration file watcher for hot reload.
//!
//! # Design Decisions
//! - Watches the parent directory, not the file: editors that save by
//!   writing a temp file and renaming it over the config replace the inode,
//!   which would silently end a watch placed on the file itself
//! - Events are filtered down to the config file's name
//! - A burst of events is collapsed into one reload after a quiet period, so
//!   a truncate-then-write is not loaded half way
//! - A reload identical to the last delivered config is not sent again

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc as std_mpsc;
use std::thread;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::ModlogConfig;

/// Quiet period before a changed file is reloaded.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
    update_tx: mpsc::UnboundedSender<ModlogConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<ModlogConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                debounce: DEFAULT_DEBOUNCE,
                update_tx,
            },
            update_rx,
        )
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Start watching in the background.
    ///
    /// The returned watcher must be kept alive for updates to keep flowing.
    /// Dropping it, or the update receiver, stops the reload thread.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let dir = watch_dir(&self.path);
        let file_name = self.path.file_name().map(|n| n.to_os_string());
        let (signal_tx, signal_rx) = std_mpsc::channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = event.kind.is_modify() || event.kind.is_create();
                    if relevant && touches(&event, file_name.as_ref()) {
                        let _ = signal_tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let path = self.path.clone();
        let debounce = self.debounce;
        let update_tx = self.update_tx;
        thread::Builder::new()
            .name("modlog-config-reload".to_string())
            .spawn(move || reload_loop(&path, debounce, signal_rx, update_tx))
            .map_err(notify::Error::io)?;

        tracing::info!(path = ?self.path, dir = ?dir, "Config watcher started");
        Ok(watcher)
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches(event: &Event, file_name: Option<&OsString>) -> bool {
    match file_name {
        Some(name) => event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(name.as_os_str())),
        None => false,
    }
}

fn reload_loop(
    path: &Path,
    debounce: Duration,
    signals: std_mpsc::Receiver<()>,
    update_tx: mpsc::UnboundedSender<ModlogConfig>,
) {
    let mut last_sent: Option<ModlogConfig> = None;

    while signals.recv().is_ok() {
        loop {
            match signals.recv_timeout(debounce) {
                Ok(()) => continue,
                Err(std_mpsc::RecvTimeoutError::Timeout) => break,
                Err(std_mpsc::RecvTimeoutError::Disconnected) => return,
            }
        }

        tracing::info!(path = ?path, "Config file change detected, reloading");
        match load_config(path) {
            Ok(new_config) => {
                if last_sent.as_ref() == Some(&new_config) {
                    tracing::debug!(path = ?path, "Config unchanged, skipping update");
                    continue;
                }
                if update_tx.send(new_config.clone()).is_err() {
                    return;
                }
                last_sent = Some(new_config);
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to reload config, keeping current configuration"
                );
            }
        }
    }
}
