//! File-change notification for settings files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime};

use tracing::debug;

/// A source of settings file-change signals.
///
/// Implementations invoke the registered callback whenever the watched file
/// changes. There is no payload: the consumer always performs a full reload,
/// never a diff.
pub trait SettingsWatcher {
    /// Start watching `path`, invoking `on_change` on every change.
    fn watch(&mut self, path: PathBuf, on_change: Box<dyn Fn() + Send>);
}

/// Notifier that polls the watched file's modification time on a background
/// thread.
///
/// Used by the CLI's `watch` command and the tests; a host application
/// typically supplies its own platform watcher behind [`SettingsWatcher`].
/// Polling stops when the watcher is dropped.
pub struct PollWatcher {
    interval: Duration,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PollWatcher {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            stop: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

impl SettingsWatcher for PollWatcher {
    fn watch(&mut self, path: PathBuf, on_change: Box<dyn Fn() + Send>) {
        let stop = Arc::clone(&self.stop);
        let interval = self.interval;
        self.handle = Some(thread::spawn(move || {
            let mut last_seen = mtime(&path);
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(interval);
                let current = mtime(&path);
                if current != last_seen {
                    debug!(path = %path.display(), "settings file changed");
                    last_seen = current;
                    on_change();
                }
            }
        }));
    }
}

impl Drop for PollWatcher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
