//! Settings synchronization core for the Huepick color picker.
//!
//! Keeps an in-memory, always-current view of one module's user settings,
//! backed by a JSON file on disk that may be rewritten externally (the
//! settings UI) or by this process itself. [`sync::SettingsSynchronizer`] is
//! the entry point: it reloads on file-change signals, retries transient
//! failures, and persists collection edits back to disk.

pub mod cli;
pub mod logging;
pub mod observe;
pub mod retry;
pub mod settings;
pub mod store;
pub mod sync;
pub mod watch;
