//! The settings synchronizer: one in-memory view per module, kept current.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::observe::{ObservableList, ObservableSetting, OnMutate};
use crate::retry::RetryPolicy;
use crate::settings::{ColorFormat, PickerSettings};
use crate::store::{SettingsError, SettingsStore};

/// In-memory, always-current view of one module's settings.
///
/// Construct one per module, keep it for the process lifetime, and wire
/// [`reload`] to a file-change notifier (see [`crate::watch`]). Reloads
/// serialize end to end behind a single lock: overlapping triggers queue and
/// each then runs its own full reload. Bursty notifications mean redundant
/// reloads, never dropped ones.
///
/// The two list settings persist themselves on every external mutation; the
/// scalar settings deliberately do not. Callers changing a scalar and
/// wanting it on disk save through the store themselves (see
/// [`current`](Self::current)).
///
/// [`reload`]: Self::reload
pub struct SettingsSynchronizer {
    store: Arc<dyn SettingsStore>,
    module: String,
    lock: Arc<Mutex<()>>,
    retry: RetryPolicy,
    /// Global shortcut chord that activates the picker.
    pub activation_shortcut: ObservableSetting<String>,
    /// Swap the mouse cursor for a crosshair while picking.
    pub change_cursor: ObservableSetting<bool>,
    /// Representation copied to the clipboard on pick.
    pub copied_color_representation: ObservableSetting<ColorFormat>,
    /// Open the editor window after picking.
    pub use_editor: ObservableSetting<bool>,
    /// Maximum number of entries kept in the color history.
    pub color_history_limit: ObservableSetting<u32>,
    /// Recently picked colors. External mutations persist immediately.
    pub color_history: ObservableList,
    /// Color formats shown in the editor. External mutations persist
    /// immediately.
    pub visible_color_formats: ObservableList,
}

impl SettingsSynchronizer {
    /// Build a synchronizer for `module`, wire its persistence hooks, and
    /// run the initial load.
    pub fn new(store: Arc<dyn SettingsStore>, module: impl Into<String>) -> Self {
        Self::with_retry(store, module, RetryPolicy::default())
    }

    /// Like [`new`](Self::new) with an explicit retry policy.
    pub fn with_retry(
        store: Arc<dyn SettingsStore>,
        module: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let defaults = PickerSettings::default();
        let sync = Self {
            store,
            module: module.into(),
            lock: Arc::new(Mutex::new(())),
            retry,
            activation_shortcut: ObservableSetting::new(defaults.activation_shortcut),
            change_cursor: ObservableSetting::new(defaults.change_cursor),
            copied_color_representation: ObservableSetting::new(
                defaults.copied_color_representation,
            ),
            use_editor: ObservableSetting::new(defaults.use_editor),
            color_history_limit: ObservableSetting::new(defaults.color_history_limit),
            color_history: ObservableList::new(),
            visible_color_formats: ObservableList::new(),
        };

        sync.color_history.set_on_mutate(sync.persist_hook(|settings, items| {
            settings.color_history = Some(items);
        }));
        sync.visible_color_formats
            .set_on_mutate(sync.persist_hook(|settings, items| {
                settings.visible_color_formats = Some(items);
            }));

        sync.reload();
        sync
    }

    /// Module name this synchronizer serves.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Re-read the settings record from storage and apply it in memory.
    ///
    /// Safe to call from any thread; typically driven by a file-change
    /// notifier. Failures are retried with backoff and ultimately swallowed:
    /// a broken settings file leaves the previous in-memory state standing
    /// and is visible only in the log.
    pub fn reload(&self) {
        let _guard = self.lock.lock();
        self.retry.run(|| self.load_and_apply());
    }

    /// Assemble a fresh record from the current in-memory values.
    ///
    /// For callers that change scalar settings and persist explicitly;
    /// scalar sets are not auto-saved.
    pub fn current(&self) -> PickerSettings {
        PickerSettings {
            activation_shortcut: self.activation_shortcut.get(),
            change_cursor: self.change_cursor.get(),
            copied_color_representation: self.copied_color_representation.get(),
            use_editor: self.use_editor.get(),
            color_history_limit: self.color_history_limit.get(),
            color_history: Some(self.color_history.items()),
            visible_color_formats: Some(self.visible_color_formats.items()),
        }
    }

    fn load_and_apply(&self) -> Result<(), SettingsError> {
        if !self.store.exists(&self.module) {
            info!(module = %self.module, "settings.json was missing, creating a new one");
            self.store.create_default(&self.module)?;
        }

        let mut settings = self.store.load(&self.module)?;
        settings.normalize();

        self.activation_shortcut.load(settings.activation_shortcut);
        self.change_cursor.load(settings.change_cursor);
        self.copied_color_representation
            .load(settings.copied_color_representation);
        self.use_editor.load(settings.use_editor);
        self.color_history_limit.load(settings.color_history_limit);
        self.color_history
            .replace_all(settings.color_history.unwrap_or_default());
        self.visible_color_formats
            .replace_all(settings.visible_color_formats.unwrap_or_default());
        Ok(())
    }

    /// Persist closure for one list field: re-fetch the full record from the
    /// store (never a cached copy), overwrite that field, save. Takes the
    /// reload lock, so mutation-triggered persistence and reload are
    /// mutually exclusive.
    fn persist_hook(
        &self,
        apply: impl Fn(&mut PickerSettings, Vec<String>) + Send + Sync + 'static,
    ) -> OnMutate {
        let store = Arc::clone(&self.store);
        let module = self.module.clone();
        let lock = Arc::clone(&self.lock);
        Box::new(move |items| {
            let _guard = lock.lock();
            let mut settings = store.load(&module)?;
            apply(&mut settings, items.to_vec());
            store.save(&module, &settings)
        })
    }
}
