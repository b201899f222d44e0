use anyhow::{Context, Result};

use super::FileOutcome;

/// Completion callback for one picker invocation.
pub type PickerCallback = Box<dyn FnOnce(Vec<FileOutcome>) + 'static>;

/// Selection constraints written to the control before it is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerOptions {
    /// Accepted extensions without the leading dot. Empty accepts anything.
    pub extensions: Vec<String>,
    pub multiple: bool,
    /// Select a whole directory; names then carry their relative path.
    pub directory: bool,
}

impl PickerOptions {
    /// Accept list in host syntax, e.g. `.png,.jpg`.
    pub fn accept(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// The hidden file-selection control owned by a [`FilePicker`].
pub trait PickerControl {
    fn configure(&self, options: &PickerOptions);

    /// Opens the host selection UI. Completion is reported back through
    /// `Bridge::picker_selected`.
    fn show(&self);

    /// Removes the control from the host.
    fn dispose(&self) {}
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SubscriptionState {
    /// No listener attached.
    Disarmed,
    /// A callback is waiting for the next selection.
    Armed,
    /// The last armed callback has been handed out.
    Fired,
}

/// Single-use selection listener.
///
/// At most one callback is held at a time; firing hands it out and leaves
/// the subscription spent until the next `arm`.
pub struct PickerSubscription {
    state: SubscriptionState,
    callback: Option<PickerCallback>,
}

impl PickerSubscription {
    pub fn new() -> Self {
        Self {
            state: SubscriptionState::Disarmed,
            callback: None,
        }
    }

    #[inline]
    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    /// Attaches `callback`. Returns `true` when a still-armed callback was
    /// replaced (its selection was abandoned, e.g. the user cancelled).
    pub fn arm(&mut self, callback: PickerCallback) -> bool {
        let replaced = self.callback.replace(callback).is_some();
        self.state = SubscriptionState::Armed;
        replaced
    }

    /// Hands out the armed callback, if any.
    pub fn fire(&mut self) -> Option<PickerCallback> {
        let callback = self.callback.take()?;
        self.state = SubscriptionState::Fired;
        Some(callback)
    }

    /// Drops any pending callback without calling it.
    pub fn disarm(&mut self) {
        self.callback = None;
        self.state = SubscriptionState::Disarmed;
    }
}

impl Default for PickerSubscription {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit file-picker flow.
///
/// Owns its control: created on first use, disposed with the picker.
#[derive(Default)]
pub struct FilePicker {
    control: Option<Box<dyn PickerControl>>,
    subscription: PickerSubscription,
}

impl FilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    #[inline]
    pub fn subscription_state(&self) -> SubscriptionState {
        self.subscription.state()
    }

    /// Configures and shows the control, arming `callback` for the next selection.
    ///
    /// `create_control` runs only when no control exists yet.
    pub fn open<F>(&mut self, create_control: F, options: &PickerOptions, callback: PickerCallback) -> Result<()>
    where
        F: FnOnce() -> Result<Box<dyn PickerControl>>,
    {
        let control = match self.control.take() {
            Some(control) => control,
            None => create_control().context("failed to create file picker control")?,
        };

        control.configure(options);
        if self.subscription.arm(callback) {
            log::debug!("replaced abandoned file picker listener");
        }
        control.show();

        self.control = Some(control);
        Ok(())
    }

    /// Consumes the armed callback for a completed selection.
    pub fn take_callback(&mut self) -> Option<PickerCallback> {
        self.subscription.fire()
    }

    /// Disarms and removes the control.
    pub fn dispose(&mut self) {
        self.subscription.disarm();
        if let Some(control) = self.control.take() {
            control.dispose();
        }
    }
}
