//! Toasts and modal dialogs as plain state; the page renders whatever is here.

use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTone {
    Info,
    Warning,
    Error,
    Success,
}

impl ModalTone {
    pub fn icon(self) -> &'static str {
        match self {
            ModalTone::Info => "ℹ️",
            ModalTone::Warning => "⚠️",
            ModalTone::Error => "❌",
            ModalTone::Success => "✅",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ModalTone::Info => "modal-info",
            ModalTone::Warning => "modal-warning",
            ModalTone::Error => "modal-error",
            ModalTone::Success => "modal-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChooserOption<T> {
    pub label: String,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal<T> {
    /// Informational dialog with a single acknowledge button.
    Alert { title: String, message: String, tone: ModalTone },
    /// Blocking choice among options; picking one closes the dialog.
    Chooser { title: String, subtitle: String, options: Vec<ChooserOption<T>> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Pending toasts plus at most one open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Notifications<T> {
    toasts: Vec<Toast>,
    modal: Option<Modal<T>>,
    next_id: u64,
}

impl<T> Default for Notifications<T> {
    fn default() -> Self {
        Self { toasts: Vec::new(), modal: None, next_id: 0 }
    }
}

impl<T: Clone> Notifications<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast. The caller expires it after the toast duration.
    pub fn toast(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into() });
        id
    }

    pub fn expire(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn alert(&mut self, title: impl Into<String>, message: impl Into<String>, tone: ModalTone) {
        self.modal = Some(Modal::Alert { title: title.into(), message: message.into(), tone });
    }

    pub fn choose(
        &mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        options: Vec<ChooserOption<T>>,
    ) {
        self.modal = Some(Modal::Chooser {
            title: title.into(),
            subtitle: subtitle.into(),
            options,
        });
    }

    pub fn modal(&self) -> Option<&Modal<T>> {
        self.modal.as_ref()
    }

    /// Backdrop click, cancel and acknowledge all end up here.
    pub fn dismiss(&mut self) {
        self.modal = None;
    }

    /// Close the chooser and hand back the picked value. The dialog is gone
    /// before the caller acts on the value, so that action may open another
    /// modal without stacking.
    pub fn pick(&mut self, index: usize) -> Option<T> {
        match self.modal.take() {
            Some(Modal::Chooser { options, .. }) => options.get(index).map(|o| o.value.clone()),
            other => {
                self.modal = other;
                None
            }
        }
    }
}
