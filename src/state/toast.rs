//! Transient notification banner.
//!
//! Each `show` bumps a sequence number. A hide scheduled for an earlier
//! toast carries the old number and is ignored, so a quick second toast is
//! never cut short by the first one's timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
}

impl ToastKind {
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    pub seq: u64,
}

impl ToastState {
    /// Show `message` and return the sequence number to hide it with.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.seq += 1;
        self.seq
    }

    /// Hide the toast if `seq` is still the latest one shown.
    ///
    /// Returns `true` if the toast was hidden.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Class list for the toast element, e.g. `"toast success show"`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let kind = self.kind.as_class();
        if self.visible { format!("toast {kind} show") } else { format!("toast {kind}") }
    }
}
