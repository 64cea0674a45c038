//! Text export to the clipboard (or wherever the host can put it).
//!
//! The chain tries each target in order and stops at the first success.
//! Failures are swallowed; the caller only learns whether anything
//! accepted the text.

use crate::error::ExportError;

/// One place exported text can go.
pub trait ExportTarget {
    fn name(&self) -> &'static str;
    fn write_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// Ordered target chain: primary first, fallbacks after.
#[derive(Default)]
pub struct Exporter {
    targets: Vec<Box<dyn ExportTarget>>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, target: Box<dyn ExportTarget>) -> Self {
        self.targets.push(target);
        self
    }

    /// Try each target in order. Returns the name of the target that took
    /// the text, or `None` when every target failed (which is not an error
    /// to the session -- the state simply stays unchanged).
    pub fn export(&mut self, text: &str) -> Option<&'static str> {
        for target in &mut self.targets {
            if target.write_text(text).is_ok() {
                return Some(target.name());
            }
        }
        None
    }
}
