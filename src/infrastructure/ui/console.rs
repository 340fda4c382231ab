use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::ports::{TextRegion, Toggle};

/// Text region that keeps its current contents and optionally echoes every
/// update to stdout as `label: text`.
pub struct ConsoleRegion {
    label: String,
    text: RwLock<String>,
    echo: bool,
}

impl ConsoleRegion {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: RwLock::new(String::new()),
            echo: true,
        }
    }

    pub fn quiet(label: impl Into<String>) -> Self {
        Self {
            echo: false,
            ..Self::new(label)
        }
    }
}

impl TextRegion for ConsoleRegion {
    fn set_text(&self, text: &str) {
        match self.text.write() {
            Ok(mut current) => *current = text.to_string(),
            Err(poisoned) => *poisoned.into_inner() = text.to_string(),
        }
        tracing::debug!(region = %self.label, "region updated");
        if self.echo {
            println!("{}: {}", self.label, text);
        }
    }

    fn text(&self) -> String {
        match self.text.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

pub struct SwitchToggle {
    label: String,
    enabled: AtomicBool,
}

impl SwitchToggle {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled: AtomicBool::new(enabled),
        }
    }
}

impl Toggle for SwitchToggle {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        tracing::debug!(control = %self.label, enabled, "control toggled");
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_replaces_text() {
        let region = ConsoleRegion::quiet("vector");
        assert_eq!(region.text(), "");

        region.set_text("first");
        region.set_text("second");

        assert_eq!(region.text(), "second");
    }

    #[test]
    fn test_toggle() {
        let toggle = SwitchToggle::new("search", false);
        assert!(!toggle.is_enabled());
        toggle.set_enabled(true);
        assert!(toggle.is_enabled());
    }
}
