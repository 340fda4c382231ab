/// A named output the client writes text into.
pub trait TextRegion: Send + Sync {
    fn set_text(&self, text: &str);
    fn text(&self) -> String;
}

/// An action control that can be enabled or disabled.
pub trait Toggle: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn is_enabled(&self) -> bool;
}
