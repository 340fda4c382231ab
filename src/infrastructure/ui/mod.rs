mod console;
mod picker;

pub use console::{ConsoleRegion, SwitchToggle};
pub use picker::PathPicker;
