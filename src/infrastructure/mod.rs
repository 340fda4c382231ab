pub mod config;
pub mod transport;
pub mod ui;

pub use config::{AppConfig, ConfigError};
pub use transport::HttpTransport;
pub use ui::{ConsoleRegion, PathPicker, SwitchToggle};
