//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Source of the current instant
//! - `SettingsReader` - Key/value application settings (company timezone)

mod clock;
mod settings_reader;

pub use clock::Clock;
pub use settings_reader::{SettingsReader, TIMEZONE_SETTING_KEY};
