//! Settings Adapters
//!
//! Implementations of the SettingsReader port.
//!
//! ## Available Adapters
//!
//! - **PostgresSettingsReader** - Reads the `settings` table
//! - **InMemorySettingsReader** - Stores settings in memory (testing/no database)

mod in_memory_settings_reader;
mod postgres_settings_reader;

pub use in_memory_settings_reader::InMemorySettingsReader;
pub use postgres_settings_reader::PostgresSettingsReader;
