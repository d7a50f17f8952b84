//! Timezone handlers.
//!
//! Resolves the company zone from the settings store, degrading to the
//! configured default.

mod resolve_timezone;

pub use resolve_timezone::TimezoneResolver;
