//! Venue clock entry-point: loads configuration, resolves the company zone
//! and reports the current civil reading.

use std::sync::Arc;

use venue_clock::adapters::{InMemorySettingsReader, PostgresSettingsReader, SystemClock};
use venue_clock::application::TimezoneResolver;
use venue_clock::config::AppConfig;
use venue_clock::domain::clock::CivilClockProjector;
use venue_clock::ports::{Clock, SettingsReader};
use venue_clock::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.runtime);

    let settings: Arc<dyn SettingsReader> = match &config.database {
        Some(database) => {
            let pool = database.pool_options().connect(&database.url).await?;
            tracing::info!("Using PostgreSQL settings store");
            Arc::new(PostgresSettingsReader::new(pool))
        }
        None => {
            tracing::info!("No database configured; using in-memory settings store");
            Arc::new(InMemorySettingsReader::new())
        }
    };

    let resolver = TimezoneResolver::new(settings, config.clock.default_timezone_id());
    let tz = resolver.resolve().await;

    let clock = SystemClock;
    let now = clock.now();
    let today = config.clock.date_codec().today(&clock, &tz);
    let reading = CivilClockProjector::project(&now, &tz);

    tracing::info!(
        timezone = %tz,
        %today,
        wall_clock = %reading.date_time,
        offset_minutes = CivilClockProjector::offset_minutes(&now, &tz),
        strategy = %config.clock.strategy,
        "Company clock ready"
    );

    Ok(())
}
