//! Ethanon Runtime
//!
//! Minimal binary that loads the application settings for the host
//! platform and reports the effective configuration.

use anyhow::Result;

use ethanon_platform::{host_platform_name, AppSettings, DiskFileReader};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "app.enml".to_string());
    let platform = host_platform_name();

    tracing::info!("Ethanon platform layer v{}", ethanon_platform::VERSION);
    tracing::info!(%path, platform, "loading application settings");

    let settings = AppSettings::load(&path, &DiskFileReader, platform);

    tracing::info!(
        title = settings.title(),
        width = settings.width(),
        height = settings.height(),
        windowed = settings.is_windowed(),
        vsync = settings.is_vsync_enabled(),
        rich_lighting = settings.is_rich_lighting_enabled(),
        "window configuration"
    );

    let density = settings.density_manager();
    let level = density.level_for_screen_height(settings.height());
    tracing::info!(
        ?level,
        scale = density.scale_for(level),
        "density tier for the configured height"
    );

    if !settings.defined_words().is_empty() {
        tracing::info!(words = ?settings.defined_words(), "defined words");
    }

    tracing::debug!(
        "effective settings: {}",
        serde_json::to_string_pretty(&settings)?
    );

    Ok(())
}
