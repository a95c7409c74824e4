//! Ethanon Platform Layer
//!
//! Application configuration and the services around it:
//! - file reading seam ([`file_io`])
//! - the application settings snapshot and cascading loader ([`app_settings`])
//! - sprite density tier selection ([`density`])
//! - host platform identification ([`host`])

pub mod app_settings;
pub mod density;
pub mod file_io;
pub mod host;

pub use app_settings::AppSettings;
pub use density::{DensityLevel, SpriteDensityManager};
pub use file_io::{DiskFileReader, FileReader, MemoryFileReader};
pub use host::host_platform_name;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
