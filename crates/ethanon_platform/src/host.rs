//! Host platform identification
//!
//! Platform-specific settings sections are named after these identifiers,
//! so `windows { ... }` applies only when running on Windows.

#[cfg(target_os = "windows")]
pub fn host_platform_name() -> &'static str {
    "windows"
}

#[cfg(target_os = "macos")]
pub fn host_platform_name() -> &'static str {
    "macosx"
}

#[cfg(target_os = "ios")]
pub fn host_platform_name() -> &'static str {
    "ios"
}

#[cfg(target_os = "android")]
pub fn host_platform_name() -> &'static str {
    "android"
}

#[cfg(target_os = "linux")]
pub fn host_platform_name() -> &'static str {
    "linux"
}

// unknown targets get no platform section at all
#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android",
    target_os = "linux"
)))]
pub fn host_platform_name() -> &'static str {
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_stable_and_lowercase() {
        let name = host_platform_name();
        assert_eq!(name, name.to_ascii_lowercase());
    }
}
