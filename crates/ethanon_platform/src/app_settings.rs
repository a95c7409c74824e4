//! Application settings snapshot
//!
//! Built-in defaults overlaid by up to three sections of the settings
//! file: `default`, then the legacy `window` block, then a platform-named
//! section. Later sections win per key. The snapshot is built once and
//! read-only afterwards.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, error};

use ethanon_markup::{is_true, split_list, Document, Section};

use crate::density::SpriteDensityManager;
use crate::file_io::FileReader;

/// Canonical section holding the application properties.
pub const APP_SECTION: &str = "default";

/// Older project files keep the same properties under the window block.
pub const LEGACY_APP_SECTION: &str = "window";

/// Immutable application/window configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AppSettings {
    width: u32,
    height: u32,
    windowed: bool,
    vsync: bool,
    rich_lighting: bool,
    title: String,
    fixed_width: String,
    fixed_height: String,
    hd_density_value: f32,
    full_hd_density_value: f32,
    ld_density_value: f32,
    xld_density_value: f32,
    min_screen_height_for_hd_version: u32,
    min_screen_height_for_full_hd_version: u32,
    max_screen_height_before_nd_version: u32,
    max_screen_height_before_ld_version: u32,
    defined_words: Vec<String>,
    density_manager: SpriteDensityManager,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            windowed: true,
            vsync: true,
            rich_lighting: true,
            title: "Ethanon Engine".to_string(),
            fixed_width: String::new(),
            fixed_height: String::new(),
            hd_density_value: 2.0,
            full_hd_density_value: 4.0,
            ld_density_value: 0.5,
            xld_density_value: 0.25,
            min_screen_height_for_hd_version: 720,
            min_screen_height_for_full_hd_version: 1080,
            max_screen_height_before_nd_version: 480,
            max_screen_height_before_ld_version: 320,
            defined_words: Vec::new(),
            density_manager: SpriteDensityManager::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from `path`, applying `platform_name` overrides last.
    ///
    /// Never fails: an unreadable file loads as empty, and a document that
    /// does not parse logs the error and yields the built-in defaults.
    pub fn load(path: impl AsRef<Path>, reader: &dyn FileReader, platform_name: &str) -> Self {
        let path = path.as_ref();
        let contents = match reader.read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                debug!(path = %path.display(), %err, "settings file not readable, using defaults");
                String::new()
            }
        };
        Self::from_text(&contents, platform_name)
    }

    /// Build a snapshot from settings text that has already been read.
    pub fn from_text(contents: &str, platform_name: &str) -> Self {
        let mut settings = Self::default();

        let document = match Document::parse(contents) {
            Ok(document) => document,
            Err(err) => {
                error!("failed to parse application settings: {err}");
                return settings;
            }
        };

        settings.apply(&document, APP_SECTION);
        settings.apply(&document, LEGACY_APP_SECTION);
        if !platform_name.is_empty() {
            settings.apply(&document, platform_name);
        }

        let mut density_manager = SpriteDensityManager::default();
        density_manager.fill_parameters(&settings);
        settings.density_manager = density_manager;

        settings
    }

    /// Overlay one section onto the snapshot. Absent sections are skipped;
    /// within a section every recognized key overwrites independently.
    fn apply(&mut self, document: &Document, name: &str) {
        let Some(section) = document.section(name) else {
            return;
        };

        if let Some(width) = dimension(section, "width") {
            self.width = width;
        }
        if let Some(height) = dimension(section, "height") {
            self.height = height;
        }

        if let Some(windowed) = flag(section, "windowed") {
            self.windowed = windowed;
        }
        if let Some(vsync) = flag(section, "vsync") {
            self.vsync = vsync;
        }
        if let Some(rich_lighting) = flag(section, "richLighting") {
            self.rich_lighting = rich_lighting;
        }

        if let Some(title) = text(section, "title") {
            self.title = title;
        }
        if let Some(fixed_width) = text(section, "fixedWidth") {
            self.fixed_width = fixed_width;
        }
        if let Some(fixed_height) = text(section, "fixedHeight") {
            self.fixed_height = fixed_height;
        }

        if let Some(value) = section.get_f32("hdDensityValue") {
            self.hd_density_value = value;
        }
        if let Some(value) = section.get_f32("fullHdDensityValue") {
            self.full_hd_density_value = value;
        }
        if let Some(value) = section.get_f32("ldDensityValue") {
            self.ld_density_value = value;
        }
        if let Some(value) = section.get_f32("xldDensityValue") {
            self.xld_density_value = value;
        }

        if let Some(value) = section.get_u32("minScreenHeightForHdVersion") {
            self.min_screen_height_for_hd_version = value;
        }
        if let Some(value) = section.get_u32("minScreenHeightForFullHdVersion") {
            self.min_screen_height_for_full_hd_version = value;
        }
        if let Some(value) = section.get_u32("maxScreenHeightBeforeNdVersion") {
            self.max_screen_height_before_nd_version = value;
        }
        if let Some(value) = section.get_u32("maxScreenHeightBeforeLdVersion") {
            self.max_screen_height_before_ld_version = value;
        }

        // words accumulate across sections; the collection stays sorted
        // and free of duplicates after every overlay
        if let Some(words) = text(section, "definedWords") {
            self.defined_words.extend(split_list(&words));
            self.defined_words.sort();
            self.defined_words.dedup();
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_windowed(&self) -> bool {
        self.windowed
    }

    pub fn is_vsync_enabled(&self) -> bool {
        self.vsync
    }

    pub fn is_rich_lighting_enabled(&self) -> bool {
        self.rich_lighting
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fixed_width(&self) -> &str {
        &self.fixed_width
    }

    pub fn fixed_height(&self) -> &str {
        &self.fixed_height
    }

    pub fn hd_density_value(&self) -> f32 {
        self.hd_density_value
    }

    pub fn full_hd_density_value(&self) -> f32 {
        self.full_hd_density_value
    }

    pub fn ld_density_value(&self) -> f32 {
        self.ld_density_value
    }

    pub fn xld_density_value(&self) -> f32 {
        self.xld_density_value
    }

    pub fn min_screen_height_for_hd_version(&self) -> u32 {
        self.min_screen_height_for_hd_version
    }

    pub fn min_screen_height_for_full_hd_version(&self) -> u32 {
        self.min_screen_height_for_full_hd_version
    }

    pub fn max_screen_height_before_nd_version(&self) -> u32 {
        self.max_screen_height_before_nd_version
    }

    pub fn max_screen_height_before_ld_version(&self) -> u32 {
        self.max_screen_height_before_ld_version
    }

    /// Tokens driving conditional inclusion of entities, sorted, no
    /// duplicates. The union of every applied section's list.
    pub fn defined_words(&self) -> &[String] {
        &self.defined_words
    }

    pub fn density_manager(&self) -> &SpriteDensityManager {
        &self.density_manager
    }
}

/// Non-empty string value. Empty means "not specified, keep the previous
/// value", so a once-set value can never be reset to empty by a later
/// section.
fn text(section: &Section, key: &str) -> Option<String> {
    section
        .get(key)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Non-empty flag value, truthiness per [`is_true`].
fn flag(section: &Section, key: &str) -> Option<bool> {
    section.get(key).filter(|value| !value.is_empty()).map(is_true)
}

/// Screen dimension. Absent or empty keeps the previous value; a malformed
/// value yields 0, an explicit "invalid" sentinel distinct from
/// "unspecified". Applies to width and height only; other numeric keys
/// keep their previous value on a malformed entry.
fn dimension(section: &Section, key: &str) -> Option<u32> {
    let value = section.get(key).filter(|value| !value.is_empty())?;
    Some(value.parse().unwrap_or(0))
}
