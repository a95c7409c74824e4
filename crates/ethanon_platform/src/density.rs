//! Sprite density tier selection
//!
//! Screens are bucketed into density tiers by their height; each tier maps
//! to a sprite scale so art can be authored once per tier and scaled at
//! load time.

use serde::Serialize;

use crate::app_settings::AppSettings;

/// Display density tier, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DensityLevel {
    /// Extra-low definition
    Xld,
    /// Low definition
    Ld,
    /// Normal definition, the authoring baseline
    Nd,
    /// High definition
    Hd,
    /// Full high definition
    FullHd,
}

/// Scale factors and screen-height thresholds driving tier selection.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteDensityManager {
    hd_density_value: f32,
    full_hd_density_value: f32,
    ld_density_value: f32,
    xld_density_value: f32,
    min_screen_height_for_hd_version: u32,
    min_screen_height_for_full_hd_version: u32,
    max_screen_height_before_nd_version: u32,
    max_screen_height_before_ld_version: u32,
}

impl Default for SpriteDensityManager {
    fn default() -> Self {
        Self {
            hd_density_value: 2.0,
            full_hd_density_value: 4.0,
            ld_density_value: 0.5,
            xld_density_value: 0.25,
            min_screen_height_for_hd_version: 720,
            min_screen_height_for_full_hd_version: 1080,
            max_screen_height_before_nd_version: 480,
            max_screen_height_before_ld_version: 320,
        }
    }
}

impl SpriteDensityManager {
    /// Copy scale factors and thresholds from a finished settings snapshot.
    pub fn fill_parameters(&mut self, settings: &AppSettings) {
        self.hd_density_value = settings.hd_density_value();
        self.full_hd_density_value = settings.full_hd_density_value();
        self.ld_density_value = settings.ld_density_value();
        self.xld_density_value = settings.xld_density_value();
        self.min_screen_height_for_hd_version = settings.min_screen_height_for_hd_version();
        self.min_screen_height_for_full_hd_version =
            settings.min_screen_height_for_full_hd_version();
        self.max_screen_height_before_nd_version = settings.max_screen_height_before_nd_version();
        self.max_screen_height_before_ld_version = settings.max_screen_height_before_ld_version();
    }

    /// Pick the tier for a physical screen height in pixels.
    pub fn level_for_screen_height(&self, screen_height: u32) -> DensityLevel {
        if screen_height >= self.min_screen_height_for_full_hd_version {
            DensityLevel::FullHd
        } else if screen_height >= self.min_screen_height_for_hd_version {
            DensityLevel::Hd
        } else if screen_height <= self.max_screen_height_before_ld_version {
            DensityLevel::Xld
        } else if screen_height <= self.max_screen_height_before_nd_version {
            DensityLevel::Ld
        } else {
            DensityLevel::Nd
        }
    }

    /// Sprite scale for a tier. Normal definition is the authoring baseline.
    pub fn scale_for(&self, level: DensityLevel) -> f32 {
        match level {
            DensityLevel::Xld => self.xld_density_value,
            DensityLevel::Ld => self.ld_density_value,
            DensityLevel::Nd => 1.0,
            DensityLevel::Hd => self.hd_density_value,
            DensityLevel::FullHd => self.full_hd_density_value,
        }
    }

    /// Shorthand for `scale_for(level_for_screen_height(h))`.
    pub fn scale_for_screen_height(&self, screen_height: u32) -> f32 {
        self.scale_for(self.level_for_screen_height(screen_height))
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_bucket_common_screens() {
        let density = SpriteDensityManager::default();

        assert_eq!(density.level_for_screen_height(240), DensityLevel::Xld);
        assert_eq!(density.level_for_screen_height(320), DensityLevel::Xld);
        assert_eq!(density.level_for_screen_height(321), DensityLevel::Ld);
        assert_eq!(density.level_for_screen_height(480), DensityLevel::Ld);
        assert_eq!(density.level_for_screen_height(481), DensityLevel::Nd);
        assert_eq!(density.level_for_screen_height(719), DensityLevel::Nd);
        assert_eq!(density.level_for_screen_height(720), DensityLevel::Hd);
        assert_eq!(density.level_for_screen_height(1079), DensityLevel::Hd);
        assert_eq!(density.level_for_screen_height(1080), DensityLevel::FullHd);
        assert_eq!(density.level_for_screen_height(2160), DensityLevel::FullHd);
    }

    #[test]
    fn scales_match_tier_values() {
        let density = SpriteDensityManager::default();

        assert_eq!(density.scale_for(DensityLevel::Xld), 0.25);
        assert_eq!(density.scale_for(DensityLevel::Ld), 0.5);
        assert_eq!(density.scale_for(DensityLevel::Nd), 1.0);
        assert_eq!(density.scale_for(DensityLevel::Hd), 2.0);
        assert_eq!(density.scale_for(DensityLevel::FullHd), 4.0);

        assert_eq!(density.scale_for_screen_height(1080), 4.0);
        assert_eq!(density.scale_for_screen_height(600), 1.0);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(DensityLevel::Xld < DensityLevel::Ld);
        assert!(DensityLevel::Ld < DensityLevel::Nd);
        assert!(DensityLevel::Nd < DensityLevel::Hd);
        assert!(DensityLevel::Hd < DensityLevel::FullHd);
    }

    #[test]
    fn fill_parameters_copies_the_snapshot() {
        let settings = AppSettings::from_text(
            "default {\n  hdDensityValue = 1.5;\n  fullHdDensityValue = 3.0;\n  ldDensityValue = 0.75;\n  xldDensityValue = 0.4;\n  minScreenHeightForHdVersion = 700;\n  minScreenHeightForFullHdVersion = 1000;\n  maxScreenHeightBeforeNdVersion = 500;\n  maxScreenHeightBeforeLdVersion = 300;\n}",
            "",
        );

        let mut density = SpriteDensityManager::default();
        density.fill_parameters(&settings);

        assert_eq!(density.hd_density_value(), 1.5);
        assert_eq!(density.full_hd_density_value(), 3.0);
        assert_eq!(density.ld_density_value(), 0.75);
        assert_eq!(density.xld_density_value(), 0.4);
        assert_eq!(density.level_for_screen_height(1000), DensityLevel::FullHd);
        assert_eq!(density.level_for_screen_height(700), DensityLevel::Hd);
        assert_eq!(density.level_for_screen_height(300), DensityLevel::Xld);
        assert_eq!(density.level_for_screen_height(500), DensityLevel::Ld);
        assert_eq!(density.level_for_screen_height(600), DensityLevel::Nd);
    }
}
