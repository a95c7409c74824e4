//! End-to-end loader tests against real files on disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ethanon_platform::{AppSettings, DensityLevel, DiskFileReader};

fn write_settings(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("app.enml");
    fs::write(&path, contents).expect("write settings file");
    path
}

#[test]
fn loads_a_typical_project_file() {
    let dir = TempDir::new().expect("tmp");
    let path = write_settings(
        &dir,
        r#"
/* Asteroids sample project */
default
{
    width = 1024;
    height = 768;
    windowed = true;
    vsync = false;
    richLighting = false;
    title = "Asteroids";
    definedWords = desktop;
}

android
{
    width = 0;
    height = 0;
    windowed = false;
    fixedHeight = 720;
    definedWords = mobile, touch;
}
"#,
    );

    let desktop = AppSettings::load(&path, &DiskFileReader, "");
    assert_eq!(desktop.width(), 1024);
    assert_eq!(desktop.height(), 768);
    assert!(desktop.is_windowed());
    assert!(!desktop.is_vsync_enabled());
    assert!(!desktop.is_rich_lighting_enabled());
    assert_eq!(desktop.title(), "Asteroids");
    assert_eq!(desktop.fixed_height(), "");
    assert_eq!(desktop.defined_words(), ["desktop"]);

    let android = AppSettings::load(&path, &DiskFileReader, "android");
    assert_eq!(android.width(), 0);
    assert_eq!(android.height(), 0);
    assert!(!android.is_windowed());
    assert_eq!(android.fixed_height(), "720");
    assert_eq!(android.defined_words(), ["desktop", "mobile", "touch"]);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().expect("tmp");
    let path = dir.path().join("nowhere.enml");

    let settings = AppSettings::load(&path, &DiskFileReader, "windows");
    assert_eq!(settings.width(), 640);
    assert_eq!(settings.height(), 480);
    assert_eq!(settings.title(), "Ethanon Engine");
    assert!(settings.defined_words().is_empty());
}

#[test]
fn malformed_file_yields_defaults() {
    let dir = TempDir::new().expect("tmp");
    let path = write_settings(&dir, "default {\n    width = 1024\n    height = 768;\n}\n");

    let settings = AppSettings::load(&path, &DiskFileReader, "");
    assert_eq!(settings.width(), 640);
    assert_eq!(settings.height(), 480);
}

#[test]
fn cascade_is_last_writer_wins_per_key() {
    let dir = TempDir::new().expect("tmp");
    let path = write_settings(
        &dir,
        "default { width = 1; height = 10; title = Default; }\n\
         window { height = 20; vsync = false; }\n\
         ios { width = 3; }\n",
    );

    let settings = AppSettings::load(&path, &DiskFileReader, "ios");
    // width: default then ios; height: default then legacy window
    assert_eq!(settings.width(), 3);
    assert_eq!(settings.height(), 20);
    assert_eq!(settings.title(), "Default");
    assert!(!settings.is_vsync_enabled());
}

#[test]
fn density_tiers_follow_the_loaded_thresholds() {
    let dir = TempDir::new().expect("tmp");
    let path = write_settings(
        &dir,
        "default { minScreenHeightForHdVersion = 640; hdDensityValue = 2.5; }\n",
    );

    let settings = AppSettings::load(&path, &DiskFileReader, "");
    let density = settings.density_manager();

    assert_eq!(density.level_for_screen_height(640), DensityLevel::Hd);
    assert_eq!(density.scale_for(DensityLevel::Hd), 2.5);
    assert_eq!(density.level_for_screen_height(639), DensityLevel::Nd);
}
