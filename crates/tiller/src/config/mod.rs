//! Configuration loading.
//!
//! Config is read from `~/.config/tiller/config.toml`. Missing files and
//! unreadable values fall back to defaults; the core never refuses to
//! start over configuration. Uses TOML format with serde.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SCROLL_STEP: f64 = 40.0;
const DEFAULT_ZOOM_STEP: f32 = 0.1;


/// Resolved shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Command template for the external editor. A literal `%s` receives
    /// the temp-file path; without one the path is appended.
    pub editor_command: Option<String>,
    /// Pixels moved by a single line scroll.
    pub scroll_step: f64,
    /// Zoom change per `zoomin`/`zoomout` step.
    pub zoom_step: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            editor_command: None,
            scroll_step: DEFAULT_SCROLL_STEP,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    editor: Option<RawEditor>,
    view: Option<RawView>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEditor {
    command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawView {
    #[serde(alias = "scrollStep")]
    scroll_step: Option<f64>,
    #[serde(alias = "zoomStep")]
    zoom_step: Option<f32>,
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("tiller").join("config.toml"))
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    toml::from_str(&contents).ok()
}

fn apply(config: &mut ShellConfig, raw: RawConfig) {
    if let Some(editor) = raw.editor {
        if editor.command.is_some() {
            config.editor_command = editor.command;
        }
    }
    if let Some(view) = raw.view {
        if let Some(step) = view.scroll_step {
            config.scroll_step = step;
        }
        if let Some(step) = view.zoom_step {
            config.zoom_step = step;
        }
    }
}

/// Load configuration from an explicit file path.
pub fn load_config_from(path: &Path) -> ShellConfig {
    let mut config = ShellConfig::default();
    if let Some(raw) = read_toml(path) {
        apply(&mut config, raw);
    }
    config
}

/// Load configuration from the user config file, if present.
pub fn load_config() -> ShellConfig {
    match user_config_path() {
        Some(path) => load_config_from(&path),
        None => ShellConfig::default(),
    }
}
