use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::{DEFAULT_BACKUP_FILE, DEFAULT_BOARD_FILE};
use crate::tui::DEFAULT_CHAR_LIMIT;

/// Global configuration (stored in ~/.config/kanterm/)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Board file, relative paths resolve against the working directory
    #[serde(default = "default_board_file")]
    pub board_file: PathBuf,

    /// Backup file written on demand, never read back
    #[serde(default = "default_backup_file")]
    pub backup_file: PathBuf,

    /// Maximum task title length accepted by the input box
    #[serde(default = "default_title_char_limit")]
    pub title_char_limit: usize,

    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            board_file: default_board_file(),
            backup_file: default_backup_file(),
            title_char_limit: default_title_char_limit(),
            theme: ThemeConfig::default(),
        }
    }
}

fn default_board_file() -> PathBuf {
    PathBuf::from(DEFAULT_BOARD_FILE)
}

fn default_backup_file() -> PathBuf {
    PathBuf::from(DEFAULT_BACKUP_FILE)
}

fn default_title_char_limit() -> usize {
    DEFAULT_CHAR_LIMIT
}

/// Theme configuration with hex colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Border color for the focused column and selected task (hex, e.g. "#7D56F4")
    #[serde(default = "default_color_selected")]
    pub color_selected: String,

    /// Border color for unfocused columns (hex)
    #[serde(default = "default_color_normal")]
    pub color_normal: String,

    /// Color for unselected task titles (hex)
    #[serde(default = "default_color_dimmed")]
    pub color_dimmed: String,

    /// Text color for the selected task (hex)
    #[serde(default = "default_color_text")]
    pub color_text: String,

    /// Color for column headers (hex)
    #[serde(default = "default_color_column_header")]
    pub color_column_header: String,

    /// Color for the input popup border (hex)
    #[serde(default = "default_color_popup_border")]
    pub color_popup_border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_selected: default_color_selected(),
            color_normal: default_color_normal(),
            color_dimmed: default_color_dimmed(),
            color_text: default_color_text(),
            color_column_header: default_color_column_header(),
            color_popup_border: default_color_popup_border(),
        }
    }
}

fn default_color_selected() -> String {
    "#7D56F4".to_string() // Violet
}

fn default_color_normal() -> String {
    "#444444".to_string() // Dark Gray
}

fn default_color_dimmed() -> String {
    "#9C9991".to_string() // Gray
}

fn default_color_text() -> String {
    "#FF5FAF".to_string() // Pink
}

fn default_color_column_header() -> String {
    "#F2ECE6".to_string() // Light Rose
}

fn default_color_popup_border() -> String {
    "#5F5FD7".to_string() // Slate Blue
}

impl ThemeConfig {
    /// Parse a hex color string to RGB tuple
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl GlobalConfig {
    /// Load global config from default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from TOML text, filling in defaults for missing keys
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse global config")
    }

    /// Save config to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// First run: write the default config to `path` unless a file is
    /// already there. Returns `true` if a file was written.
    pub fn ensure_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Write the default config to the default location on first run
    pub fn ensure_default() -> Result<bool> {
        Self::ensure_default_at(&Self::config_path()?)
    }

    /// Get the path to the global config file
    /// Always uses ~/.config/kanterm/ on all platforms
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("kanterm").join("config.toml"))
    }

    /// Get the path to the global data directory (log files)
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "kanterm")
            .context("Could not determine data directory")?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Use a different board file, e.g. from the command line
    pub fn with_board_file(mut self, board_file: impl Into<PathBuf>) -> Self {
        self.board_file = board_file.into();
        self
    }
}
