//! Startup configuration: TOML files merged with CLI flags.
//!
//! Sources, highest priority first:
//! 1. CLI flags (`--config`, `--theme`)
//! 2. `$FB_TUI_CONFIG` environment variable (path to config file)
//! 3. Project-local `.fb-tui.toml` in the current working directory
//! 4. Global `~/.config/fb-tui/config.toml`
//! 5. Built-in defaults
//!
//! Configuration is read once at startup and never written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Section configs ──────────────────────────────────────────────────────────

/// The `[general]` table.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Starting directory (overridden by the CLI positional arg).
    pub start_path: Option<String>,
    /// Render the controls pane under the preview.
    pub show_controls: Option<bool>,
}

/// Per-role color overrides under `[theme.custom]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub listing_fg: Option<String>,
    pub listing_dir_fg: Option<String>,
    pub listing_selected_bg: Option<String>,
    pub listing_selected_fg: Option<String>,
    pub path_fg: Option<String>,
    pub preview_fg: Option<String>,
    pub preview_dir_fg: Option<String>,
    pub border_fg: Option<String>,
}

/// The `[theme]` table.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Scheme name: "dark", "light", or "custom".
    pub scheme: Option<String>,
    /// Role colors applied on top of the base palette.
    pub custom: Option<ThemeColorsConfig>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// The whole configuration tree.
///
/// Every leaf is an `Option` so partial sources merge cleanly: a file that
/// only sets `[theme]` leaves `[general]` untouched.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub theme: ThemeConfig,
}

// ── File discovery ───────────────────────────────────────────────────────────

/// Candidate config files, highest priority first. The explicit `--config`
/// path is not part of this list; `load` handles it on its own.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var("FB_TUI_CONFIG") {
        paths.push(PathBuf::from(env_path));
    }

    // Project-local file in the working directory.
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".fb-tui.toml"));
    }

    // Global `~/.config/fb-tui/config.toml`.
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fb-tui").join("config.toml"));
    }

    paths
}

/// Parse one TOML file. A missing file is silently skipped; a file that
/// exists but fails to parse prints a warning to stderr and is skipped.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!("warning: ignoring config file {}: {e}", path.display());
            None
        }
    }
}

// ── Merge and load ───────────────────────────────────────────────────────────

impl AppConfig {
    /// Fold `other` onto `self`; wherever `other` has `Some`, it wins.
    /// The custom color table is replaced as a whole, never field by field.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                start_path: other.general.start_path.clone().or(self.general.start_path),
                show_controls: other.general.show_controls.or(self.general.show_controls),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: other.theme.custom.clone().or(self.theme.custom),
            },
        }
    }

    /// Assemble the effective configuration from every source.
    ///
    /// `cli_config_path` comes from `--config`; `cli_overrides` carries the
    /// individual flag values (`--theme`) as a partial config.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        // Candidates are listed highest priority first, so fold them in
        // reverse and let later merges overwrite earlier ones.
        for path in candidate_paths().iter().rev() {
            if let Some(file_cfg) = load_file(path) {
                config = config.merge(&file_cfg);
            }
        }

        // An explicit --config file beats every discovered candidate.
        if let Some(cli_path) = cli_config_path {
            if let Some(file_cfg) = load_file(cli_path) {
                config = config.merge(&file_cfg);
            }
        }

        // Individual CLI flags beat everything.
        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Getters with defaults ────────────────────────────────────────────────

    /// Configured starting directory, if any.
    pub fn start_path(&self) -> Option<&str> {
        self.general.start_path.as_deref()
    }

    /// Whether the controls pane is rendered.
    pub fn show_controls(&self) -> bool {
        self.general.show_controls.unwrap_or(true)
    }

    /// Theme scheme: "dark", "light", or "custom".
    #[allow(dead_code)]
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
