//! Tool configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# ledmux configuration — changes made outside the tool may be overwritten.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the color channel devices. Default: "/sys/class/leds".
    #[serde(default = "default_led_root")]
    pub led_root: String,

    /// Candidate display backlight brightness files, probed in order; the
    /// first writable one is used.
    #[serde(default = "default_backlight_paths")]
    pub backlight_paths: Vec<String>,

    /// Maximum display backlight brightness file. Empty = assume 255.
    #[serde(default = "default_max_backlight_path")]
    pub max_backlight_path: String,

    /// Candidate button backlight brightness files; every writable one is
    /// driven together.
    #[serde(default = "default_button_paths")]
    pub button_paths: Vec<String>,
}

fn default_led_root() -> String {
    "/sys/class/leds".into()
}

fn default_backlight_paths() -> Vec<String> {
    vec![
        "/sys/class/backlight/panel0-backlight/brightness".into(),
        "/sys/class/leds/lcd-backlight/brightness".into(),
    ]
}

fn default_max_backlight_path() -> String {
    "/sys/class/leds/lcd-backlight/max_brightness".into()
}

fn default_button_paths() -> Vec<String> {
    vec![
        "/sys/class/leds/button-backlight/brightness".into(),
        "/sys/class/leds/button-backlight1/brightness".into(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            led_root: default_led_root(),
            backlight_paths: default_backlight_paths(),
            max_backlight_path: default_max_backlight_path(),
            button_paths: default_button_paths(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The `led_root` field is empty or whitespace-only.
    EmptyLedRoot,
    /// A path field is not absolute (`field` names it, with an index for
    /// list entries, e.g. `"backlight_paths[1]"`).
    RelativePath { field: String, path: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyLedRoot => write!(f, "led_root cannot be empty"),
            ValidationError::RelativePath { field, path } => {
                write!(f, "{field} must be an absolute path, got \"{path}\"")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ledmux"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Save config to the default platform path.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory",
            ));
        };
        self.save_to(&path)
    }

    /// Save config to an arbitrary path atomically (write to temp file, then rename).
    ///
    /// A header comment is prepended to warn that manual edits may be overwritten.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        match std::fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Rename can fail across filesystems; fall back to direct write + cleanup
                let result = std::fs::write(path, &contents);
                let _ = std::fs::remove_file(&tmp);
                result
            }
        }
    }

    /// Validate the entire config, collecting all errors.
    ///
    /// Every configured path must be absolute; sysfs attribute files are
    /// never resolved relative to the working directory.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.led_root.trim().is_empty() {
            errors.push(ValidationError::EmptyLedRoot);
        } else if !Path::new(&self.led_root).is_absolute() {
            errors.push(ValidationError::RelativePath {
                field: "led_root".into(),
                path: self.led_root.clone(),
            });
        }

        for (i, p) in self.backlight_paths.iter().enumerate() {
            if !Path::new(p).is_absolute() {
                errors.push(ValidationError::RelativePath {
                    field: format!("backlight_paths[{i}]"),
                    path: p.clone(),
                });
            }
        }

        if !self.max_backlight_path.trim().is_empty()
            && !Path::new(&self.max_backlight_path).is_absolute()
        {
            errors.push(ValidationError::RelativePath {
                field: "max_backlight_path".into(),
                path: self.max_backlight_path.clone(),
            });
        }

        for (i, p) in self.button_paths.iter().enumerate() {
            if !Path::new(p).is_absolute() {
                errors.push(ValidationError::RelativePath {
                    field: format!("button_paths[{i}]"),
                    path: p.clone(),
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
