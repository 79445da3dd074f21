use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub fact: FactConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub names: NamesConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Durations of the transient UI timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the "thanks for the like" acknowledgment stays up (default: 3000).
    #[serde(default = "default_like_ack_ms")]
    pub like_ack_ms: u64,
    /// Period of the gallery auto-advance (default: 5000).
    #[serde(default = "default_gallery_interval_ms")]
    pub gallery_interval_ms: u64,
}

impl TimingConfig {
    pub fn like_ack_window(&self) -> Duration {
        Duration::from_millis(self.like_ack_ms)
    }

    pub fn gallery_interval(&self) -> Duration {
        Duration::from_millis(self.gallery_interval_ms)
    }
}

/// Gallery contents and operating mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Image references, in display order.
    #[serde(default = "content::default_images")]
    pub images: Vec<String>,
    /// Advance to the next image on a timer.
    #[serde(default = "default_auto_advance")]
    pub auto_advance: bool,
}

/// Remote fact service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactConfig {
    /// Endpoint queried with a plain GET.
    #[serde(default = "default_fact_url")]
    pub url: String,
    /// JSON field holding the fact text.
    #[serde(default = "default_text_field")]
    pub text_field: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_fact_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Input domain and output range of the scroll-driven header animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Scroll positions are clamped to `[0, domain]` (default: 300).
    #[serde(default = "default_scroll_domain")]
    pub domain: f32,
    /// Parallax offset reached at the end of the domain (default: 150).
    #[serde(default = "default_parallax_max")]
    pub parallax_max: f32,
}

/// Optional overrides for the display-name word pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamesConfig {
    #[serde(default)]
    pub honorifics: Option<Vec<String>>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
    #[serde(default)]
    pub suffixes: Option<Vec<String>>,
}

/// Where the theme preference is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Overrides the default `preferences.toml` next to the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Diagnostic log output. Off unless a file is named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Base path of the log file; `FELINE_SHOWCASE_LOG` takes precedence.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_like_ack_ms() -> u64 {
    3000
}

fn default_gallery_interval_ms() -> u64 {
    5000
}

fn default_auto_advance() -> bool {
    true
}

fn default_fact_url() -> String {
    "https://catfact.ninja/fact".to_string()
}

fn default_text_field() -> String {
    "fact".to_string()
}

fn default_fact_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_scroll_domain() -> f32 {
    300.0
}

fn default_parallax_max() -> f32 {
    150.0
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            like_ack_ms: default_like_ack_ms(),
            gallery_interval_ms: default_gallery_interval_ms(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images: content::default_images(),
            auto_advance: default_auto_advance(),
        }
    }
}

impl Default for FactConfig {
    fn default() -> Self {
        Self {
            url: default_fact_url(),
            text_field: default_text_field(),
            timeout_seconds: default_fact_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            domain: default_scroll_domain(),
            parallax_max: default_parallax_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
