use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::testimonials::{default_testimonials, Testimonial};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub preloader: PreloaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here while the TUI is running)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to tweens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value on completion
    None,
    /// Constant speed
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Cubic ease-in-out (`power2.inOut`)
    #[default]
    Power2InOut,
    /// Quintic ease-in-out (`power4.inOut`)
    Power4InOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds (0 = disabled)
    #[serde(default = "default_auto_advance")]
    pub auto_advance_ms: u64,
    /// Animate transitions; when false every move snaps
    #[serde(default = "default_true")]
    pub animate: bool,
    /// Duration of one slide transition in milliseconds
    #[serde(default = "default_transition")]
    pub transition_ms: u64,
    /// Easing used for slide transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Gap between cards in logical pixels
    #[serde(default = "default_item_gap")]
    pub item_gap: u32,
    /// Cards shown in the carousel
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<Testimonial>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance(),
            animate: default_true(),
            transition_ms: default_transition(),
            easing: EasingType::default(),
            item_gap: default_item_gap(),
            testimonials: default_testimonials(),
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    /// Effective transition duration; zero when animation is turned off
    pub fn transition(&self) -> Duration {
        if self.animate {
            Duration::from_millis(self.transition_ms)
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Viewports narrower than this (logical pixels) are mobile
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
    /// Logical pixels represented by one terminal column
    #[serde(default = "default_px_per_column")]
    pub px_per_column: u32,
    /// Resize debounce in milliseconds
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            mobile_breakpoint: default_mobile_breakpoint(),
            px_per_column: default_px_per_column(),
            resize_debounce_ms: default_resize_debounce(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Simulated delivery delay in milliseconds
    #[serde(default = "default_send_delay")]
    pub send_delay_ms: u64,
    /// Success/error banners hide after this many milliseconds
    #[serde(default = "default_status_hide")]
    pub status_hide_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay(),
            status_hide_ms: default_status_hide(),
        }
    }
}

impl FormConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn status_hide(&self) -> Duration {
        Duration::from_millis(self.status_hide_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloaderConfig {
    /// Play the intro sequence before showing the page
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Title revealed character by character
    #[serde(default = "default_preloader_title")]
    pub title: String,
    /// Caption under the title
    #[serde(default = "default_preloader_caption")]
    pub caption: String,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            title: default_preloader_title(),
            caption: default_preloader_caption(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ethereal")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_auto_advance() -> u64 {
    5000
}

fn default_transition() -> u64 {
    600
}

fn default_item_gap() -> u32 {
    32
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_mobile_breakpoint() -> u32 {
    crate::viewport::DESKTOP_BREAKPOINT
}

fn default_px_per_column() -> u32 {
    8
}

fn default_resize_debounce() -> u64 {
    250
}

fn default_send_delay() -> u64 {
    2000
}

fn default_status_hide() -> u64 {
    5000
}

fn default_preloader_title() -> String {
    "Ethereal".to_string()
}

fn default_preloader_caption() -> String {
    "Crafting digital experiences".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ethereal/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ethereal")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("ethereal.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.auto_advance_ms, 5000);
        assert_eq!(config.carousel.transition_ms, 600);
        assert_eq!(config.carousel.easing, EasingType::Power2InOut);
        assert_eq!(config.carousel.item_gap, 32);
        assert_eq!(config.ui.mobile_breakpoint, 992);
        assert_eq!(config.form.send_delay_ms, 2000);
        assert!(!config.carousel.testimonials.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            auto_advance_ms = 3000
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.auto_advance(), Duration::from_millis(3000));
        assert_eq!(config.carousel.easing, EasingType::Cubic);
        assert_eq!(config.carousel.transition_ms, 600);
        assert_eq!(config.form.status_hide_ms, 5000);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[carousel]\neasing = \"bouncy\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_transition_zero_when_not_animated() {
        let config = CarouselConfig {
            animate: false,
            ..Default::default()
        };
        assert_eq!(config.transition(), Duration::ZERO);
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.carousel.testimonials, config.carousel.testimonials);
    }

    #[test]
    fn test_animation_tick_fallback() {
        let ui = UiConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(ui.animation_tick(), Duration::from_millis(16));
    }
}
