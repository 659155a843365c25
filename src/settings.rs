//! Player preferences
//!
//! Persisted in LocalStorage on the web. Game state and scores are never
//! stored; only these preferences are.

use serde::{Deserialize, Serialize};

/// Flash opacity ceiling when reduced motion is on
const REDUCED_MOTION_FLASH_CAP: f32 = 0.35;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Theme music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    /// Pause the theme when the window loses focus
    pub mute_on_blur: bool,

    // === Accessibility ===
    /// Tone down the game-over flash
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            muted: false,
            mute_on_blur: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Volume to apply to the theme track
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Opacity to draw the game-over flash with; capped under reduced motion
    pub fn flash_alpha(&self, alpha: f32) -> f32 {
        if self.reduced_motion {
            alpha.min(REDUCED_MOTION_FLASH_CAP)
        } else {
            alpha
        }
    }

    /// Returns the new value
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Muted: {}", self.muted);
        self.muted
    }

    /// Returns the new value
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        log::info!("Reduced motion: {}", self.reduced_motion);
        self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_joe_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_music_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_music_volume() - 0.56).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_music_volume(), 0.0);
    }

    #[test]
    fn test_flash_alpha() {
        let mut settings = Settings::default();
        assert_eq!(settings.flash_alpha(1.0), 1.0);
        settings.reduced_motion = true;
        assert_eq!(settings.flash_alpha(1.0), REDUCED_MOTION_FLASH_CAP);
        // Already below the cap
        assert_eq!(settings.flash_alpha(0.2), 0.2);
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        assert!(settings.toggle_muted());
        assert_eq!(settings.effective_music_volume(), 0.0);
        assert!(!settings.toggle_muted());
        assert!(settings.effective_music_volume() > 0.0);

        assert!(settings.toggle_reduced_motion());
        assert!(settings.flash_alpha(1.0) < 1.0);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "muted": true }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.music_volume, 0.7);
        assert!(settings.mute_on_blur);
    }
}
