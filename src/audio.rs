//! Theme music driven by game events
//!
//! The theme starts when a run starts and stops (rewound) when the run ends.
//! Backends implement [`ThemeTrack`]; the browser one wraps an `<audio>`
//! element.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// A looping music track
pub trait ThemeTrack {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek back to the beginning
    fn rewind(&mut self);
    /// Volume in 0.0 - 1.0
    fn set_volume(&mut self, volume: f32);
}

/// Starts and stops the theme in response to [`GameEvent`]s
pub struct Soundtrack<T: ThemeTrack> {
    track: T,
    playing: bool,
    /// Paused because the window lost focus
    suspended: bool,
}

impl<T: ThemeTrack> Soundtrack<T> {
    pub fn new(track: T) -> Self {
        Self {
            track,
            playing: false,
            suspended: false,
        }
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn is_playing(&self) -> bool {
        self.playing && !self.suspended
    }

    /// React to one game event
    pub fn handle(&mut self, event: &GameEvent, settings: &Settings) {
        match event {
            GameEvent::Started | GameEvent::Restarted => {
                self.track.set_volume(settings.effective_music_volume());
                self.track.play();
                self.playing = true;
                self.suspended = false;
            }
            GameEvent::Ended { .. } => {
                self.track.pause();
                self.track.rewind();
                self.playing = false;
            }
            GameEvent::Jumped | GameEvent::Scored { .. } => {}
        }
    }

    /// Push changed volume settings to the track
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.track.set_volume(settings.effective_music_volume());
    }

    /// Window lost focus
    pub fn suspend(&mut self) {
        if self.playing && !self.suspended {
            self.track.pause();
            self.suspended = true;
        }
    }

    /// Window regained focus; resumes only what [`Self::suspend`] paused
    pub fn resume(&mut self) {
        if self.suspended {
            self.suspended = false;
            if self.playing {
                self.track.play();
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use html::HtmlThemeTrack;

#[cfg(target_arch = "wasm32")]
mod html {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlAudioElement;

    use super::ThemeTrack;
    use crate::error::GameError;

    /// Theme backed by an `<audio>` element in the page
    pub struct HtmlThemeTrack {
        element: HtmlAudioElement,
        // Reused for every rejected play() promise
        on_play_error: Closure<dyn FnMut(JsValue)>,
    }

    impl HtmlThemeTrack {
        pub fn from_document(document: &web_sys::Document, id: &str) -> Result<Self, GameError> {
            let element = document
                .get_element_by_id(id)
                .ok_or_else(|| GameError::MissingElement(id.to_string()))?
                .dyn_into::<HtmlAudioElement>()
                .map_err(|_| GameError::MissingElement(format!("{id} is not an <audio> element")))?;
            element.set_loop(true);

            let on_play_error = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
                log::warn!("Theme playback blocked: {:?}", err);
            });

            Ok(Self {
                element,
                on_play_error,
            })
        }
    }

    impl ThemeTrack for HtmlThemeTrack {
        fn play(&mut self) {
            match self.element.play() {
                Ok(promise) => {
                    let _ = promise.catch(&self.on_play_error);
                }
                Err(e) => log::warn!("Failed to play theme: {:?}", e),
            }
        }

        fn pause(&mut self) {
            if let Err(e) = self.element.pause() {
                log::warn!("Failed to pause theme: {:?}", e);
            }
        }

        fn rewind(&mut self) {
            self.element.set_current_time(0.0);
        }

        fn set_volume(&mut self, volume: f32) {
            self.element.set_volume(volume.clamp(0.0, 1.0) as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockTrack {
        calls: Vec<&'static str>,
        volume: f32,
    }

    impl ThemeTrack for MockTrack {
        fn play(&mut self) {
            self.calls.push("play");
        }
        fn pause(&mut self) {
            self.calls.push("pause");
        }
        fn rewind(&mut self) {
            self.calls.push("rewind");
        }
        fn set_volume(&mut self, volume: f32) {
            self.calls.push("volume");
            self.volume = volume;
        }
    }

    fn ended() -> GameEvent {
        GameEvent::Ended {
            score: 1,
            high_score: 1,
            new_best: true,
        }
    }

    #[test]
    fn test_start_and_end() {
        let settings = Settings::default();
        let mut soundtrack = Soundtrack::new(MockTrack::default());

        soundtrack.handle(&GameEvent::Started, &settings);
        assert!(soundtrack.is_playing());
        assert_eq!(soundtrack.track().calls, ["volume", "play"]);
        assert!((soundtrack.track().volume - settings.effective_music_volume()).abs() < 1e-6);

        soundtrack.handle(&GameEvent::Jumped, &settings);
        soundtrack.handle(&ended(), &settings);
        assert!(!soundtrack.is_playing());
        assert_eq!(
            soundtrack.track().calls,
            ["volume", "play", "pause", "rewind"]
        );
    }

    #[test]
    fn test_restart_plays_again() {
        let settings = Settings::default();
        let mut soundtrack = Soundtrack::new(MockTrack::default());
        soundtrack.handle(&GameEvent::Started, &settings);
        soundtrack.handle(&ended(), &settings);
        soundtrack.handle(&GameEvent::Restarted, &settings);
        assert!(soundtrack.is_playing());
        assert_eq!(soundtrack.track().calls.last(), Some(&"play"));
    }

    #[test]
    fn test_muted_plays_silently() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut soundtrack = Soundtrack::new(MockTrack::default());
        soundtrack.handle(&GameEvent::Started, &settings);
        assert_eq!(soundtrack.track().volume, 0.0);
    }

    #[test]
    fn test_suspend_only_resumes_what_it_paused() {
        let settings = Settings::default();
        let mut soundtrack = Soundtrack::new(MockTrack::default());

        // Nothing playing: blur and focus are no-ops
        soundtrack.suspend();
        soundtrack.resume();
        assert!(soundtrack.track().calls.is_empty());

        soundtrack.handle(&GameEvent::Started, &settings);
        soundtrack.suspend();
        assert!(!soundtrack.is_playing());
        soundtrack.resume();
        assert!(soundtrack.is_playing());
        assert_eq!(
            soundtrack.track().calls,
            ["volume", "play", "pause", "play"]
        );
    }
}
