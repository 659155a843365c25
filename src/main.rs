//! Flappy Joe entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;

    use flappy_joe::audio::{HtmlThemeTrack, Soundtrack};
    use flappy_joe::autopilot::Autopilot;
    use flappy_joe::platform::{Action, InputQueue};
    use flappy_joe::renderer::canvas::CanvasSurface;
    use flappy_joe::renderer::{TextureId, draw_frame};
    use flappy_joe::sim::{GameState, Scene, SpriteSizes, tick};
    use flappy_joe::{GameError, Settings, Tuning};

    const CANVAS_ID: &str = "canvas";
    const THEME_ID: &str = "audio-theme";

    /// Everything the browser callbacks share
    struct App {
        state: GameState,
        input: InputQueue,
        surface: CanvasSurface,
        soundtrack: Option<Soundtrack<HtmlThemeTrack>>,
        settings: Settings,
        autopilot: Option<Autopilot>,
    }

    impl App {
        /// One animation frame: drain input, tick, react to events, draw
        fn frame(&mut self) {
            let mut input = self.input.drain();
            if let Some(pilot) = &self.autopilot {
                input.jump |= pilot.decide(&self.state).jump;
            }

            tick(&mut self.state, &input);

            for event in self.state.drain_events() {
                if let Some(soundtrack) = &mut self.soundtrack {
                    soundtrack.handle(&event, &self.settings);
                }
            }

            draw_frame(&self.state, &mut self.surface, &self.settings);
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => None,
                None => Some(Autopilot::default()),
            };
            log::info!("Autopilot: {}", self.autopilot.is_some());
        }

        fn toggle_mute(&mut self) {
            self.settings.toggle_muted();
            if let Some(soundtrack) = &mut self.soundtrack {
                soundtrack.apply_settings(&self.settings);
            }
            self.settings.save();
        }

        fn toggle_reduced_motion(&mut self) {
            self.settings.toggle_reduced_motion();
            self.settings.save();
        }
    }

    /// Texture sizes as loaded, falling back to defaults for images that
    /// have not decoded yet
    fn sprite_sizes(surface: &CanvasSurface) -> SpriteSizes {
        let defaults = SpriteSizes::default();
        let pick = |texture: TextureId, fallback: Vec2| {
            let size = surface.texture_size(texture);
            if size.x > 0.0 && size.y > 0.0 {
                size
            } else {
                log::warn!("{} not loaded, assuming {}x{}", texture.element_id(), fallback.x, fallback.y);
                fallback
            }
        };
        SpriteSizes {
            background: pick(TextureId::Background, defaults.background),
            floor: pick(TextureId::Floor, defaults.floor),
            obstacle: pick(TextureId::Obstacle, defaults.obstacle),
            player: pick(TextureId::Player, defaults.player),
        }
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Flappy Joe starting...");

        let window = web_sys::window().ok_or_else(|| GameError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::MissingElement("document".into()))?;

        let surface = CanvasSurface::from_document(&document, CANVAS_ID)?;
        let size = flappy_joe::renderer::Surface::size(&surface);
        let sprites = sprite_sizes(&surface);

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(Scene::new(size.x, size.y)?, Tuning::default(), sprites, seed)?;
        log::info!("Game initialized with seed: {}", seed);

        let settings = Settings::load();
        let soundtrack = match HtmlThemeTrack::from_document(&document, THEME_ID) {
            Ok(track) => {
                let mut soundtrack = Soundtrack::new(track);
                soundtrack.apply_settings(&settings);
                Some(soundtrack)
            }
            Err(e) => {
                log::warn!("Theme disabled: {}", e);
                None
            }
        };

        let app = Rc::new(RefCell::new(App {
            state,
            input: InputQueue::new(),
            surface,
            soundtrack,
            settings,
            autopilot: None,
        }));

        setup_input_handlers(&window, app.clone());
        setup_focus_handlers(&window, &document, app.clone());

        request_animation_frame(app);
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                let mut a = app.borrow_mut();
                match key.as_str() {
                    "a" | "A" => a.toggle_autopilot(),
                    "m" | "M" => a.toggle_mute(),
                    "r" | "R" => a.toggle_reduced_motion(),
                    _ => {
                        if a.input.push_key(&key) {
                            // Keep space/arrow keys from scrolling the page
                            event.prevent_default();
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                app.borrow_mut().input.push(Action::Confirm);
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(
        window: &web_sys::Window,
        document: &web_sys::Document,
        app: Rc<RefCell<App>>,
    ) {
        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    app.borrow().settings.save();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                if a.settings.mute_on_blur {
                    if let Some(soundtrack) = &mut a.soundtrack {
                        soundtrack.suspend();
                        log::info!("Theme paused (window blur)");
                    }
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window focus
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                if let Some(soundtrack) = &mut app.borrow_mut().soundtrack {
                    soundtrack.resume();
                }
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use flappy_joe::autopilot::Autopilot;
    use flappy_joe::renderer::{DrawList, draw_frame};
    use flappy_joe::sim::{GameEvent, GameState, Scene, SpriteSizes, tick};
    use flappy_joe::{GameError, Settings, Tuning};

    const DEFAULT_TICKS: u64 = 3600;
    const DEFAULT_SEED: u64 = 42;
    const SCENE_WIDTH: f32 = 800.0;
    const SCENE_HEIGHT: f32 = 600.0;

    fn parse_arg(args: &[String], index: usize, name: &str, default: u64) -> u64 {
        match args.get(index) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {} {:?}, using {}", name, raw, default);
                default
            }),
            None => default,
        }
    }

    fn load_tuning(path: Option<&String>) -> Result<Tuning, GameError> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ReadConfig {
            path: path.clone(),
            source,
        })?;
        log::info!("Loaded tuning from {}", path);
        Tuning::from_json(&json)
    }

    /// Play `[ticks] [seed] [tuning.json]` with the autopilot and no window
    pub fn run(args: &[String]) -> Result<(), GameError> {
        let ticks = parse_arg(args, 0, "tick count", DEFAULT_TICKS);
        let seed = parse_arg(args, 1, "seed", DEFAULT_SEED);
        let tuning = load_tuning(args.get(2))?;

        let mut state = GameState::new(
            Scene::new(SCENE_WIDTH, SCENE_HEIGHT)?,
            tuning,
            SpriteSizes::default(),
            seed,
        )?;
        let mut surface = DrawList::new(SCENE_WIDTH, SCENE_HEIGHT);
        let settings = Settings::default();
        let pilot = Autopilot::default();

        log::info!("Headless run: {} ticks, seed {}", ticks, seed);

        let mut jumps = 0u64;
        for _ in 0..ticks {
            let input = pilot.decide(&state);
            tick(&mut state, &input);
            for event in state.drain_events() {
                match event {
                    GameEvent::Jumped => jumps += 1,
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                    GameEvent::Started | GameEvent::Restarted | GameEvent::Ended { .. } => {}
                }
            }
            draw_frame(&state, &mut surface, &settings);
        }

        log::info!(
            "Finished: phase {:?}, score {}, best {} over {} games, {} jumps, {} draw calls in last frame",
            state.phase,
            state.score,
            state.high_score.best,
            state.high_score.games_played,
            jumps,
            surface.frame().len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy Joe (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = headless::run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
