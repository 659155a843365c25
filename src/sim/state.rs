//! Game state and core simulation types
//!
//! `GameState` owns every entity for the lifetime of one game instance.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flash::Flash;
use super::obstacle::Obstacle;
use super::player::Player;
use super::rect::Rect;
use super::scroll::ScrollingStrip;
use crate::error::GameError;
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first jump; nothing moves
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Player crashed; waiting for restart input
    Ended,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First jump of the session
    Started,
    Jumped,
    Scored { score: u32 },
    Ended { score: u32, high_score: u32, new_best: bool },
    /// Jump pressed after game over
    Restarted,
}

/// Scene bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Result<Self, GameError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GameError::InvalidScene { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Pixel sizes of the loaded textures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub background: Vec2,
    pub floor: Vec2,
    /// Width doubles as the obstacle width; height is the tiling step
    pub obstacle: Vec2,
    pub player: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            background: Vec2::new(1024.0, 768.0),
            floor: Vec2::new(336.0, 100.0),
            obstacle: Vec2::new(80.0, 40.0),
            player: Vec2::new(110.0, 85.0),
        }
    }
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Smallest sprite dimension; obstacles tile by their height
const MIN_SPRITE_PX: f32 = 1.0;

impl SpriteSizes {
    /// Every dimension must be finite and at least one pixel
    pub fn validate(&self) -> Result<(), GameError> {
        let sprites = [
            ("background", self.background),
            ("floor", self.floor),
            ("obstacle", self.obstacle),
            ("player", self.player),
        ];
        for (name, size) in sprites {
            let valid = size.is_finite() && size.x >= MIN_SPRITE_PX && size.y >= MIN_SPRITE_PX;
            if !valid {
                return Err(GameError::InvalidSprite {
                    name,
                    width: size.x,
                    height: size.y,
                });
            }
        }
        Ok(())
    }
}

/// Complete game state (the director)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub scene: Scene,
    pub sprites: SpriteSizes,
    pub phase: GamePhase,
    /// Simulation ticks since the game started
    pub time_ticks: u64,
    pub score: u32,
    pub high_score: HighScore,
    /// Ticks until the next obstacle spawns
    pub next_obstacle: u32,
    pub background: ScrollingStrip,
    pub floor: ScrollingStrip,
    pub player: Player,
    pub flash: Flash,
    /// Live obstacles, oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game in the Idle phase
    pub fn new(
        scene: Scene,
        tuning: Tuning,
        sprites: SpriteSizes,
        seed: u64,
    ) -> Result<Self, GameError> {
        tuning.validate()?;
        sprites.validate()?;

        let floor_y = scene.height - tuning.floor_height;
        if floor_y - 2.0 * tuning.gap_margin - tuning.spacing < 0.0 {
            return Err(GameError::SceneTooShort {
                height: scene.height,
                spacing: tuning.spacing,
                margin: tuning.gap_margin,
                floor: tuning.floor_height,
            });
        }

        let background = ScrollingStrip::new(scene.rect(), tuning.velocity / 2.0, sprites.background.x);
        let floor = ScrollingStrip::new(
            Rect::new(0.0, floor_y, scene.width, tuning.floor_height),
            tuning.velocity,
            sprites.floor.x,
        );
        let player = Player::new(&tuning, floor_y);
        let flash = Flash::new(scene.rect(), tuning.flash_decay);

        log::info!(
            "New game: scene {}x{}, seed {}",
            scene.width,
            scene.height,
            seed
        );

        Ok(Self {
            seed,
            tuning,
            scene,
            sprites,
            phase: GamePhase::Idle,
            time_ticks: 0,
            score: 0,
            high_score: HighScore::new(),
            next_obstacle: 0,
            background,
            floor,
            player,
            flash,
            obstacles: VecDeque::new(),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    /// Default tuning and sprite sizes
    pub fn with_defaults(width: f32, height: f32, seed: u64) -> Result<Self, GameError> {
        Self::new(
            Scene::new(width, height)?,
            Tuning::default(),
            SpriteSizes::default(),
            seed,
        )
    }

    /// Top of the floor
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.floor.y()
    }

    /// React to the jump/confirm action
    pub fn handle_jump(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                self.phase = GamePhase::Playing;
                self.player.jump(&self.tuning);
                self.push_event(GameEvent::Started);
                log::info!("Game started");
            }
            GamePhase::Playing => {
                self.player.jump(&self.tuning);
                self.push_event(GameEvent::Jumped);
            }
            GamePhase::Ended => {
                self.restart();
                self.player.jump(&self.tuning);
                self.push_event(GameEvent::Restarted);
            }
        }
    }

    /// Reset everything except the high score and resume play
    fn restart(&mut self) {
        let floor_y = self.floor_y();
        self.background.reset();
        self.floor.reset();
        self.player.reset(&self.tuning, floor_y);
        self.obstacles.clear();
        self.score = 0;
        self.next_obstacle = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        log::info!("Game restarted (best so far: {})", self.high_score.best);
    }

    /// Finish the current game; only the first call per game has an effect
    pub fn end_game(&mut self) {
        if self.phase == GamePhase::Ended {
            return;
        }
        let new_best = self.high_score.record(self.score);
        self.flash.trigger();
        self.phase = GamePhase::Ended;
        self.push_event(GameEvent::Ended {
            score: self.score,
            high_score: self.high_score.best,
            new_best,
        });
        log::info!(
            "Game over: score {}, high score {}{}",
            self.score,
            self.high_score.best,
            if new_best { " (new best)" } else { "" }
        );
    }

    pub fn add_point(&mut self) {
        self.score += 1;
        self.push_event(GameEvent::Scored { score: self.score });
        log::debug!("Scored: {}", self.score);
    }

    /// Append a new obstacle at the right edge of the scene
    pub fn spawn_obstacle(&mut self) {
        let obstacle = Obstacle::spawn(
            self.scene,
            self.floor_y(),
            self.sprites.obstacle.x,
            &self.tuning,
            &mut self.rng,
        );
        log::debug!(
            "Spawned obstacle, gap {:.0}..{:.0} ({} live)",
            obstacle.gap_top(),
            obstacle.gap_bottom(),
            self.obstacles.len() + 1
        );
        self.obstacles.push_back(obstacle);
    }

    /// Queue an event, dropping the oldest once the host stops draining
    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
