//! Game state and per-frame scene building.
//!
//! `GameState` owns everything that survives between frames. The host calls
//! [`GameState::frame`] once per display frame and [`GameState::handle_input`]
//! between frames; both run to completion synchronously.

use crate::Viewport;
use crate::config::{ConfigError, GameConfig};
use crate::easing::Rgba;
use crate::ending::{Ending, EndingStep};
use crate::judge::{InputEvent, Judgement, judge};
use crate::oscillator::DynamicCircle;
use crate::phyllotaxis::{self, Particle};
use crate::ripple::Ripple;

/// Backend-agnostic draw command; the canvas renderer replays these in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgba,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
        width: f64,
    },
    /// Text centered on (x, y).
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        color: Rgba,
    },
}

pub type Scene = Vec<DrawCommand>;

/// What an input event did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
    /// Not the activation key, or a tap outside the static circle.
    Ignored,
    /// The ending sequence owns the round; inputs are dropped.
    Suppressed,
}

pub struct GameState {
    config: GameConfig,
    viewport: Viewport,
    score: u32,
    effect_counter: u32,
    circle: DynamicCircle,
    ripple: Ripple,
    ending: Ending,
    field: Vec<Particle>,
}

impl GameState {
    /// Build a state without validating; callers own the config invariants.
    pub fn new(config: GameConfig, viewport: Viewport) -> Self {
        let circle = DynamicCircle::at(0, &config);
        Self {
            config,
            viewport,
            score: 0,
            effect_counter: 0,
            circle,
            ripple: Ripple::Idle,
            ending: Ending::Idle,
            field: Vec::new(),
        }
    }

    pub fn try_new(config: GameConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, viewport))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn effect_counter(&self) -> u32 {
        self.effect_counter
    }

    pub fn circle(&self) -> DynamicCircle {
        self.circle
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    pub fn ending(&self) -> &Ending {
        &self.ending
    }

    /// Particles drawn on the last frame (live field or frozen ending snapshot).
    pub fn particles(&self) -> &[Particle] {
        if self.ending.is_active() {
            self.ending.particles()
        } else {
            &self.field
        }
    }

    /// Judge an input against the radius shown on the last frame.
    pub fn handle_input(&mut self, event: InputEvent) -> Outcome {
        if self.ending.is_active() {
            return Outcome::Suppressed;
        }
        if !event.is_activation(&self.config, self.viewport) {
            return Outcome::Ignored;
        }
        let delta = self.circle.radius - self.config.target_radius;
        let outcome = match judge(self.circle.radius, &self.config) {
            Judgement::Hit => {
                self.score += 1;
                self.effect_counter = self.config.effect_duration;
                Outcome::Hit
            }
            Judgement::Miss => {
                self.score = 0;
                Outcome::Miss
            }
        };
        log::debug!("{outcome:?} delta={delta:.1} score={}", self.score);
        self.ripple.activate();
        outcome
    }

    /// End-of-round trigger: stop any ending immediately and zero the score.
    pub fn reset(&mut self) {
        log::info!("round reset (score was {})", self.score);
        self.ending.cancel();
        self.score = 0;
        self.effect_counter = 0;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("resize {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    /// Advance one frame and return what to draw.
    pub fn frame(&mut self, clock: u64) -> Scene {
        let cfg = &self.config;
        let (cx, cy) = self.viewport.center();
        let mut scene = vec![DrawCommand::Clear {
            color: cfg.background,
        }];

        self.circle = DynamicCircle::at(clock, cfg);

        if self.ending.is_active() {
            if self.ending.step(&mut self.score, cfg) == EndingStep::Finished {
                log::info!("ending sequence finished");
            }
            push_field(&mut scene, self.ending.particles(), cfg);
        } else {
            self.field = phyllotaxis::generate(self.score, self.viewport, &self.ripple, cfg);
            push_field(&mut scene, &self.field, cfg);
        }

        self.ripple.advance(self.viewport.width, cfg);

        if self.ending.should_start(self.score, cfg) {
            log::info!(
                "ending sequence started: score={} particles={}",
                self.score,
                self.field.len()
            );
            self.ending.start(std::mem::take(&mut self.field));
        }

        scene.push(DrawCommand::Circle {
            x: cx,
            y: cy,
            radius: cfg.target_radius,
            color: cfg.static_color,
        });
        scene.push(DrawCommand::Circle {
            x: cx,
            y: cy,
            radius: self.circle.radius,
            color: self.circle.color,
        });
        if self.effect_counter > 0 {
            scene.push(DrawCommand::Circle {
                x: cx,
                y: cy,
                radius: cfg.target_radius,
                color: cfg.effect_color,
            });
            self.effect_counter -= 1;
        }
        scene.push(DrawCommand::Text {
            x: cx,
            y: cfg.score_y,
            text: format!("Score: {}", self.score),
            size: cfg.text_size,
            color: cfg.score_color,
        });
        scene
    }
}

fn push_field(scene: &mut Scene, particles: &[Particle], cfg: &GameConfig) {
    for link in phyllotaxis::links(particles, cfg.link_distance) {
        scene.push(DrawCommand::Line {
            x1: link.from.0,
            y1: link.from.1,
            x2: link.to.0,
            y2: link.to.1,
            color: link.color,
            width: cfg.link_width,
        });
    }
    scene.extend(particles.iter().map(|p| DrawCommand::Circle {
        x: p.x,
        y: p.y,
        radius: cfg.particle_radius,
        color: p.color,
    }));
}
