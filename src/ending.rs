//! Ending sequence: once the score reaches the reset threshold the current field is
//! frozen and eaten away one particle at a time, draining the score with it.

use crate::config::GameConfig;
use crate::phyllotaxis::Particle;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Ending {
    #[default]
    Idle,
    Decaying {
        /// Snapshot captured at the transition; removal is last-in-first-out.
        particles: Vec<Particle>,
        frame_counter: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndingStep {
    Continue,
    Finished,
}

impl Ending {
    pub fn is_active(&self) -> bool {
        matches!(self, Ending::Decaying { .. })
    }

    pub fn should_start(&self, score: u32, cfg: &GameConfig) -> bool {
        !self.is_active() && score >= cfg.reset_score
    }

    /// Take ownership of the field snapshot and begin decaying.
    pub fn start(&mut self, snapshot: Vec<Particle>) {
        *self = Ending::Decaying {
            particles: snapshot,
            frame_counter: 0,
        };
    }

    /// Frozen particles still on screen (empty while idle).
    pub fn particles(&self) -> &[Particle] {
        match self {
            Ending::Decaying { particles, .. } => particles,
            Ending::Idle => &[],
        }
    }

    /// One frame of decay. Finishing resets the score to 0.
    pub fn step(&mut self, score: &mut u32, cfg: &GameConfig) -> EndingStep {
        let Ending::Decaying {
            particles,
            frame_counter,
        } = self
        else {
            return EndingStep::Finished;
        };
        if particles.is_empty() {
            *self = Ending::Idle;
            *score = 0;
            return EndingStep::Finished;
        }
        *frame_counter += 1;
        if *frame_counter % cfg.decay_speed == 0 {
            particles.pop();
            *score = score.saturating_sub(1);
        }
        EndingStep::Continue
    }

    /// Abort immediately, skipping the gradual decay.
    pub fn cancel(&mut self) {
        *self = Ending::Idle;
    }
}
