use crate::constants::{OVERLAY_COVER_SEC, OVERLAY_REVEAL_SEC};

use super::tween::{Ease, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Covering,
    Revealing,
}

/// Cover/reveal fade around an in-page jump. The pending destination is
/// released exactly once, at full cover.
#[derive(Clone, Debug)]
pub struct TransitionOverlay<T> {
    phase: Phase,
    fade: Tween<f32>,
    pending: Option<T>,
}

impl<T> Default for TransitionOverlay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TransitionOverlay<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            fade: Tween::settled(0.0, Ease::Power2Out),
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn opacity(&self) -> f32 {
        self.fade.value()
    }

    /// Begin covering toward `destination`; a newer destination replaces an
    /// older one that has not been reached yet.
    pub fn start(&mut self, destination: T) {
        self.pending = Some(destination);
        if self.phase != Phase::Covering {
            self.phase = Phase::Covering;
            self.fade.retarget(1.0, OVERLAY_COVER_SEC);
        }
    }

    /// Advance by `dt` (time-scaled). Returns the destination when the cover
    /// completes.
    pub fn advance(&mut self, dt: f32) -> Option<T> {
        self.fade.advance(dt);
        if !self.fade.is_complete() {
            return None;
        }
        match self.phase {
            Phase::Covering => {
                self.phase = Phase::Revealing;
                self.fade.retarget(0.0, OVERLAY_REVEAL_SEC);
                self.pending.take()
            }
            Phase::Revealing => {
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle => None,
        }
    }
}
