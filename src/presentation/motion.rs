//! Enter/exit slide for the footer overlay. Pure view math, so any renderer
//! can drive it: step the transition each frame and apply the offset.

/// Off-screen travel in logical pixels. The stacked layout is taller, so it
/// slides further.
const COMPACT_TRAVEL: f32 = 200.0;
const WIDE_TRAVEL: f32 = 77.0;

/// Enter and exit duration in seconds.
const DURATION: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Copy)]
pub struct SlideTransition {
    phase: Phase,
    progress: f32,
}

impl SlideTransition {
    pub fn hidden() -> Self {
        Self {
            phase: Phase::Hidden,
            progress: 0.0,
        }
    }

    pub fn visible() -> Self {
        Self {
            phase: Phase::Visible,
            progress: 1.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Anything not fully hidden still occupies the overlay.
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn show(&mut self) {
        if matches!(self.phase, Phase::Hidden | Phase::Exiting) {
            self.phase = Phase::Entering;
            self.progress = 0.0;
        }
    }

    pub fn hide(&mut self) {
        if matches!(self.phase, Phase::Visible | Phase::Entering) {
            self.phase = Phase::Exiting;
            self.progress = 0.0;
        }
    }

    /// Advances the current phase by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        match self.phase {
            Phase::Entering => {
                self.progress += dt / DURATION;
                if self.progress >= 1.0 {
                    self.phase = Phase::Visible;
                    self.progress = 1.0;
                }
            }
            Phase::Exiting => {
                self.progress += dt / DURATION;
                if self.progress >= 1.0 {
                    self.phase = Phase::Hidden;
                    self.progress = 0.0;
                }
            }
            Phase::Hidden | Phase::Visible => {}
        }
    }

    /// Vertical offset from the resting position, in logical pixels.
    pub fn offset_y(&self, compact: bool) -> f32 {
        let travel = if compact { COMPACT_TRAVEL } else { WIDE_TRAVEL };
        match self.phase {
            Phase::Hidden => travel,
            Phase::Visible => 0.0,
            Phase::Entering => travel * (1.0 - ease_out_cubic(self.progress)),
            Phase::Exiting => travel * ease_out_cubic(self.progress),
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
