/// Width in logical pixels below which the footer stacks its actions
/// vertically instead of laying them out in a row.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: f32,
    breakpoint: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self::with_breakpoint(width, COMPACT_BREAKPOINT)
    }

    pub fn with_breakpoint(width: f32, breakpoint: f32) -> Self {
        Self { width, breakpoint }
    }

    pub fn is_compact(&self) -> bool {
        self.width < self.breakpoint
    }
}
