pub mod footer;
pub mod motion;
pub mod viewport;
