//! Event stream shaping: push normalization and the render pipeline.

pub mod normalize;
pub mod pipeline;

pub use normalize::merge_push_events;
pub use pipeline::render_timeline;
