//! Network layer: HTTP helpers, feed refresh glue, and the polling timer.

pub mod api;
pub mod poll;
pub mod refresh;
