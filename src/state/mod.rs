//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`viewport`, `feed`, `compose`) so individual
//! components can depend on small focused models. Each struct lives in an
//! `RwSignal` provided via context by the root component; the structs
//! themselves are plain data with pure helpers, testable natively.

pub mod compose;
pub mod feed;
pub mod viewport;
