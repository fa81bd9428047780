//! verity-export
//!
//! Plain-text reports rendered from an evaluation.

pub mod error;
pub mod render;
