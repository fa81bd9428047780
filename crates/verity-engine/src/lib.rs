//! verity-engine
//!
//! The scoring engine. Every entry point is a pure, synchronous function of
//! an [`config::EngineConfig`] and a [`verity_core::form::FormState`]
//! snapshot: aggregate evidence, apply the logistic likelihood model, gate on
//! the minimum dataset, and derive the support estimate and recommendations.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod gate;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod support;
pub mod tables;

pub use aggregate::aggregate;
pub use gate::check_sufficiency;
pub use model::evaluate;
pub use pipeline::evaluate_form;
