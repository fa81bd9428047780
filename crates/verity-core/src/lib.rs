//! verity-core
//!
//! Shared vocabulary of the Verity scoring system: evidence keys, the
//! form-state snapshot supplied by the presentation layer, and the evidence
//! accumulator set. No scoring rules live here.

pub mod error;
pub mod evidence;
pub mod form;
pub mod keys;
pub mod numeric;
