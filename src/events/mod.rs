//! Event types used by the core.
//!
//! Submodules:
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`input`] – keys and the per-tick input event
pub mod collision;
pub mod input;
