//! Tick systems.
//!
//! This module groups all ECS systems that advance the simulation. The order
//! they run in is fixed by [`crate::game::tick_schedule`].
//!
//! Submodules overview
//! - [`camera`] – keep the player in view
//! - [`collision`] – pairwise overlap checks and combat dispatch
//! - [`controller`] – translate input or AI decisions into steering intents
//! - [`lifecycle`] – lazy removal of dead characters
//! - [`movement`] – apply steering with clamping and advance walk animations
//! - [`player`] – cast requests and pending attacker damage
//! - [`spell`] – projectile spawning, flight and expiry
//! - [`time`] – advance the tick clock and store the tick's input

pub mod camera;
pub mod collision;
pub mod controller;
pub mod lifecycle;
pub mod movement;
pub mod player;
pub mod spell;
pub mod time;
