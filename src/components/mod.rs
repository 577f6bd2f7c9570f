//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the level. Components define data such as position, collision boxes,
//! animation state and combat stats.
//!
//! Submodules overview:
//! - [`animation`] – directional walk animation over a shared frame set
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`controller`] – player or enemy control, with the matching combat stats
//! - [`direction`] – the four facings and their frame-block order
//! - [`lifecycle`] – `Alive -> PendingRemoval -> Removed` state machine
//! - [`mapposition`] – world-space cell position of an entity
//! - [`spawnorder`] – insertion index used as draw order
//! - [`spell`] – spell projectiles and their tunables
//! - [`sprite`] – single static image
//! - [`steering`] – per-tick movement intent

pub mod animation;
pub mod boxcollider;
pub mod controller;
pub mod direction;
pub mod lifecycle;
pub mod mapposition;
pub mod spawnorder;
pub mod spell;
pub mod sprite;
pub mod steering;
