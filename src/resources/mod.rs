//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input, the tick clock, randomness,
//! configuration and asset registries.
//!
//! Overview
//! - `camera` – level offset that keeps the player in view
//! - `framestore` – named, shared frame sets
//! - `gameconfig` – INI-backed settings for the level, characters and spell
//! - `input` – the input event of the current tick
//! - `playerhud` – stats panels kept after the avatar is removed
//! - `rng` – seeded randomness for enemy AI
//! - `screensize` – current terminal dimensions in cells
//! - `spawncounter` – insertion-order counter
//! - `worldtime` – tick counter
pub mod camera;
pub mod framestore;
pub mod gameconfig;
pub mod input;
pub mod playerhud;
pub mod rng;
pub mod screensize;
pub mod spawncounter;
pub mod worldtime;
