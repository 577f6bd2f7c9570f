//! termmage library.
//!
//! The combat and movement core of a terminal action RPG: ECS components,
//! resources, systems and events, the render seam towards the terminal
//! engine, and world setup. Exposed as a library for the driver binary and
//! the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod render;
pub mod resources;
pub mod snapshot;
pub mod systems;
