//! Simulation engine for ARCSHOT.
//!
//! Owns the entity store (a hecs ECS world behind stable ids), runs all
//! systems once per host-driven tick, and produces `GameSnapshot`s for
//! the presentation layer. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod player;
pub mod store;
pub mod systems;

pub use arcshot_core as core;
pub use engine::{SimConfig, SimulationEngine};
