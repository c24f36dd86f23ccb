//! Simulation systems, run in a fixed order each tick by the engine.

pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod waves;
