//! Core types and definitions for the ARCSHOT combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input, state snapshots, events, and configuration.
//! It has no dependency on any runtime or rendering framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
