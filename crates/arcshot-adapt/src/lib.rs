//! Difficulty adaptation for ARCSHOT.
//!
//! Maintains the rolling player-performance profile and evaluates the
//! power-up recommendation rules. Pure functions over plain data — no ECS
//! dependency, so the rule set is trivially substitutable with a learned
//! model behind the same signature.

pub mod profile;
pub mod rules;

pub use profile::PlayerProfile;
pub use rules::{recommend, Recommendation};

#[cfg(test)]
mod tests;
