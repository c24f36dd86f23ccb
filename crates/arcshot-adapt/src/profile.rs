//! Rolling player-performance profile.
//!
//! Mutated incrementally by the simulation on every relevant event, read
//! by the adaptation rules once per interval — never in the per-tick hot
//! path.

use serde::{Deserialize, Serialize};

use arcshot_core::enums::PowerUpKind;

/// Sectors in the directional engagement histogram.
pub const DIRECTION_BUCKETS: usize = 8;

/// EMA weight for new reaction-time samples.
const REACTION_EMA_ALPHA: f64 = 0.2;

/// Power-up collection counts, used to direct the rescue rule toward what
/// the player actually reaches for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AffinityCounts {
    pub rapid_fire: u32,
    pub spread_shot: u32,
    pub freeze_time: u32,
    pub shield: u32,
}

impl AffinityCounts {
    pub fn get(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::RapidFire => self.rapid_fire,
            PowerUpKind::SpreadShot => self.spread_shot,
            PowerUpKind::FreezeTime => self.freeze_time,
            PowerUpKind::Shield => self.shield,
        }
    }

    fn increment(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::RapidFire => self.rapid_fire += 1,
            PowerUpKind::SpreadShot => self.spread_shot += 1,
            PowerUpKind::FreezeTime => self.freeze_time += 1,
            PowerUpKind::Shield => self.shield += 1,
        }
    }
}

/// Rolling in-session metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Decayed shot count (window via exponential decay per interval).
    pub shots_fired: f64,
    /// Decayed hit count over the same window.
    pub shots_hit: f64,
    /// EMA of enemy-spawn-to-first-hit latency (seconds).
    pub mean_reaction_secs: f64,
    /// Number of reaction samples folded into the EMA.
    pub reaction_samples: u32,
    /// Enemies that crossed the inner warning radius since the counter
    /// was last consumed by the rescue rule.
    pub near_misses: u32,
    /// Kill bearings, bucketed into 8 horizontal sectors around the player.
    pub kill_directions: [u32; DIRECTION_BUCKETS],
    pub powerup_affinity: AffinityCounts,
}

impl PlayerProfile {
    /// Record an accepted trigger pulse (one per bullet fired).
    pub fn record_shot(&mut self) {
        self.shots_fired += 1.0;
    }

    /// Record a bullet resolving against an enemy.
    pub fn record_hit(&mut self) {
        self.shots_hit += 1.0;
    }

    /// Record the spawn-to-first-hit latency for an enemy.
    pub fn record_reaction(&mut self, secs: f64) {
        if self.reaction_samples == 0 {
            self.mean_reaction_secs = secs;
        } else {
            self.mean_reaction_secs += REACTION_EMA_ALPHA * (secs - self.mean_reaction_secs);
        }
        self.reaction_samples += 1;
    }

    pub fn record_near_miss(&mut self) {
        self.near_misses += 1;
    }

    /// Record a kill at the given bearing (radians, 0 = North, clockwise).
    pub fn record_kill_direction(&mut self, bearing: f64) {
        let tau = std::f64::consts::TAU;
        let sector = (bearing.rem_euclid(tau) / tau * DIRECTION_BUCKETS as f64) as usize;
        self.kill_directions[sector.min(DIRECTION_BUCKETS - 1)] += 1;
    }

    pub fn record_powerup(&mut self, kind: PowerUpKind) {
        self.powerup_affinity.increment(kind);
    }

    /// Windowed accuracy over the decayed counters.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired <= 0.0 {
            0.0
        } else {
            self.shots_hit / self.shots_fired
        }
    }

    /// Apply one interval's worth of exponential decay to the windowed
    /// counters. Called by the engine at the adaptation cadence.
    pub fn decay(&mut self, factor: f64) {
        self.shots_fired *= factor;
        self.shots_hit *= factor;
    }

    /// Consume the near-miss counter after the rescue rule fires, so one
    /// burst of pressure produces one recommendation.
    pub fn consume_near_misses(&mut self) {
        self.near_misses = 0;
    }
}
