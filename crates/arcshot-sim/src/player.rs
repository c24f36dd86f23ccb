//! Player session state: health, score, combo, and timed effects.

use arcshot_core::config::GameConfig;
use arcshot_core::enums::PowerUpKind;
use arcshot_core::types::Position;

/// One timed power-up effect applied to the player.
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub remaining_secs: f64,
}

/// Mutable player state for the current session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub health: u32,
    /// Breach decrements soaked before health while a Shield is up.
    pub shield_points: u32,
    /// Monotonic non-decreasing within a session.
    pub score: u64,
    pub combo: u32,
    /// Seconds until the combo resets (refreshed on every kill).
    pub combo_countdown: f64,
    /// Seconds until the next trigger pulse is accepted.
    pub fire_cooldown: f64,
    pub effects: Vec<ActiveEffect>,
    /// Last sampled player position.
    pub position: Position,
}

impl PlayerState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            health: config.player.max_health,
            shield_points: 0,
            score: 0,
            combo: 0,
            combo_countdown: 0.0,
            fire_cooldown: 0.0,
            effects: Vec::new(),
            position: Position::default(),
        }
    }

    pub fn effect_active(&self, kind: PowerUpKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Apply (or refresh) a timed effect. At most one instance per kind
    /// is ever active; reapplication resets the clock, it does not stack.
    pub fn apply_effect(&mut self, kind: PowerUpKind, config: &GameConfig) {
        let duration = config.powerups.duration_for(kind);
        if kind == PowerUpKind::Shield {
            self.shield_points = config.powerups.shield_points;
        }
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining_secs = duration;
        } else {
            self.effects.push(ActiveEffect {
                kind,
                remaining_secs: duration,
            });
        }
    }

    /// Count down effect timers; returns the kinds that expired this tick.
    pub fn tick_effects(&mut self, dt: f64) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        for effect in &mut self.effects {
            effect.remaining_secs -= dt;
            if effect.remaining_secs <= 0.0 {
                expired.push(effect.kind);
            }
        }
        if !expired.is_empty() {
            self.effects.retain(|e| e.remaining_secs > 0.0);
            if expired.contains(&PowerUpKind::Shield) {
                self.shield_points = 0;
            }
        }
        expired
    }

    /// Count down the combo window; resets the combo on timeout.
    pub fn tick_combo(&mut self, dt: f64) {
        if self.combo == 0 {
            return;
        }
        self.combo_countdown -= dt;
        if self.combo_countdown <= 0.0 {
            self.combo = 0;
        }
    }

    /// Record a kill: add points and bump the combo.
    pub fn register_kill(&mut self, points: u32, config: &GameConfig) {
        self.score += points as u64;
        self.combo = (self.combo + 1).min(config.player.max_combo);
        self.combo_countdown = config.player.combo_timeout_secs;
    }

    /// Apply exactly one breach decrement: shield pool first, then health.
    pub fn absorb_breach(&mut self) {
        if self.shield_points > 0 {
            self.shield_points -= 1;
        } else {
            self.health = self.health.saturating_sub(1);
        }
    }

    /// Drop all timed effects (session reset / game over flush).
    pub fn clear_effects(&mut self) {
        self.effects.clear();
        self.shield_points = 0;
    }
}
