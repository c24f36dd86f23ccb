//! Power-up recommendation rules.
//!
//! Priority-ordered, first match wins — not a weighted blend. The rule set
//! is a pure function of the profile snapshot passed in; it holds no state
//! of its own, which keeps it replaceable by a trained scorer behind the
//! same signature.

use arcshot_core::config::AdaptationConfig;
use arcshot_core::enums::{PowerUpKind, RecommendPriority};

use crate::profile::PlayerProfile;

/// A power-up spawn request from the adaptation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub kind: PowerUpKind,
    pub priority: RecommendPriority,
}

/// Evaluate the rules against a profile snapshot.
///
/// Order: accuracy assist, then near-miss rescue, then combo reward.
/// Returns `None` when no rule matches or the sample base is too thin —
/// the engine never forces a spawn.
pub fn recommend(
    profile: &PlayerProfile,
    combo: u32,
    config: &AdaptationConfig,
) -> Option<Recommendation> {
    // 1. Struggling to land shots: widen the fan.
    if profile.shots_fired >= config.min_shot_samples
        && profile.accuracy() < config.low_accuracy_threshold
    {
        return Some(Recommendation {
            kind: PowerUpKind::SpreadShot,
            priority: RecommendPriority::High,
        });
    }

    // 2. Enemies getting through: slow them down or soak the damage,
    //    whichever the player reaches for more.
    if profile.near_misses >= config.near_miss_threshold {
        let kind = if profile.powerup_affinity.get(PowerUpKind::FreezeTime)
            > profile.powerup_affinity.get(PowerUpKind::Shield)
        {
            PowerUpKind::FreezeTime
        } else {
            PowerUpKind::Shield
        };
        return Some(Recommendation {
            kind,
            priority: RecommendPriority::Urgent,
        });
    }

    // 3. Sustained combo: reward, not rescue.
    if combo >= config.combo_threshold {
        return Some(Recommendation {
            kind: PowerUpKind::RapidFire,
            priority: RecommendPriority::Normal,
        });
    }

    None
}
