use arcshot_core::config::{AdaptationConfig, GameConfig};
use arcshot_core::enums::{PowerUpKind, RecommendPriority};

use crate::profile::PlayerProfile;
use crate::rules::recommend;

fn default_thresholds() -> AdaptationConfig {
    GameConfig::default().adaptation
}

/// Build a profile with the given decayed shot/hit counts.
fn profile_with_accuracy(shots: f64, hits: f64) -> PlayerProfile {
    PlayerProfile {
        shots_fired: shots,
        shots_hit: hits,
        ..Default::default()
    }
}

// ---- Rule 1: accuracy assist ----

#[test]
fn test_low_accuracy_recommends_spread_shot_high() {
    // Accuracy 0.2 over 25 shots, zero near-misses.
    let profile = profile_with_accuracy(25.0, 5.0);
    let rec = recommend(&profile, 0, &default_thresholds()).expect("rule should fire");
    assert_eq!(rec.kind, PowerUpKind::SpreadShot);
    assert_eq!(rec.priority, RecommendPriority::High);
}

#[test]
fn test_accuracy_rule_needs_samples() {
    // Same poor ratio but only 5 shots: below the sample floor.
    let profile = profile_with_accuracy(5.0, 1.0);
    assert!(recommend(&profile, 0, &default_thresholds()).is_none());
}

#[test]
fn test_good_accuracy_does_not_fire() {
    let profile = profile_with_accuracy(30.0, 20.0);
    assert!(recommend(&profile, 0, &default_thresholds()).is_none());
}

// ---- Rule 2: near-miss rescue ----

#[test]
fn test_near_misses_recommend_urgent_rescue() {
    let mut profile = PlayerProfile::default();
    for _ in 0..3 {
        profile.record_near_miss();
    }
    let rec = recommend(&profile, 0, &default_thresholds()).expect("rule should fire");
    assert_eq!(rec.priority, RecommendPriority::Urgent);
    assert!(matches!(
        rec.kind,
        PowerUpKind::FreezeTime | PowerUpKind::Shield
    ));
}

#[test]
fn test_rescue_prefers_affinity() {
    let mut profile = PlayerProfile::default();
    profile.near_misses = 5;
    profile.record_powerup(PowerUpKind::FreezeTime);
    profile.record_powerup(PowerUpKind::FreezeTime);
    let rec = recommend(&profile, 0, &default_thresholds()).unwrap();
    assert_eq!(rec.kind, PowerUpKind::FreezeTime);

    // Tie (or shield-leaning) resolves to Shield.
    let mut profile = PlayerProfile::default();
    profile.near_misses = 5;
    let rec = recommend(&profile, 0, &default_thresholds()).unwrap();
    assert_eq!(rec.kind, PowerUpKind::Shield);
}

/// The accuracy rule fires before the near-miss rule when both match.
#[test]
fn test_rule_ordering_accuracy_first() {
    let mut profile = profile_with_accuracy(25.0, 2.0);
    profile.near_misses = 10;
    let rec = recommend(&profile, 0, &default_thresholds()).unwrap();
    assert_eq!(rec.kind, PowerUpKind::SpreadShot);
    assert_eq!(rec.priority, RecommendPriority::High);
}

// ---- Rule 3: combo reward ----

#[test]
fn test_combo_recommends_rapid_fire() {
    let profile = PlayerProfile::default();
    let rec = recommend(&profile, 5, &default_thresholds()).expect("rule should fire");
    assert_eq!(rec.kind, PowerUpKind::RapidFire);
    assert_eq!(rec.priority, RecommendPriority::Normal);
}

#[test]
fn test_near_miss_rule_beats_combo() {
    let mut profile = PlayerProfile::default();
    profile.near_misses = 3;
    let rec = recommend(&profile, 8, &default_thresholds()).unwrap();
    assert_eq!(rec.priority, RecommendPriority::Urgent);
}

// ---- Fallback ----

#[test]
fn test_empty_profile_recommends_nothing() {
    let profile = PlayerProfile::default();
    assert!(recommend(&profile, 0, &default_thresholds()).is_none());
}

// ---- Profile bookkeeping ----

#[test]
fn test_accuracy_decay_window() {
    let mut profile = profile_with_accuracy(25.0, 5.0);
    for _ in 0..200 {
        profile.decay(0.97);
    }
    // The window has rolled off; the sample floor protects the rule.
    assert!(profile.shots_fired < 1.0);
    assert!(recommend(&profile, 0, &default_thresholds()).is_none());
}

#[test]
fn test_reaction_time_ema() {
    let mut profile = PlayerProfile::default();
    profile.record_reaction(1.0);
    assert!((profile.mean_reaction_secs - 1.0).abs() < 1e-10);

    profile.record_reaction(2.0);
    assert!(
        profile.mean_reaction_secs > 1.0 && profile.mean_reaction_secs < 2.0,
        "EMA should move toward new samples, got {}",
        profile.mean_reaction_secs
    );
}

#[test]
fn test_kill_direction_buckets() {
    let mut profile = PlayerProfile::default();
    profile.record_kill_direction(0.0); // North: sector 0
    profile.record_kill_direction(std::f64::consts::FRAC_PI_2); // East: sector 2
    profile.record_kill_direction(-0.1); // wraps to the last sector
    assert_eq!(profile.kill_directions[0], 1);
    assert_eq!(profile.kill_directions[2], 1);
    assert_eq!(profile.kill_directions[7], 1);
}

#[test]
fn test_consume_near_misses() {
    let mut profile = PlayerProfile::default();
    profile.near_misses = 4;
    profile.consume_near_misses();
    assert_eq!(profile.near_misses, 0);
    assert!(recommend(&profile, 0, &default_thresholds()).is_none());
}

#[test]
fn test_profile_serde_round_trip() {
    let mut profile = profile_with_accuracy(10.0, 4.0);
    profile.record_powerup(PowerUpKind::Shield);
    let json = serde_json::to_string(&profile).unwrap();
    let back: PlayerProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back.powerup_affinity.shield, 1);
    assert!((back.accuracy() - 0.4).abs() < 1e-10);
}
