#[cfg(test)]
mod tests {
    use crate::config::{ConfigError, GameConfig};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::input::PlayerCommand;
    use crate::state::GameSnapshot;
    use crate::types::{Direction, EntityId, Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        for v in EnemyKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_powerup_kind_serde() {
        for v in PowerUpKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerUpKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_phase_enums_serde() {
        for v in [
            GamePhase::Idle,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        for v in [WavePhase::Spawning, WavePhase::Draining, WavePhase::Cooldown] {
            let json = serde_json::to_string(&v).unwrap();
            let back: WavePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Start,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SimEvent round-trips through serde.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::EnemySpawned {
                id: EntityId(3),
                kind: EnemyKind::Fast,
                position: Position::new(1.0, 2.0, 3.0),
            },
            SimEvent::Hit {
                bullet_id: EntityId(9),
                enemy_id: EntityId(3),
                killed: true,
                points: 15,
            },
            SimEvent::Breach { enemy_id: EntityId(3) },
            SimEvent::AdaptationTriggered {
                kind: PowerUpKind::Shield,
                priority: RecommendPriority::Urgent,
            },
            SimEvent::GameOver { score: 120, wave: 3 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: SimEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_bearing() {
        let origin = Position::new(0.0, 0.0, 0.0);

        // Due North (positive Y)
        let north = Position::new(0.0, 100.0, 0.0);
        assert!((origin.bearing_to(&north) - 0.0).abs() < 1e-10);

        // Due East (positive X)
        let east = Position::new(100.0, 0.0, 0.0);
        let expected_east = std::f64::consts::FRAC_PI_2;
        assert!(
            (origin.bearing_to(&east) - expected_east).abs() < 1e-10,
            "East bearing should be PI/2, got {}",
            origin.bearing_to(&east)
        );
    }

    #[test]
    fn test_direction_normalizes() {
        let d = Direction::new(3.0, 4.0, 0.0);
        let mag = (d.x * d.x + d.y * d.y + d.z * d.z).sqrt();
        assert!((mag - 1.0).abs() < 1e-10);

        // Zero vector collapses to +y rather than NaN.
        let z = Direction::new(0.0, 0.0, 0.0);
        assert_eq!(z, Direction::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_direction_rotation_preserves_length() {
        let d = Direction::new(1.0, 0.0, 0.5);
        let r = d.rotated_about_z(0.3);
        let mag = (r.x * r.x + r.y * r.y + r.z * r.z).sqrt();
        assert!((mag - 1.0).abs() < 1e-10);
        assert!((r.z - d.z).abs() < 1e-10, "z component unchanged");
    }

    #[test]
    fn test_velocity_along_direction() {
        let v = Velocity::along(Direction::new(0.0, 1.0, 0.0), 12.0);
        assert!((v.speed() - 12.0).abs() < 1e-10);
        assert!((v.y - 12.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement with variable dt.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance(1.0 / 30.0);
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Config validation ----

    #[test]
    fn test_default_config_is_valid() {
        GameConfig::default().validate().expect("default config");
    }

    #[test]
    fn test_config_rejects_zero_health() {
        let mut config = GameConfig::default();
        config.enemies.tank.health = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_config_rejects_inverted_height_band() {
        let mut config = GameConfig::default();
        config.spawn.height_min = 3.0;
        config.spawn.height_max = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_config_rejects_near_miss_inside_breach() {
        let mut config = GameConfig::default();
        config.near_miss_radius = config.breach_radius;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_config_rejects_bad_drop_chance() {
        let mut config = GameConfig::default();
        config.powerups.drop_chance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotAProbability { .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = GameConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(back.max_active_entities, config.max_active_entities);
        assert_eq!(back.enemies.fast.points, config.enemies.fast.points);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
