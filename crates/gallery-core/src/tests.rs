#[cfg(test)]
mod tests {
    use crate::commands::LevelCommand;
    use crate::config::{RowGeometry, SpawnTuning};
    use crate::constants::{DT, TICK_RATE};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GalleryEvent;
    use crate::state::GallerySnapshot;
    use crate::types::{ticks_from_secs, Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_target_kind_serde() {
        for v in [TargetKind::Common, TargetKind::Rare] {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_target_phase_serde() {
        for v in [
            TargetPhase::Entering,
            TargetPhase::Upright,
            TargetPhase::Removed,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: TargetPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_level_phase_serde() {
        for v in [
            LevelPhase::Idle,
            LevelPhase::Running,
            LevelPhase::Paused,
            LevelPhase::Ended,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: LevelPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify LevelCommand round-trips through serde (tagged union).
    #[test]
    fn test_level_command_serde() {
        let commands = vec![
            LevelCommand::StartLevel,
            LevelCommand::StopSpawning,
            LevelCommand::RemoveTarget { target_id: 42 },
            LevelCommand::Pause,
            LevelCommand::Resume,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            assert!(json.contains("type"), "commands are tagged: {json}");
            let _back: LevelCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_gallery_event_serde() {
        let events = vec![
            GalleryEvent::TargetSpawned {
                target_id: 1,
                kind: TargetKind::Common,
                row: 0,
            },
            GalleryEvent::TargetRaised { target_id: 1 },
            GalleryEvent::TargetExpired {
                target_id: 1,
                kind: TargetKind::Common,
            },
            GalleryEvent::TargetShot {
                target_id: 2,
                kind: TargetKind::Rare,
            },
            GalleryEvent::SpawnRateTightened {
                interval_secs: 0.95,
            },
            GalleryEvent::SpawningStopped,
            GalleryEvent::LevelEnded,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let back: GalleryEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = GallerySnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GallerySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.targets.len(), 0);
        assert_eq!(back.phase, LevelPhase::Idle);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_position_lerp() {
        let start = Position::new(100.0, -450.0);
        let end = Position::new(100.0, -420.0);
        let mid = Position::lerp(start, end, 0.5);
        assert!((mid.x - 100.0).abs() < 1e-12);
        assert!((mid.y + 435.0).abs() < 1e-12);

        // t is clamped.
        assert_eq!(Position::lerp(start, end, -1.0), start);
        assert_eq!(Position::lerp(start, end, 2.0), end);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
        assert!((time.dt() - DT).abs() < 1e-15);
    }

    #[test]
    fn test_ticks_from_secs() {
        assert_eq!(ticks_from_secs(0.05), 3);
        assert_eq!(ticks_from_secs(0.5), 30);
        assert_eq!(ticks_from_secs(1.0), 60);
        assert_eq!(ticks_from_secs(2.0), 120);
        assert_eq!(ticks_from_secs(5.0), 300);
        // Never rounds down to zero ticks.
        assert_eq!(ticks_from_secs(0.0), 1);
    }

    #[test]
    fn test_tuning_defaults() {
        let tuning = SpawnTuning::default();
        assert_eq!(tuning.max_targets, 15);
        assert!((tuning.min_distance - 300.0).abs() < 1e-12);
        assert!((tuning.spawn_interval_secs - 1.0).abs() < 1e-12);
        assert!((tuning.start_delay_secs - 2.0).abs() < 1e-12);
        assert!((tuning.target_lifetime_secs - 10.0).abs() < 1e-12);
        assert!((tuning.common_chance - 0.7).abs() < 1e-12);
        assert!((tuning.spawn_range_x - 850.0).abs() < 1e-12);

        let geometry = RowGeometry::default();
        assert_eq!(geometry.bushes_per_row, 5);
        assert!(geometry.depth_scale_factor < 1.0);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRowGeometry;
        assert_eq!(err.to_string(), "row geometry configuration is missing");

        let err = ConfigError::InvalidRowGeometry {
            reason: "bush_spacing must be positive".into(),
        };
        assert!(err.to_string().contains("bush_spacing"));
    }
}
