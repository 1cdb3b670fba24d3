//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use super::super::fsm::{AIState, EnemyConfig, MinMaxFloat, PatrolLoop, PatrolRoute};
    use crate::components::EffectId;
    use crate::error::EnemyConfigError;
    use bevy::prelude::*;

    #[test]
    fn test_ai_state_default() {
        assert_eq!(AIState::default(), AIState::Patrol);
    }

    #[test]
    fn test_enemy_config_default() {
        let config = EnemyConfig::default();
        assert_eq!(config.attack_stop_ratio, 0.5);
        assert_eq!(config.path_reaching_radius, 2.0);
        assert_eq!(config.patrol_loop, PatrolLoop::Wrap);
        assert!(config.hit_sparks.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_attack_stop_distance() {
        let config = EnemyConfig::default();
        assert_eq!(config.attack_stop_distance(10.0), 5.0);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let config = EnemyConfig {
            attack_stop_ratio: 1.5,
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(EnemyConfigError::AttackStopRatioOutOfRange(1.5))
        );

        let config = EnemyConfig {
            attack_stop_ratio: f32::NAN,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_radius_and_pitch() {
        let config = EnemyConfig {
            path_reaching_radius: 0.0,
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(EnemyConfigError::NonPositiveReachingRadius(0.0))
        );

        let config = EnemyConfig {
            movement_pitch: MinMaxFloat::new(1.5, 0.5),
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(EnemyConfigError::InvertedPitchRange { min: 1.5, max: 0.5 })
        );
    }

    #[test]
    fn test_config_from_partial_json() {
        let json = r#"{
            "attack_stop_ratio": 0.25,
            "patrol_loop": "PingPong",
            "hit_sparks": [3, 4]
        }"#;

        let config: EnemyConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.attack_stop_ratio, 0.25);
        assert_eq!(config.patrol_loop, PatrolLoop::PingPong);
        assert_eq!(config.hit_sparks, vec![EffectId(3), EffectId(4)]);
        // Остальное — defaults
        assert_eq!(config.path_reaching_radius, 2.0);
        assert_eq!(config.detect_sfx, None);
    }

    #[test]
    fn test_closest_node() {
        let route = PatrolRoute::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        ]);

        assert_eq!(route.closest_node(Vec3::new(9.0, 0.0, 8.0)), 2);
        assert_eq!(route.closest_node(Vec3::new(6.0, 0.0, 0.0)), 1);
        assert_eq!(PatrolRoute::default().closest_node(Vec3::ONE), 0);
    }

    #[test]
    fn test_min_max_lerp_clamps() {
        let range = MinMaxFloat::new(1.0, 3.0);
        assert_eq!(range.lerp(0.5), 2.0);
        assert_eq!(range.lerp(-1.0), 1.0);
        assert_eq!(range.lerp(2.0), 3.0);
    }
}
