//! AI locomotion feedback (navmesh velocity → animator/audio).

use bevy::prelude::*;

use crate::ai::{EnemyBrain, EnemyConfig, MinMaxFloat};
use crate::components::{EnemyAnimation, MovementAudio, NavigationAgent};

/// Pitch звука движения: min на месте, max на полной скорости
pub fn movement_pitch(range: &MinMaxFloat, speed: f32, max_speed: f32) -> f32 {
    if max_speed <= 0.0 {
        return range.min;
    }
    range.lerp(speed / max_speed)
}

/// Система: MoveSpeed параметр анимации + pitch звука шагов
///
/// Скорость сообщает хост через NavigationAgent (после своего move step).
pub fn update_locomotion_feedback(
    mut enemies: Query<(
        &EnemyBrain,
        &NavigationAgent,
        &EnemyConfig,
        &mut EnemyAnimation,
        Option<&mut MovementAudio>,
    )>,
) {
    for (brain, navigation, config, mut animation, audio) in enemies.iter_mut() {
        if !brain.is_active() {
            continue;
        }

        let speed = navigation.speed();
        if animation.move_speed != speed {
            animation.move_speed = speed;
        }

        if let Some(mut audio) = audio {
            let pitch = movement_pitch(&config.movement_pitch, speed, navigation.max_speed);
            if audio.pitch != pitch {
                audio.pitch = pitch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_pitch_lerps_and_clamps() {
        let range = MinMaxFloat::new(0.5, 1.5);

        assert_eq!(movement_pitch(&range, 0.0, 4.0), 0.5);
        assert_eq!(movement_pitch(&range, 2.0, 4.0), 1.0);
        assert_eq!(movement_pitch(&range, 4.0, 4.0), 1.5);
        // Быстрее max_speed (knockback и т.п.) → clamp
        assert_eq!(movement_pitch(&range, 8.0, 4.0), 1.5);
    }

    #[test]
    fn test_movement_pitch_zero_max_speed() {
        let range = MinMaxFloat::new(0.8, 1.2);
        assert_eq!(movement_pitch(&range, 3.0, 0.0), 0.8);
    }
}
