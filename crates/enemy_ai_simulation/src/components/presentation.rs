//! Presentation компоненты: параметры анимации, звук движения, id эффектов
//!
//! Playback делает хост. ECS только выставляет параметры/триггеры.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Id косметического эффекта (VFX/SFX), резолвится хостом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub struct EffectId(pub u32);

/// Параметры animator'а агента
///
/// Триггеры (attack, damaged) взводятся симуляцией, хост сбрасывает
/// их через take_* после проигрывания.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct EnemyAnimation {
    pub move_speed: f32,
    pub alerted: bool,
    pub attack_trigger: bool,
    pub damaged_trigger: bool,
}

impl EnemyAnimation {
    pub fn take_attack_trigger(&mut self) -> bool {
        std::mem::take(&mut self.attack_trigger)
    }

    pub fn take_damaged_trigger(&mut self) -> bool {
        std::mem::take(&mut self.damaged_trigger)
    }
}

/// Звук движения агента (looping clip, pitch зависит от скорости)
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementAudio {
    pub clip: Option<EffectId>,
    pub pitch: f32,
}

impl Default for MovementAudio {
    fn default() -> Self {
        Self {
            clip: None,
            pitch: 1.0,
        }
    }
}
