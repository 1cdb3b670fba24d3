//! AI Events — вход от хоста (detection) и выход к хосту (attack, effects)
//!
//! Хост (vision cone / raycast) → DetectionEvent → EnemyBrain очередь
//! EnemyBrain → AttackRequested → Attack Provider → EnemyFired → хост (оружие)
//! EnemyBrain/reactions → CosmeticEffect → хост (VFX/SFX playback)

use bevy::prelude::*;

use crate::components::EffectId;

/// Edge-события от Detection Provider
///
/// Хост шлёт ровно один TargetAcquired при появлении цели
/// и один TargetLost при её потере (а не каждый frame).
#[derive(Event, Debug, Clone, PartialEq)]
pub enum DetectionEvent {
    /// Цель обнаружена
    TargetAcquired {
        /// Entity агента, который обнаружил
        enemy: Entity,
    },

    /// Цель потеряна
    TargetLost {
        enemy: Entity,
    },
}

impl DetectionEvent {
    pub fn enemy(&self) -> Entity {
        match self {
            DetectionEvent::TargetAcquired { enemy } | DetectionEvent::TargetLost { enemy } => *enemy,
        }
    }
}

/// Brain хочет атаковать точку (ещё не выстрел — cooldown проверит Attack Provider)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AttackRequested {
    pub enemy: Entity,
    pub aim_point: Vec3,
}

/// Attack Provider подтвердил атаку — хост спавнит выстрел
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyFired {
    pub enemy: Entity,
    pub aim_point: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectAction {
    Play,
    Stop,
}

/// Косметический эффект на агенте (VFX/SFX), playback у хоста
#[derive(Event, Debug, Clone, PartialEq)]
pub struct CosmeticEffect {
    pub enemy: Entity,
    pub effect: EffectId,
    pub action: EffectAction,
}
