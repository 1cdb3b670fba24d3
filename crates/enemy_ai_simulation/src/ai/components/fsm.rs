//! FSM AI components (state, config, patrol route).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::EffectId;
use crate::error::EnemyConfigError;

/// Тактическое состояние агента
///
/// Меняется только правилами перехода в EnemyBrain (см. brain.rs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum AIState {
    /// Patrol — обход waypoints (начальное состояние)
    #[default]
    Patrol,

    /// Follow — преследование обнаруженной цели
    Follow,

    /// Attack — цель в attack range, стреляем
    Attack,
}

/// Политика обхода патрульного маршрута на концах пути
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum PatrolLoop {
    /// 0 → 1 → … → N-1 → 0 → …
    #[default]
    Wrap,
    /// 0 → … → N-1 → N-2 → … → 0 → 1 → …
    PingPong,
    /// Дошли до последнего waypoint — стоим на нём
    Once,
}

/// Диапазон [min, max] для lerp (pitch звука движения)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
pub struct MinMaxFloat {
    pub min: f32,
    pub max: f32,
}

impl MinMaxFloat {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Линейная интерполяция, t клампится в [0, 1]
    pub fn lerp(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        self.min + (self.max - self.min) * t
    }
}

impl Default for MinMaxFloat {
    fn default() -> Self {
        Self::new(0.8, 1.2)
    }
}

/// Параметры enemy AI (data-driven, грузится хостом из конфига)
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct EnemyConfig {
    /// Доля attack range, на которой агент перестаёт сближаться в Attack
    pub attack_stop_ratio: f32,
    /// Радиус достижения waypoint (метры)
    pub path_reaching_radius: f32,
    /// Что делать на конце маршрута
    pub patrol_loop: PatrolLoop,
    /// Looping VFX пока цель обнаружена
    pub detect_vfx: Vec<EffectId>,
    /// One-shot звук обнаружения
    pub detect_sfx: Option<EffectId>,
    /// Варианты искр при попадании (выбирается случайный)
    pub hit_sparks: Vec<EffectId>,
    /// Pitch звука движения: min на месте, max на полной скорости
    pub movement_pitch: MinMaxFloat,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            attack_stop_ratio: 0.5,
            path_reaching_radius: 2.0,
            patrol_loop: PatrolLoop::Wrap,
            detect_vfx: Vec::new(),
            detect_sfx: None,
            hit_sparks: Vec::new(),
            movement_pitch: MinMaxFloat::default(),
        }
    }
}

impl EnemyConfig {
    pub fn validate(&self) -> Result<(), EnemyConfigError> {
        if !(0.0..=1.0).contains(&self.attack_stop_ratio) {
            return Err(EnemyConfigError::AttackStopRatioOutOfRange(self.attack_stop_ratio));
        }

        // NaN тоже отсекается: NaN > 0.0 == false
        if !(self.path_reaching_radius > 0.0) {
            return Err(EnemyConfigError::NonPositiveReachingRadius(self.path_reaching_radius));
        }

        if self.movement_pitch.min > self.movement_pitch.max {
            return Err(EnemyConfigError::InvertedPitchRange {
                min: self.movement_pitch.min,
                max: self.movement_pitch.max,
            });
        }

        Ok(())
    }

    /// Порог дистанции, ниже которого Attack держит позицию
    pub fn attack_stop_distance(&self, attack_range: f32) -> f32 {
        self.attack_stop_ratio * attack_range
    }
}

/// Патрульный маршрут агента (world-space waypoints)
///
/// Пустой маршрут допустим: агент стоит на месте.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub nodes: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(nodes: impl Into<Vec<Vec3>>) -> Self {
        Self { nodes: nodes.into() }
    }

    pub fn is_valid(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<Vec3> {
        self.nodes.get(index).copied()
    }

    /// Индекс ближайшего к `position` waypoint (0 если маршрут пуст)
    pub fn closest_node(&self, position: Vec3) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.distance_squared(position)
                    .total_cmp(&b.distance_squared(position))
            })
            .map(|(index, _)| index)
            .unwrap_or(0)
    }
}
