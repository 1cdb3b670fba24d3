//! Ошибки enemy AI: конфигурация, setup коллабораторов, популяция.
//!
//! Таксономия:
//! - EnemyConfigError — невалидные константы (ratio вне [0,1] и т.п.)
//! - EnemySetupError — у агента нет обязательного коллаборатора (fatal на старте)
//! - PopulationError — нарушение инвариантов PopulationSet (баг вызывающего кода)

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnemyConfigError {
    #[error("attack_stop_ratio must be within [0, 1], got {0}")]
    AttackStopRatioOutOfRange(f32),

    #[error("path_reaching_radius must be positive, got {0}")]
    NonPositiveReachingRadius(f32),

    #[error("movement pitch range is inverted: min {min} > max {max}")]
    InvertedPitchRange { min: f32, max: f32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnemySetupError {
    #[error("enemy {entity:?} has no {collaborator} attached")]
    MissingCollaborator {
        entity: Entity,
        collaborator: &'static str,
    },

    #[error("enemy {entity:?} has invalid config: {source}")]
    InvalidConfig {
        entity: Entity,
        #[source]
        source: EnemyConfigError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopulationError {
    #[error("enemy {0:?} is already registered")]
    AlreadyRegistered(Entity),

    #[error("enemy {0:?} is not registered (double unregister?)")]
    NotRegistered(Entity),

    #[error("enemy {0:?} was already removed and cannot be registered again")]
    Resurrection(Entity),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
