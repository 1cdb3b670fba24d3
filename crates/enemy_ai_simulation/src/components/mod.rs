//! ECS Components для enemy entity
//!
//! Организация по доменам:
//! - actor: здоровье (Health collaborator)
//! - movement: Navigation Provider surface (MovementCommand, FacingCommand, NavigationAgent)
//! - perception: Detection Provider surface (DetectionModule)
//! - presentation: анимация/аудио/VFX параметры (EnemyAnimation, MovementAudio, EffectId)
//! - ai: re-export AI компонентов (EnemyBrain, EnemyConfig, PatrolRoute)

pub mod actor;
pub mod ai;
pub mod movement;
pub mod perception;
pub mod presentation;

// Re-exports для удобного импорта
pub use actor::*;
pub use ai::*;
pub use movement::*;
pub use perception::*;
pub use presentation::*;
