//! AI компоненты: brain, config, patrol route

// NOTE: живут в crate::ai module, здесь только re-export для единообразия
pub use crate::ai::{AIState, EnemyBrain, EnemyConfig, MinMaxFloat, PatrolLoop, PatrolRoute};
