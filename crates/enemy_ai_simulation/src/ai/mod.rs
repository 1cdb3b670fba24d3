//! Enemy AI module
//!
//! Per-agent FSM Patrol → Follow → Attack (brain.rs) + ECS адаптер (systems/).
//! Хост даёт perception (DetectionModule + DetectionEvent), ECS отвечает
//! MovementCommand/FacingCommand/AttackRequested/CosmeticEffect.

use bevy::prelude::*;

pub mod brain;
pub mod components;
pub mod events;
pub mod systems;


// Re-export основных типов
pub use brain::{
    pick_hit_spark, AgentView, DetectionSignal, EnemyActuator, EnemyBrain, PatrolCursor,
    TargetSnapshot,
};
pub use components::{AIState, EnemyConfig, MinMaxFloat, PatrolLoop, PatrolRoute};
pub use events::{AttackRequested, CosmeticEffect, DetectionEvent, EffectAction, EnemyFired};

use crate::{DeterministicRng, SimulationSet};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate:
/// 1. activate_enemies — валидация + регистрация (SimulationSet::Perception)
/// 2. queue_detection_signals — edge-сигналы в очередь brain'а
/// 3. react_to_damage — hit sparks / OnDamaged
/// 4. enemy_ai_tick — on_tick каждого агента (SimulationSet::Decision)
/// 5. update_locomotion_feedback — MoveSpeed/pitch (SimulationSet::Resolution)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DetectionEvent>()
            .add_event::<CosmeticEffect>()
            .add_event::<AttackRequested>()
            .add_event::<EnemyFired>()
            .init_resource::<DeterministicRng>();

        app.add_systems(
            FixedUpdate,
            (
                systems::activate_enemies,
                systems::queue_detection_signals,
                systems::react_to_damage,
            )
                .chain()
                .in_set(SimulationSet::Perception),
        )
        .add_systems(
            FixedUpdate,
            systems::enemy_ai_tick.in_set(SimulationSet::Decision),
        )
        .add_systems(
            FixedUpdate,
            systems::update_locomotion_feedback.in_set(SimulationSet::Resolution),
        );
    }
}
