//! Combat module (Attack Provider + Health collaborator)
//!
//! ECS ответственность:
//! - Attacker cooldown (решает, состоялась ли атака)
//! - Health → DamageDealt / EntityDied
//!
//! Хост ответственность:
//! - Оружие/projectiles по EnemyFired
//! - Hit detection → HitLanded

use bevy::prelude::*;

pub mod attacker;
pub mod damage;

// Re-export основных типов
pub use attacker::{resolve_attack_requests, tick_attack_cooldowns, Attacker};
pub use damage::{apply_hits, DamageDealt, EntityDied, HitLanded};

use crate::SimulationSet;

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. tick_attack_cooldowns — SimulationSet::Combat
/// 2. apply_hits — SimulationSet::Combat
/// 3. resolve_attack_requests — SimulationSet::Resolution (после AI tick)
///
/// AttackRequested/EnemyFired регистрирует AIPlugin (события AI модуля).
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HitLanded>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.add_systems(
            FixedUpdate,
            (tick_attack_cooldowns, apply_hits)
                .chain()
                .in_set(SimulationSet::Combat),
        )
        .add_systems(
            FixedUpdate,
            resolve_attack_requests.in_set(SimulationSet::Resolution),
        );
    }
}
