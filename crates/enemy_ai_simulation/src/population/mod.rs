//! Population Coordinator — учёт живых enemy
//!
//! Регистрация — при активации агента (ai::systems::activate_enemies).
//! Удаление — по EntityDied или при despawn. Подписчики получают EnemyRemoved
//! синхронно, до структурного удаления.

use bevy::prelude::*;

pub mod coordinator;
pub mod systems;


pub use coordinator::{EnemyPopulation, EnemyRemoved, ListenerId, PopulationListener};
pub use systems::{prune_despawned_enemies, unregister_dead_enemies};

use crate::SimulationSet;

pub struct PopulationPlugin;

impl Plugin for PopulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyPopulation>();

        app.add_systems(
            FixedUpdate,
            (unregister_dead_enemies, prune_despawned_enemies)
                .chain()
                .in_set(SimulationSet::Population),
        );
    }
}
