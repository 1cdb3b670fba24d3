//! Population systems: смерть/despawn enemy → unregister_enemy

use bevy::prelude::*;

use crate::ai::EnemyBrain;
use crate::combat::EntityDied;
use crate::components::MovementCommand;
use crate::population::EnemyPopulation;

/// System: EntityDied → unregister из популяции + AI off
///
/// Fallible: повторный unregister — баг, default error handler роняет симуляцию.
/// Не-enemy (игрок) и неактивированные агенты пропускаются.
pub fn unregister_dead_enemies(
    mut deaths: EventReader<EntityDied>,
    mut enemies: Query<(&mut EnemyBrain, Option<&mut MovementCommand>)>,
    mut population: ResMut<EnemyPopulation>,
) -> Result {
    for death in deaths.read() {
        let Ok((mut brain, command)) = enemies.get_mut(death.entity) else {
            continue;
        };

        if !brain.is_active() {
            continue;
        }

        // Мёртвые не тикают и не двигаются
        brain.deactivate();
        if let Some(mut command) = command {
            *command = MovementCommand::Idle;
        }

        population.unregister_enemy(death.entity)?;
    }

    Ok(())
}

/// System: enemy despawned без EntityDied → всё равно убираем из популяции
pub fn prune_despawned_enemies(
    mut removed: RemovedComponents<EnemyBrain>,
    mut population: ResMut<EnemyPopulation>,
) -> Result {
    for entity in removed.read() {
        if !population.contains(entity) {
            continue;
        }

        crate::log_warning(&format!(
            "Population: {:?} despawned while alive, unregistering",
            entity
        ));
        population.unregister_enemy(entity)?;
    }

    Ok(())
}
