//! Damage — Health collaborator
//!
//! Хост сообщает попадание (HitLanded), ECS применяет к Health и генерирует:
//! - DamageDealt — на каждое попадание (hit reaction, UI)
//! - EntityDied — ровно один раз на переход alive → dead

use bevy::prelude::*;

use crate::components::{Health, HitOutcome};

/// Событие от хоста: попадание (projectile/hitscan/melee — неважно)
#[derive(Event, Debug, Clone)]
pub struct HitLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Событие: урон нанесен
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Событие: entity умер (health → 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Система: HitLanded → Health → DamageDealt / EntityDied
///
/// Попадания по уже мёртвым игнорируются (второй EntityDied невозможен).
pub fn apply_hits(
    mut hits: EventReader<HitLanded>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut targets: Query<&mut Health>,
) {
    for hit in hits.read() {
        let Ok(mut health) = targets.get_mut(hit.target) else {
            crate::log_warning(&format!("HitLanded: target {:?} has no Health", hit.target));
            continue;
        };

        let died = match health.apply_hit(hit.damage) {
            HitOutcome::AlreadyDead => continue,
            HitOutcome::Damaged => false,
            HitOutcome::Died => true,
        };

        damage_dealt_events.write(DamageDealt {
            attacker: hit.attacker,
            target: hit.target,
            damage: hit.damage,
            target_died: died,
        });

        if died {
            entity_died_events.write(EntityDied {
                entity: hit.target,
                killer: Some(hit.attacker),
            });

            crate::log_info(&format!("💀 {:?} killed by {:?}", hit.target, hit.attacker));
        }
    }
}
