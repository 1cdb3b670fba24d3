//! AI reaction systems (damage → hit reaction).

use bevy::prelude::*;

use crate::ai::{pick_hit_spark, CosmeticEffect, EffectAction, EnemyBrain, EnemyConfig};
use crate::combat::DamageDealt;
use crate::components::EnemyAnimation;
use crate::DeterministicRng;

/// System: косметическая реакция enemy на урон
///
/// - случайный вариант hit sparks (если настроены)
/// - OnDamaged trigger animator'а
///
/// AIState не меняется: реакция чисто визуальная.
pub fn react_to_damage(
    mut damage_events: EventReader<DamageDealt>,
    mut enemies: Query<(&EnemyBrain, &EnemyConfig, &mut EnemyAnimation)>,
    mut rng: ResMut<DeterministicRng>,
    mut effects: EventWriter<CosmeticEffect>,
) {
    for damage in damage_events.read() {
        let Ok((brain, config, mut animation)) = enemies.get_mut(damage.target) else {
            continue;
        };

        if !brain.is_active() {
            continue;
        }

        if let Some(spark) = pick_hit_spark(config, &mut rng.rng) {
            effects.write(CosmeticEffect {
                enemy: damage.target,
                effect: spark,
                action: EffectAction::Play,
            });
        }

        animation.damaged_trigger = true;

        crate::log(&format!(
            "⚠️ {:?} damaged by {:?} ({} dmg)",
            damage.target, damage.attacker, damage.damage
        ));
    }
}
