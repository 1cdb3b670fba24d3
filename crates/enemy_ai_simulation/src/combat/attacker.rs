//! Attacker — Attack Provider агента
//!
//! Brain только просит атаку (AttackRequested). Attacker решает,
//! готов ли выстрел по своему cooldown, и подтверждает через EnemyFired.

use bevy::prelude::*;

use crate::ai::{AttackRequested, EnemyFired};
use crate::components::EnemyAnimation;

/// Attacker — компонент для агентов, которые могут атаковать
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Attacker {
    /// Cooldown между атаками (секунды)
    pub attack_cooldown: f32,

    /// Текущий cooldown таймер (уменьшается до 0)
    pub cooldown_timer: f32,
}

impl Default for Attacker {
    fn default() -> Self {
        Self {
            attack_cooldown: 1.0,
            cooldown_timer: 0.0,
        }
    }
}

impl Attacker {
    pub fn new(attack_cooldown: f32) -> Self {
        Self {
            attack_cooldown,
            cooldown_timer: 0.0,
        }
    }

    /// Может ли атаковать (cooldown == 0)
    pub fn can_attack(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Начать атаку (сбросить cooldown)
    pub fn start_attack(&mut self) {
        self.cooldown_timer = self.attack_cooldown;
    }

    /// Атака если cooldown готов. true → выстрел состоялся
    pub fn try_start_attack(&mut self) -> bool {
        if !self.can_attack() {
            return false;
        }
        self.start_attack();
        true
    }
}

/// System: обновление attack cooldown таймеров
pub fn tick_attack_cooldowns(mut query: Query<&mut Attacker>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut attacker in query.iter_mut() {
        if attacker.cooldown_timer > 0.0 {
            attacker.cooldown_timer = (attacker.cooldown_timer - delta).max(0.0);
        }
    }
}

/// System: Attack Provider — AttackRequested → cooldown check → EnemyFired
///
/// Attack trigger animator'а взводится только при реальном выстреле.
pub fn resolve_attack_requests(
    mut requests: EventReader<AttackRequested>,
    mut attackers: Query<(&mut Attacker, Option<&mut EnemyAnimation>)>,
    mut fired: EventWriter<EnemyFired>,
) {
    for request in requests.read() {
        let Ok((mut attacker, animation)) = attackers.get_mut(request.enemy) else {
            continue;
        };

        if !attacker.try_start_attack() {
            continue;
        }

        if let Some(mut animation) = animation {
            animation.attack_trigger = true;
        }

        fired.write(EnemyFired {
            enemy: request.enemy,
            aim_point: request.aim_point,
        });

        crate::log(&format!(
            "🔫 {:?} fired at {:?} (cooldown {:.2}s)",
            request.enemy, request.aim_point, attacker.attack_cooldown
        ));
    }
}
