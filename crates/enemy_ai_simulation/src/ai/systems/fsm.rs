//! FSM AI systems (activation, detection signals, per-agent tick).

use bevy::prelude::*;

use crate::ai::{
    AgentView, AttackRequested, CosmeticEffect, DetectionEvent, DetectionSignal, EffectAction,
    EnemyActuator, EnemyBrain, EnemyConfig, PatrolRoute, TargetSnapshot,
};
use crate::combat::Attacker;
use crate::components::{
    DetectionModule, EffectId, EnemyAnimation, FacingCommand, MovementCommand, NavigationAgent,
};
use crate::error::EnemySetupError;
use crate::population::EnemyPopulation;

/// Проверка, что у агента есть все обязательные коллабораторы
///
/// Вызывается один раз при спавне. Любая ошибка → агент не тикает.
pub fn validate_enemy_setup(
    entity: Entity,
    config: Option<&EnemyConfig>,
    detection: Option<&DetectionModule>,
    navigation: Option<&NavigationAgent>,
    attacker: Option<&Attacker>,
    transform: Option<&Transform>,
) -> Result<(), EnemySetupError> {
    let missing = |collaborator: &'static str| EnemySetupError::MissingCollaborator {
        entity,
        collaborator,
    };

    let config = config.ok_or_else(|| missing("EnemyConfig"))?;
    detection.ok_or_else(|| missing("DetectionModule"))?;
    navigation.ok_or_else(|| missing("NavigationAgent"))?;
    attacker.ok_or_else(|| missing("Attacker"))?;
    transform.ok_or_else(|| missing("Transform"))?;

    config
        .validate()
        .map_err(|source| EnemySetupError::InvalidConfig { entity, source })
}

/// Система: активация новых enemy
///
/// Для каждого свежего EnemyBrain:
/// - валидирует коллабораторов (ошибка → error log, агент остаётся выключен)
/// - регистрирует в EnemyPopulation (дубликат → fail fast, но после всей пачки)
/// - ставит патруль на ближайший waypoint
pub fn activate_enemies(
    mut new_enemies: Query<
        (
            Entity,
            &mut EnemyBrain,
            Option<&EnemyConfig>,
            Option<&DetectionModule>,
            Option<&NavigationAgent>,
            Option<&Attacker>,
            Option<&Transform>,
            Option<&PatrolRoute>,
        ),
        Added<EnemyBrain>,
    >,
    mut population: ResMut<EnemyPopulation>,
) -> Result {
    // Added<EnemyBrain> второй раз не сработает: ошибка одного агента
    // не должна оставить остальных выключенными
    let mut first_error = None;

    for (entity, mut brain, config, detection, navigation, attacker, transform, route) in
        new_enemies.iter_mut()
    {
        if let Err(error) =
            validate_enemy_setup(entity, config, detection, navigation, attacker, transform)
        {
            crate::log_error(&format!("❌ Enemy setup failed: {}", error));
            continue;
        }

        // Сначала регистрация: агент вне популяции не должен тикать
        if let Err(error) = population.register_enemy(entity) {
            crate::log_error(&format!("❌ Enemy {:?} not activated: {}", entity, error));
            first_error.get_or_insert(error);
            continue;
        }

        let position = transform.map(|t| t.translation).unwrap_or(Vec3::ZERO);
        brain.activate(position, route);

        crate::log(&format!(
            "AI: {:?} activated → Patrol (waypoint {})",
            entity,
            brain.patrol_cursor().index
        ));
    }

    match first_error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Система: DetectionEvent → очередь сигналов EnemyBrain
///
/// Обрабатываются в начале on_tick текущего кадра (до level-переходов).
pub fn queue_detection_signals(
    mut events: EventReader<DetectionEvent>,
    mut brains: Query<&mut EnemyBrain>,
) {
    for event in events.read() {
        let Ok(mut brain) = brains.get_mut(event.enemy()) else {
            continue;
        };

        let signal = match event {
            DetectionEvent::TargetAcquired { .. } => DetectionSignal::TargetAcquired,
            DetectionEvent::TargetLost { .. } => DetectionSignal::TargetLost,
        };
        brain.notify(signal);
    }
}

/// EnemyActuator поверх ECS компонентов одного агента
struct EcsActuator<'a, 'w, 'e> {
    enemy: Entity,
    command: Mut<'a, MovementCommand>,
    facing: Mut<'a, FacingCommand>,
    animation: Mut<'a, EnemyAnimation>,
    attacks: &'a mut EventWriter<'w, AttackRequested>,
    effects: &'a mut EventWriter<'e, CosmeticEffect>,
}

impl EnemyActuator for EcsActuator<'_, '_, '_> {
    fn set_destination(&mut self, point: Vec3) {
        // set_if_neq: иначе Changed<MovementCommand> спамит хост каждый tick
        self.command
            .set_if_neq(MovementCommand::MoveToPosition { target: point });
    }

    fn orient_towards(&mut self, point: Vec3) {
        if self.facing.body != Some(point) {
            self.facing.body = Some(point);
        }
    }

    fn orient_weapons_towards(&mut self, point: Vec3) {
        if self.facing.weapons != Some(point) {
            self.facing.weapons = Some(point);
        }
    }

    fn clear_orientation(&mut self) {
        self.facing.set_if_neq(FacingCommand::default());
    }

    fn try_attack(&mut self, point: Vec3) {
        self.attacks.write(AttackRequested {
            enemy: self.enemy,
            aim_point: point,
        });
    }

    fn set_alerted(&mut self, alerted: bool) {
        if self.animation.alerted != alerted {
            self.animation.alerted = alerted;
        }
    }

    fn play_effect(&mut self, effect: EffectId) {
        self.effects.write(CosmeticEffect {
            enemy: self.enemy,
            effect,
            action: EffectAction::Play,
        });
    }

    fn stop_effect(&mut self, effect: EffectId) {
        self.effects.write(CosmeticEffect {
            enemy: self.enemy,
            effect,
            action: EffectAction::Stop,
        });
    }
}

/// Система: один on_tick на каждого активного enemy
///
/// Позиция цели берётся из её Transform. Нет Transform (despawned) →
/// snapshot без позиции → brain сам уходит в Patrol.
pub fn enemy_ai_tick(
    mut enemies: Query<(
        Entity,
        &mut EnemyBrain,
        &EnemyConfig,
        &DetectionModule,
        &Transform,
        Option<&PatrolRoute>,
        &mut MovementCommand,
        &mut FacingCommand,
        &mut EnemyAnimation,
    )>,
    positions: Query<&Transform>,
    mut attack_requests: EventWriter<AttackRequested>,
    mut effects: EventWriter<CosmeticEffect>,
) {
    for (entity, mut brain, config, detection, transform, route, command, facing, animation) in
        enemies.iter_mut()
    {
        if !brain.is_active() {
            continue;
        }

        let target_position = detection
            .known_target
            .and_then(|target| positions.get(target).ok())
            .map(|t| t.translation);
        let snapshot = TargetSnapshot::from_detection(detection, target_position);
        let view = AgentView {
            position: transform.translation,
            detection_source: detection.source_point,
            attack_range: detection.attack_range,
        };

        let mut actuator = EcsActuator {
            enemy: entity,
            command,
            facing,
            animation,
            attacks: &mut attack_requests,
            effects: &mut effects,
        };

        let before = brain.state();
        brain.on_tick(&snapshot, &view, route, config, &mut actuator);

        let after = brain.state();
        if after != before {
            crate::log(&format!("AI: {:?} {:?} → {:?}", entity, before, after));
        }
    }
}
