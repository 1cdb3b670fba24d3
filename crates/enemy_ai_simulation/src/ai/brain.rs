//! EnemyBrain — per-agent FSM Patrol → Follow → Attack
//!
//! Один tick = три фазы (строго в этом порядке):
//! 1. Edge-сигналы из очереди (TargetAcquired/TargetLost) — Patrol ↔ Follow/Attack
//! 2. Level-переходы по TargetSnapshot (Follow ↔ Attack по attack range)
//! 3. Action dispatch текущего состояния → вызовы EnemyActuator
//!
//! Переходы сцепляются в пределах одного tick: acquired + in range на том же
//! tick дают Patrol → Follow → Attack до dispatch.
//!
//! Brain не знает про ECS: вход — TargetSnapshot + AgentView, выход — EnemyActuator.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{AIState, EnemyConfig, PatrolLoop, PatrolRoute};
use crate::components::{
    DetectionModule, EffectId, EnemyAnimation, FacingCommand, MovementCommand,
};

/// Edge-triggered сигнал от Detection Provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSignal {
    TargetAcquired,
    TargetLost,
}

/// Снимок восприятия на текущий tick (между tick'ами не кешируется)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetSnapshot {
    pub is_visible: bool,
    pub is_in_attack_range: bool,
    /// None → цели нет или ссылка протухла (target despawned)
    pub position: Option<Vec3>,
}

impl TargetSnapshot {
    pub fn from_detection(detection: &DetectionModule, target_position: Option<Vec3>) -> Self {
        Self {
            is_visible: detection.is_seeing_target,
            is_in_attack_range: detection.is_target_in_attack_range,
            position: detection.known_target.and(target_position),
        }
    }
}

/// Что агент знает о себе на текущий tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentView {
    /// Позиция агента (stop = destination на неё)
    pub position: Vec3,
    /// Точка, от которой меряется дистанция до цели
    pub detection_source: Vec3,
    pub attack_range: f32,
}

/// Outbound вызовы brain'а в коллабораторы агента
///
/// ECS реализация — EcsActuator (systems/fsm.rs), в тестах — recorder.
pub trait EnemyActuator {
    fn set_destination(&mut self, point: Vec3);
    fn orient_towards(&mut self, point: Vec3);
    fn orient_weapons_towards(&mut self, point: Vec3);
    /// Сбросить facing: в Patrol тело смотрит по направлению движения
    fn clear_orientation(&mut self) {}
    /// Попытка атаки; cooldown проверяет сам Attack Provider
    fn try_attack(&mut self, point: Vec3);
    fn set_alerted(&mut self, alerted: bool);
    fn play_effect(&mut self, effect: EffectId);
    fn stop_effect(&mut self, effect: EffectId);
}

/// Прогресс по патрульному маршруту
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatrolCursor {
    pub index: usize,
    /// PingPong: идём в обратную сторону
    pub reversing: bool,
}

impl PatrolCursor {
    fn advance(&mut self, len: usize, policy: PatrolLoop) {
        if len == 0 {
            self.index = 0;
            return;
        }

        match policy {
            PatrolLoop::Wrap => {
                self.index = (self.index + 1) % len;
            }
            PatrolLoop::Once => {
                self.index = (self.index + 1).min(len - 1);
            }
            PatrolLoop::PingPong => {
                if len == 1 {
                    self.index = 0;
                } else if self.reversing {
                    if self.index == 0 {
                        self.reversing = false;
                        self.index = 1;
                    } else {
                        self.index -= 1;
                    }
                } else if self.index + 1 >= len {
                    self.reversing = true;
                    self.index = len - 2;
                } else {
                    self.index += 1;
                }
            }
        }
    }
}

/// AgentState: FSM одного enemy
///
/// Output surfaces (MovementCommand, FacingCommand, EnemyAnimation) добавляются
/// автоматически через Required Components. Провайдеры (DetectionModule,
/// NavigationAgent, Attacker) и EnemyConfig — обязаны прийти вместе с brain,
/// иначе activate_enemies не включит агента.
#[derive(Component, Debug, Clone, Default)]
#[require(MovementCommand, FacingCommand, EnemyAnimation)]
pub struct EnemyBrain {
    state: AIState,
    alerted: bool,
    /// false до успешной валидации коллабораторов — такой агент не тикает
    active: bool,
    patrol: PatrolCursor,
    pending: VecDeque<DetectionSignal>,
}

impl EnemyBrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AIState {
        self.state
    }

    pub fn is_alerted(&self) -> bool {
        self.alerted
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn patrol_cursor(&self) -> PatrolCursor {
        self.patrol
    }

    /// Включает агента: патруль начинается с ближайшего waypoint
    pub fn activate(&mut self, position: Vec3, route: Option<&PatrolRoute>) {
        self.patrol = PatrolCursor {
            index: route.map(|r| r.closest_node(position)).unwrap_or(0),
            reversing: false,
        };
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.pending.clear();
    }

    /// Ставит edge-сигнал в очередь; обрабатывается в начале следующего on_tick.
    /// Неактивный агент сигналы игнорирует.
    pub fn notify(&mut self, signal: DetectionSignal) {
        if self.active {
            self.pending.push_back(signal);
        }
    }

    pub fn pending_signals(&self) -> usize {
        self.pending.len()
    }

    /// Один логический tick агента
    pub fn on_tick(
        &mut self,
        snapshot: &TargetSnapshot,
        view: &AgentView,
        route: Option<&PatrolRoute>,
        config: &EnemyConfig,
        out: &mut impl EnemyActuator,
    ) {
        if !self.active {
            return;
        }

        // Фаза 1: edge-сигналы
        while let Some(signal) = self.pending.pop_front() {
            match signal {
                DetectionSignal::TargetAcquired => self.acquire_target(config, out),
                DetectionSignal::TargetLost => self.lose_target(config, out),
            }
        }

        // Stale target: цель пропала без TargetLost → неявный lost
        let target = match (self.state, snapshot.position) {
            (AIState::Follow | AIState::Attack, None) => {
                self.lose_target(config, out);
                None
            }
            (_, position) => position,
        };

        // Фаза 2: level-переходы
        match self.state {
            AIState::Follow => {
                if snapshot.is_visible && snapshot.is_in_attack_range {
                    self.state = AIState::Attack;
                    out.set_destination(view.position);
                }
            }
            AIState::Attack => {
                if !snapshot.is_in_attack_range {
                    self.state = AIState::Follow;
                }
            }
            AIState::Patrol => {}
        }

        // Фаза 3: dispatch
        match (self.state, target) {
            (AIState::Patrol, _) => {
                let destination = self.update_patrol_destination(view.position, route, config);
                out.set_destination(destination);
            }
            (AIState::Follow, Some(target)) => {
                out.set_destination(target);
                out.orient_towards(target);
                out.orient_weapons_towards(target);
            }
            (AIState::Attack, Some(target)) => {
                let distance = target.distance(view.detection_source);
                if distance >= config.attack_stop_distance(view.attack_range) {
                    out.set_destination(target);
                } else {
                    out.set_destination(view.position);
                }

                out.orient_towards(target);
                out.orient_weapons_towards(target);
                out.try_attack(target);
            }
            // Stale guard выше уже перевёл в Patrol
            (AIState::Follow | AIState::Attack, None) => {}
        }
    }

    fn acquire_target(&mut self, config: &EnemyConfig, out: &mut impl EnemyActuator) {
        if self.state != AIState::Patrol {
            return;
        }

        self.state = AIState::Follow;
        for &vfx in &config.detect_vfx {
            out.play_effect(vfx);
        }
        if let Some(sfx) = config.detect_sfx {
            out.play_effect(sfx);
        }
        self.alerted = true;
        out.set_alerted(true);
    }

    fn lose_target(&mut self, config: &EnemyConfig, out: &mut impl EnemyActuator) {
        if matches!(self.state, AIState::Follow | AIState::Attack) {
            self.state = AIState::Patrol;
            out.clear_orientation();
        }

        if self.alerted {
            for &vfx in &config.detect_vfx {
                out.stop_effect(vfx);
            }
            self.alerted = false;
            out.set_alerted(false);
        }
    }

    /// Двигает курсор если waypoint достигнут, возвращает текущую точку маршрута.
    /// Без валидного маршрута — собственная позиция (стоим).
    fn update_patrol_destination(
        &mut self,
        position: Vec3,
        route: Option<&PatrolRoute>,
        config: &EnemyConfig,
    ) -> Vec3 {
        let Some(route) = route.filter(|r| r.is_valid()) else {
            return position;
        };

        let len = route.nodes.len();
        if self.patrol.index >= len {
            self.patrol = PatrolCursor::default();
        }

        if let Some(node) = route.node(self.patrol.index) {
            if position.distance(node) <= config.path_reaching_radius {
                self.patrol.advance(len, config.patrol_loop);
            }
        }

        route.node(self.patrol.index).unwrap_or(position)
    }
}

/// Случайный вариант искр попадания (uniform по всем N вариантам)
pub fn pick_hit_spark<R: Rng + ?Sized>(config: &EnemyConfig, rng: &mut R) -> Option<EffectId> {
    if config.hit_sparks.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..config.hit_sparks.len());
    Some(config.hit_sparks[index])
}
