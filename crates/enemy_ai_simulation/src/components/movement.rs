//! Movement компоненты: Navigation Provider surface
//!
//! ECS пишет high-level intent (MovementCommand, FacingCommand),
//! хост (navmesh agent + character controller) читает и исполняет.
//! Обратно хост отчитывается через NavigationAgent (velocity/speed).

use bevy::prelude::*;

/// Команда движения для агента (выполняется navmesh агентом хоста)
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Никакой destination ещё не выставлен
    Idle,
    /// Двигаться к позиции (world coordinates).
    /// Stop = MoveToPosition с собственной позицией агента.
    MoveToPosition { target: Vec3 },
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}

impl MovementCommand {
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            MovementCommand::Idle => None,
            MovementCommand::MoveToPosition { target } => Some(*target),
        }
    }
}

/// Куда смотреть телом и оружием (хост сглаживает поворот сам)
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct FacingCommand {
    pub body: Option<Vec3>,
    pub weapons: Option<Vec3>,
}

/// Состояние navmesh агента, которое сообщает хост каждый frame
///
/// Используется только для косметики (MoveSpeed параметр, pitch звука шагов).
#[derive(Component, Debug, Clone, Copy)]
pub struct NavigationAgent {
    /// Текущая скорость агента (world space)
    pub velocity: Vec3,
    /// Максимальная скорость агента (м/с)
    pub max_speed: f32,
}

impl Default for NavigationAgent {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            max_speed: 3.5,
        }
    }
}

impl NavigationAgent {
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
