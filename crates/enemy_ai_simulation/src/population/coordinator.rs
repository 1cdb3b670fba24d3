//! EnemyPopulation — Population Coordinator
//!
//! Владеет множеством живых enemy и рассылает EnemyRemoved подписчикам.
//!
//! Инварианты:
//! - remaining_count() == total_count() - removed_count()
//! - один unregister_enemy → ровно один EnemyRemoved
//! - удалённый handle нельзя зарегистрировать снова
//! - broadcast happens-before структурного удаления: listener видит
//!   ещё не удалённый handle, а event.remaining_count == remaining_count() - 1

use std::collections::HashSet;

use bevy::prelude::*;

use crate::error::{PopulationError, PopulationResult};

/// Событие: enemy удалён из популяции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyRemoved {
    pub removed_enemy: Entity,
    /// Сколько останется сразу после этого удаления
    pub remaining_count: usize,
}

/// Подписчик на удаления (UI счётчик, objective tracker, …)
///
/// `population` — состояние на момент broadcast (removed_enemy ещё член).
/// Во время вызова список подписчиков у population временно пуст.
pub trait PopulationListener: Send + Sync + 'static {
    fn on_enemy_removed(&mut self, event: &EnemyRemoved, population: &EnemyPopulation);
}

impl<F> PopulationListener for F
where
    F: FnMut(&EnemyRemoved, &EnemyPopulation) + Send + Sync + 'static,
{
    fn on_enemy_removed(&mut self, event: &EnemyRemoved, population: &EnemyPopulation) {
        self(event, population)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Resource, Default)]
pub struct EnemyPopulation {
    members: HashSet<Entity>,
    /// Уже удалённые handles (защита от "воскрешения")
    ///
    /// Растёт на один handle за каждого удалённого enemy и не чистится
    /// всю сессию. Entity generational, так что цена только память.
    removed: HashSet<Entity>,
    total_registered: usize,
    listeners: Vec<(ListenerId, Box<dyn PopulationListener>)>,
    next_listener_id: u64,
}

impl EnemyPopulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрация enemy. Повторная регистрация — ошибка (не no-op).
    pub fn register_enemy(&mut self, enemy: Entity) -> PopulationResult<()> {
        if self.removed.contains(&enemy) {
            return Err(PopulationError::Resurrection(enemy));
        }
        if !self.members.insert(enemy) {
            return Err(PopulationError::AlreadyRegistered(enemy));
        }

        self.total_registered += 1;
        crate::log(&format!(
            "Population: registered {:?} ({} alive / {} total)",
            enemy,
            self.members.len(),
            self.total_registered
        ));
        Ok(())
    }

    /// Удаление enemy: broadcast EnemyRemoved, затем удаление из members.
    /// Handle не из популяции — ошибка вызывающего (double unregister).
    pub fn unregister_enemy(&mut self, enemy: Entity) -> PopulationResult<EnemyRemoved> {
        if !self.members.contains(&enemy) {
            return Err(PopulationError::NotRegistered(enemy));
        }

        let event = EnemyRemoved {
            removed_enemy: enemy,
            remaining_count: self.members.len() - 1,
        };

        self.broadcast(&event);

        self.members.remove(&enemy);
        self.removed.insert(enemy);

        crate::log_info(&format!(
            "Population: {:?} removed, {} remaining",
            enemy, event.remaining_count
        ));
        Ok(event)
    }

    pub fn remaining_count(&self) -> usize {
        self.members.len()
    }

    pub fn total_count(&self) -> usize {
        self.total_registered
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub fn contains(&self, enemy: Entity) -> bool {
        self.members.contains(&enemy)
    }

    pub fn members(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.iter().copied()
    }

    pub fn subscribe(&mut self, listener: impl PopulationListener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// false если такого подписчика нет
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn broadcast(&mut self, event: &EnemyRemoved) {
        // Забираем список, чтобы listener'ы получили &self без aliasing
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener.on_enemy_removed(event, self);
        }
        self.listeners = listeners;
    }
}
