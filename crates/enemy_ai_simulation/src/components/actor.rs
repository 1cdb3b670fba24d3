//! Health collaborator: источник damaged/died сигналов агента

use bevy::prelude::*;

/// Результат одного попадания по Health
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Цель уже мертва, урон не применён
    AlreadyDead,
    Damaged,
    /// Переход alive → dead (ровно один раз за жизнь)
    Died,
}

/// Здоровье агента (или игрока)
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Применяет урон. Died возвращается только на переходе через 0.
    pub fn apply_hit(&mut self, damage: u32) -> HitOutcome {
        if !self.is_alive() {
            return HitOutcome::AlreadyDead;
        }

        self.current = self.current.saturating_sub(damage);
        if self.is_alive() {
            HitOutcome::Damaged
        } else {
            HitOutcome::Died
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_hit_reports_death_once() {
        let mut health = Health::new(50);

        assert_eq!(health.apply_hit(20), HitOutcome::Damaged);
        assert_eq!(health.current, 30);

        assert_eq!(health.apply_hit(100), HitOutcome::Died); // Saturating sub
        assert_eq!(health.current, 0);

        assert_eq!(health.apply_hit(10), HitOutcome::AlreadyDead);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_zero_damage_keeps_alive() {
        let mut health = Health::default();
        assert_eq!(health.apply_hit(0), HitOutcome::Damaged);
        assert!(health.is_alive());
    }
}
