//! Perception компоненты: Detection Provider surface

use bevy::prelude::*;

/// Detection/Targeting Provider — заполняется хостом (vision cone, raycasts)
///
/// AI только читает. Edge-события acquired/lost приходят отдельно
/// через DetectionEvent, этот компонент — level-состояние на текущий frame.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct DetectionModule {
    /// Есть line of sight до цели
    pub is_seeing_target: bool,
    /// Цель в attack range
    pub is_target_in_attack_range: bool,
    /// Последняя известная цель (None → цели нет)
    pub known_target: Option<Entity>,
    /// Точка, от которой меряется дистанция до цели (глаза/ствол)
    pub source_point: Vec3,
    /// Дальность атаки (метры)
    pub attack_range: f32,
}

impl Default for DetectionModule {
    fn default() -> Self {
        Self {
            is_seeing_target: false,
            is_target_in_attack_range: false,
            known_target: None,
            source_point: Vec3::ZERO,
            attack_range: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use bevy::ecs::reflect::ReflectComponent;
    use bevy::reflect::{GetField, TypeRegistry};

    use super::*;

    #[test]
    fn test_detection_module_reflects_as_component() {
        let mut registry = TypeRegistry::default();
        registry.register::<DetectionModule>();

        assert!(registry
            .get_type_data::<ReflectComponent>(TypeId::of::<DetectionModule>())
            .is_some());

        let detection = DetectionModule::default();
        assert_eq!(detection.get_field::<f32>("attack_range"), Some(&10.0));
        assert_eq!(detection.get_field::<Option<Entity>>("known_target"), Some(&None));
    }
}
