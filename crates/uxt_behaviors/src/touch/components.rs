//! Touch компоненты: pointer (кончик пальца) и touchable target

use bevy::prelude::*;

/// Touch pointer (fingertip)
///
/// `hovered` — текущая hover цель, обновляется `update_touch_hover`.
/// Каждый pointer трекает hover независимо от остальных.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct TouchPointer {
    /// Радиус сферы касания вокруг pointer'а (метры)
    pub touch_radius: f32,
    pub hovered: Option<Entity>,
}

impl Default for TouchPointer {
    fn default() -> Self {
        Self {
            touch_radius: 0.0075, // 0.75 см — размер кончика пальца
            hovered: None,
        }
    }
}

/// Touchable target: сферический collider вокруг Transform::translation
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TouchTarget {
    pub radius: f32,
}

impl Default for TouchTarget {
    fn default() -> Self {
        Self { radius: 0.05 }
    }
}
