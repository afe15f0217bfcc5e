//! Follow компоненты: target binding, per-entity state, Pose

use bevy::prelude::*;

/// Position + rotation в world space
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }

    /// Записать pose в Transform (scale не трогаем)
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.rotation;
    }

    /// Forward axis (-Z, как `Transform::forward`)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// За кем следуем
///
/// `reference` — точка для FaceReference (обычно камера).
/// None → reference = сам target (head-mounted камера как target).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FollowTarget {
    pub target: Entity,
    pub reference: Option<Entity>,
}

impl FollowTarget {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: Entity) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Per-entity state follow behavior (мутируется каждый tick)
///
/// Добавляется автоматически через `#[require]` на `FollowConfig`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct FollowState {
    /// Был ли re-facing на прошлом tick (dead-zone гистерезис)
    pub last_facing: bool,

    /// Время с начала возврата на default_distance (секунды)
    pub move_to_default_distance_timer: f32,

    /// Дистанция, с которой начался возврат (None = возврат не идёт)
    pub default_distance_blend_from: Option<f32>,

    /// Recenter на следующем tick (RecenterFollow event)
    pub recenter_requested: bool,

    /// Первый tick уже прошёл
    pub initialized: bool,

    /// Target не найден (лог только на переходе)
    pub target_missing: bool,

    /// Reference не найден (отдельно от target'а)
    pub reference_missing: bool,
}

impl FollowState {
    pub fn is_moving_to_default_distance(&self) -> bool {
        self.default_distance_blend_from.is_some()
    }
}
