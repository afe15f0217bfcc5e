//! Follow behavior — держит объект в диапазоне дистанций и в конусе обзора target'а
//!
//! Архитектура:
//! - solver: чистая геометрия (distance, angular, orientation, interpolation)
//! - controller: один tick поверх solvers (`step_follow`)
//! - systems: ECS host — Transform target'а → controller → Transform follower'а
//!
//! Follower = entity с Transform + FollowConfig + FollowTarget
//! (FollowState добавляется через Required Components).

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod controller;
pub mod events;
pub mod solver;
pub mod systems;

#[cfg(test)]
mod controller_tests;

// Re-export основных типов
pub use components::{FollowState, FollowTarget, Pose};
pub use config::{FollowConfig, OrientationMode};
pub use controller::{step_follow, FollowInput, TargetFrame};
pub use events::RecenterFollow;

/// System set follow behavior (другие плагины упорядочиваются относительно него)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FollowSystems;

/// Follow Plugin
///
/// Регистрирует системы в Update (один tick на frame, delta из Time).
///
/// Порядок выполнения:
/// 1. warn_invalid_follow_config — диагностика конфигов
/// 2. apply_recenter_requests — RecenterFollow → FollowState
/// 3. update_follow — solvers + запись Transform
pub struct FollowPlugin;

impl Plugin for FollowPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RecenterFollow>()
            .register_type::<FollowConfig>()
            .register_type::<FollowTarget>()
            .register_type::<FollowState>();

        app.add_systems(
            Update,
            (
                systems::warn_invalid_follow_config,
                systems::apply_recenter_requests,
                systems::update_follow,
            )
                .chain() // Последовательное выполнение
                .in_set(FollowSystems),
        );
    }
}
