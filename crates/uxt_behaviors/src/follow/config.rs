//! FollowConfig — неизменяемые параметры follow behavior
//!
//! Host (конфигуратор) создаёт конфиг при спавне и отвечает за его валидность.
//! Core конфиг не правит: нарушенные preconditions только логируются
//! (см. `warn_invalid_follow_config`).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::components::FollowState;

/// Режим ориентации follower'а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum OrientationMode {
    /// Rotation не меняется (держим текущую world rotation)
    WorldLock,

    /// Поворачиваемся к reference (камере) с dead-zone гистерезисом
    #[default]
    FaceReference,
}

/// Параметры follow (дистанции в метрах, углы в градусах, время в секундах)
///
/// Контракт конфигуратора:
/// `0 < minimum_distance <= default_distance <= maximum_distance`,
/// углы обзора в `(0, 180)`, dead-zone `>= 0`.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(FollowState)]
#[serde(default)]
pub struct FollowConfig {
    pub minimum_distance: f32,
    pub maximum_distance: f32,
    /// Дистанция после recenter / при первой активации
    pub default_distance: f32,

    /// Полуугол конуса обзора в плоскости forward/right
    pub max_view_horizontal_degrees: f32,
    /// Полуугол конуса обзора в плоскости forward/up
    pub max_view_vertical_degrees: f32,

    pub orientation: OrientationMode,
    pub orient_to_reference_deadzone_degrees: f32,

    /// Debug/test: distance solver = identity
    pub ignore_distance_clamp: bool,
    /// Debug/test: angular solver = identity
    pub ignore_angle_clamp: bool,
    /// Pitch/roll target'а не наклоняют конус обзора
    pub ignore_reference_pitch_and_roll: bool,

    pub interpolate_pose: bool,
    /// Time constant экспоненциального сглаживания pose
    pub pose_lerp_time: f32,
    /// Длительность линейного возврата на default_distance (0 = выключено)
    pub move_to_default_distance_lerp_time: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            minimum_distance: 0.2,
            maximum_distance: 1.0,
            default_distance: 0.5,
            max_view_horizontal_degrees: 30.0,
            max_view_vertical_degrees: 20.0,
            orientation: OrientationMode::FaceReference,
            orient_to_reference_deadzone_degrees: 60.0,
            ignore_distance_clamp: false,
            ignore_angle_clamp: false,
            ignore_reference_pitch_and_roll: false,
            interpolate_pose: true,
            pose_lerp_time: 0.1,
            move_to_default_distance_lerp_time: 0.5,
        }
    }
}

impl FollowConfig {
    /// Конфиг без сглаживания (каждый tick коммитит решение solver'ов напрямую)
    pub fn immediate() -> Self {
        Self {
            interpolate_pose: false,
            move_to_default_distance_lerp_time: 0.0,
            ..default()
        }
    }

    pub fn max_view_horizontal_radians(&self) -> f32 {
        self.max_view_horizontal_degrees.to_radians()
    }

    pub fn max_view_vertical_radians(&self) -> f32 {
        self.max_view_vertical_degrees.to_radians()
    }

    pub fn deadzone_radians(&self) -> f32 {
        self.orient_to_reference_deadzone_degrees.to_radians()
    }

    /// Первое нарушенное precondition (None = конфиг валиден)
    ///
    /// Только для диагностики: core работает с конфигом как есть.
    pub fn precondition_violation(&self) -> Option<&'static str> {
        if !(self.minimum_distance > 0.0) {
            return Some("minimum_distance must be > 0");
        }
        if self.minimum_distance > self.default_distance {
            return Some("minimum_distance must be <= default_distance");
        }
        if self.default_distance > self.maximum_distance {
            return Some("default_distance must be <= maximum_distance");
        }
        if !(self.max_view_horizontal_degrees > 0.0 && self.max_view_horizontal_degrees < 180.0) {
            return Some("max_view_horizontal_degrees must be in (0, 180)");
        }
        if !(self.max_view_vertical_degrees > 0.0 && self.max_view_vertical_degrees < 180.0) {
            return Some("max_view_vertical_degrees must be in (0, 180)");
        }
        if !(self.orient_to_reference_deadzone_degrees >= 0.0) {
            return Some("orient_to_reference_deadzone_degrees must be >= 0");
        }
        if self.pose_lerp_time < 0.0 || self.move_to_default_distance_lerp_time < 0.0 {
            return Some("lerp times must be >= 0");
        }
        None
    }
}
