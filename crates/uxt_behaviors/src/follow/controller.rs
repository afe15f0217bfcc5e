//! Per-tick follow controller
//!
//! Связывает solvers в один шаг:
//! recenter → distance → angular → default-distance blend → orientation → interpolation.
//! Host (ECS система) читает Transform'ы, вызывает `step_follow` и пишет результат обратно.

use bevy::prelude::*;

use super::components::{FollowState, Pose};
use super::config::FollowConfig;
use super::solver::interpolation::{blend_position, blend_rotation};
use super::solver::{
    clamp_distance, clamp_view_angles, default_distance_blend, smoothing_factor, solve_orientation,
};

/// Snapshot осей target'а на текущий tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetFrame {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl TargetFrame {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            forward: *transform.forward(),
            up: *transform.up(),
            right: *transform.right(),
        }
    }

    /// Frame без pitch/roll: forward проецируется на горизонтальную плоскость
    ///
    /// Target смотрит строго вверх/вниз → frame без изменений.
    pub fn without_pitch_and_roll(self) -> Self {
        let Some(forward) = Vec3::new(self.forward.x, 0.0, self.forward.z).try_normalize() else {
            return self;
        };

        Self {
            position: self.position,
            forward,
            up: Vec3::Y,
            right: forward.cross(Vec3::Y),
        }
    }
}

/// Входные данные одного tick
#[derive(Debug, Clone, Copy)]
pub struct FollowInput {
    /// Последняя committed pose объекта
    pub current: Pose,
    pub target: TargetFrame,
    /// Точка, на которую смотрим в FaceReference (обычно камера)
    pub reference: Vec3,
    pub delta_secs: f32,
}

/// Один tick follow behavior
///
/// Всегда возвращает pose (для вырожденных входов — возможно вырожденную).
/// `state.last_facing` пишется ровно один раз, после решения orientation.
pub fn step_follow(config: &FollowConfig, state: &mut FollowState, input: &FollowInput) -> Pose {
    let target = if config.ignore_reference_pitch_and_roll {
        input.target.without_pitch_and_roll()
    } else {
        input.target
    };

    let first_tick = !state.initialized;
    state.initialized = true;

    let mut current = input.current.position;
    let recentered = std::mem::take(&mut state.recenter_requested);
    if recentered {
        current = target.position + target.forward.normalize_or_zero() * config.default_distance;
    }

    // 1. Distance
    let distance = clamp_distance(
        current,
        target.position,
        target.forward,
        config.minimum_distance,
        config.maximum_distance,
        config.ignore_distance_clamp,
    );

    // 2. Angular (по уже distance-скорректированному offset)
    let angular = clamp_view_angles(
        distance.position - target.position,
        target.forward,
        target.up,
        target.right,
        config.max_view_horizontal_radians(),
        config.max_view_vertical_radians(),
        config.ignore_angle_clamp,
    );
    let mut offset = angular.offset;

    // 3. Возврат на default distance (приоритетнее экспоненциального сглаживания)
    let blend_enabled =
        !config.ignore_distance_clamp && config.move_to_default_distance_lerp_time > 0.0;
    if !blend_enabled {
        state.default_distance_blend_from = None;
    } else if distance.clamped || first_tick || recentered {
        // Новый clamp перезапускает blend от текущей дистанции
        state.default_distance_blend_from = Some(offset.length());
        state.move_to_default_distance_timer = 0.0;
    }

    let mut moving_to_default = false;
    if let Some(from) = state.default_distance_blend_from {
        state.move_to_default_distance_timer += input.delta_secs.max(0.0);
        let (blended, done) = default_distance_blend(
            from,
            config.default_distance,
            state.move_to_default_distance_timer,
            config.move_to_default_distance_lerp_time,
        );
        if let Some(direction) = offset.try_normalize() {
            offset = direction * blended;
        }
        if done {
            state.default_distance_blend_from = None;
        }
        moving_to_default = true;
    }

    let desired_position = target.position + offset;

    // 4. Orientation
    let orientation = solve_orientation(
        config.orientation,
        input.current.rotation,
        desired_position,
        input.reference,
        config.deadzone_radians(),
        state.last_facing,
    );
    state.last_facing = orientation.facing;

    // 5. Interpolation
    if !config.interpolate_pose {
        return Pose::new(desired_position, orientation.rotation);
    }

    let factor = smoothing_factor(input.delta_secs, config.pose_lerp_time);
    let position = if moving_to_default {
        desired_position
    } else {
        blend_position(input.current.position, desired_position, factor)
    };

    Pose::new(position, blend_rotation(input.current.rotation, orientation.rotation, factor))
}
