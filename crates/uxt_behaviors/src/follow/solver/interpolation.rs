//! Сглаживание pose между tick'ами

use bevy::math::{Quat, Vec3};

use crate::follow::components::Pose;

/// Доля пути к цели за tick: `1 - exp(-dt / lerp_time)`
///
/// Frame-rate independent: два tick по dt/2 дают тот же результат, что один по dt.
/// `lerp_time <= 0` → 1 (без сглаживания).
pub fn smoothing_factor(delta_secs: f32, lerp_time: f32) -> f32 {
    if lerp_time <= 0.0 {
        return 1.0;
    }
    if delta_secs <= 0.0 {
        return 0.0;
    }
    (1.0 - (-delta_secs / lerp_time).exp()).clamp(0.0, 1.0)
}

/// Экспоненциальный blend от предыдущей committed pose к желаемой
pub fn blend_pose(previous: Pose, desired: Pose, factor: f32) -> Pose {
    Pose {
        position: blend_position(previous.position, desired.position, factor),
        rotation: blend_rotation(previous.rotation, desired.rotation, factor),
    }
}

pub fn blend_position(previous: Vec3, desired: Vec3, factor: f32) -> Vec3 {
    previous.lerp(desired, factor)
}

pub fn blend_rotation(previous: Quat, desired: Quat, factor: f32) -> Quat {
    if factor >= 1.0 {
        return desired;
    }
    previous.slerp(desired, factor).normalize()
}

/// Линейный возврат на default distance
///
/// Возвращает (дистанция, завершён ли возврат).
pub fn default_distance_blend(from: f32, to: f32, timer: f32, duration: f32) -> (f32, bool) {
    if duration <= 0.0 || timer >= duration {
        return (to, true);
    }
    let t = (timer / duration).clamp(0.0, 1.0);
    (from + (to - from) * t, false)
}
