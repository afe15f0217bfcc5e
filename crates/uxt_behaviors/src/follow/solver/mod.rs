//! Follow solvers — чистые функции без ECS
//!
//! Порядок внутри tick (см. `controller::step_follow`):
//! distance → angular → orientation → interpolation.
//! Angular после distance: поворот в конус сохраняет длину offset,
//! обратный порядок снова выводил бы дистанцию из диапазона.

use bevy::math::Vec3;
use std::f32::consts::{PI, TAU};

pub mod angular;
pub mod distance;
pub mod interpolation;
pub mod orientation;

pub use angular::{clamp_view_angles, AngularClamp};
pub use distance::{clamp_distance, DistanceClamp};
pub use interpolation::{blend_pose, default_distance_blend, smoothing_factor};
pub use orientation::{facing_rotation, solve_orientation, OrientationSolution};

/// Векторы короче считаем нулевыми
pub const DEGENERATE_LENGTH: f32 = 1.0e-4;

/// Нормализация угла в (-π, π]
///
/// `rem_euclid` точен для любого конечного f32 (без while-циклов и без
/// потери диапазона на больших входах). NaN/inf → NaN.
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return f32::NAN;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // Граница -π принадлежит π
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Знаковый угол от `from` до проекции `to` на плоскость с нормалью `normal`
///
/// Положительный угол = поворот вокруг `normal` против часовой стрелки
/// (right-handed): `Quat::from_axis_angle(normal, angle) * from` даёт
/// направление проекции `to`. Вырожденные входы → 0.
pub fn signed_angle_on_plane(from: Vec3, to: Vec3, normal: Vec3) -> f32 {
    let normal = normal.normalize_or_zero();
    let side = normal.cross(from).normalize_or_zero();
    if side == Vec3::ZERO {
        return 0.0;
    }
    let forward = side.cross(normal);

    let x = to.dot(forward);
    let y = to.dot(side);
    if x.abs() < f32::EPSILON && y.abs() < f32::EPSILON {
        return 0.0;
    }

    wrap_angle(y.atan2(x))
}
