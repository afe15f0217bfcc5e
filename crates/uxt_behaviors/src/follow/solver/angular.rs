//! Angular solver: держим offset внутри конуса обзора target'а
//!
//! Горизонтальный угол — в плоскости forward/right (нормаль up),
//! вертикальный — в плоскости forward/up (нормаль right).
//! Clamp последовательный: сначала horizontal, затем vertical
//! по уже скорректированному offset.

use bevy::math::{Quat, Vec3};

use super::signed_angle_on_plane;

/// Результат angular solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularClamp {
    /// Offset target → object после поворота в конус (длина не меняется)
    pub offset: Vec3,
    pub clamped: bool,
}

/// Повернуть offset к границе конуса минимальным поворотом
///
/// Углы в радианах. `ignore` → offset как есть.
pub fn clamp_view_angles(
    offset: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    max_horizontal: f32,
    max_vertical: f32,
    ignore: bool,
) -> AngularClamp {
    if ignore {
        return AngularClamp {
            offset,
            clamped: false,
        };
    }

    let (offset, horizontal) = clamp_on_plane(offset, forward, up, max_horizontal);
    let (offset, vertical) = clamp_on_plane(offset, forward, right, max_vertical);

    AngularClamp {
        offset,
        clamped: horizontal || vertical,
    }
}

/// Горизонтальный угол offset относительно forward (радианы)
pub fn horizontal_angle(offset: Vec3, forward: Vec3, up: Vec3) -> f32 {
    signed_angle_on_plane(forward, offset, up)
}

/// Вертикальный угол offset относительно forward (радианы)
pub fn vertical_angle(offset: Vec3, forward: Vec3, right: Vec3) -> f32 {
    signed_angle_on_plane(forward, offset, right)
}

fn clamp_on_plane(offset: Vec3, forward: Vec3, normal: Vec3, max_angle: f32) -> (Vec3, bool) {
    let Some(axis) = normal.try_normalize() else {
        return (offset, false);
    };

    let angle = signed_angle_on_plane(forward, offset, axis);
    if angle.abs() <= max_angle {
        return (offset, false);
    }

    // Поворот вокруг нормали плоскости: компонента вдоль нормали и длина сохраняются
    let correction = angle.signum() * max_angle - angle;
    (Quat::from_axis_angle(axis, correction) * offset, true)
}
