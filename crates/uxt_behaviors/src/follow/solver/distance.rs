//! Distance solver: offset target → object в диапазоне [min, max]

use bevy::math::Vec3;

use super::DEGENERATE_LENGTH;

/// Результат distance solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceClamp {
    pub position: Vec3,
    /// Позиция была вне диапазона и скорректирована
    pub clamped: bool,
}

/// Clamp дистанции вдоль луча target → current
///
/// Object в точке target (offset ~0) → направление = backward axis target'а
/// (детерминированно, без random). `ignore` → позиция как есть.
pub fn clamp_distance(
    current: Vec3,
    target: Vec3,
    target_forward: Vec3,
    minimum_distance: f32,
    maximum_distance: f32,
    ignore: bool,
) -> DistanceClamp {
    if ignore {
        return DistanceClamp {
            position: current,
            clamped: false,
        };
    }

    let offset = current - target;
    let distance = offset.length();

    let direction = if distance < DEGENERATE_LENGTH {
        let backward = (-target_forward).normalize_or_zero();
        if backward == Vec3::ZERO {
            // Target без осей — берём мировой backward (+Z)
            Vec3::Z
        } else {
            backward
        }
    } else {
        offset / distance
    };

    // Не clamp(): при min > max (нарушенный контракт) clamp паникует
    let clamped_distance = distance.max(minimum_distance).min(maximum_distance);
    if clamped_distance == distance {
        return DistanceClamp {
            position: current,
            clamped: false,
        };
    }

    DistanceClamp {
        position: target + direction * clamped_distance,
        clamped: true,
    }
}
