//! Orientation solver: WorldLock / FaceReference с dead-zone гистерезисом
//!
//! FaceReference:
//! - idle (last_facing == false): re-facing только когда отклонение > dead-zone
//! - facing (last_facing == true): продолжаем re-facing пока отклонение не ~0
//!
//! Так объект не дёргается на границе dead-zone.

use bevy::prelude::*;

use crate::follow::config::OrientationMode;

use super::DEGENERATE_LENGTH;

/// Отклонение ниже считаем "уже смотрим на reference" (радианы)
pub const FACING_SETTLED_RADIANS: f32 = 1.0e-3;

/// Результат orientation solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSolution {
    pub rotation: Quat,
    /// Был ли re-facing на этом tick (пишется в FollowState::last_facing)
    pub facing: bool,
}

/// Rotation, у которой forward (-Z) смотрит вдоль `direction`, roll по world up
///
/// None для вырожденного направления.
pub fn facing_rotation(direction: Vec3) -> Option<Quat> {
    let direction = direction.try_normalize()?;
    // looking_to сам подбирает up, если direction параллелен Y
    Some(Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation)
}

/// Решение ориентации для одного tick
///
/// `position` — уже скорректированная (distance + angular) позиция объекта.
pub fn solve_orientation(
    mode: OrientationMode,
    current_rotation: Quat,
    position: Vec3,
    reference: Vec3,
    deadzone_radians: f32,
    last_facing: bool,
) -> OrientationSolution {
    match mode {
        OrientationMode::WorldLock => OrientationSolution {
            rotation: current_rotation,
            facing: false,
        },
        OrientationMode::FaceReference => {
            let to_reference = reference - position;
            if to_reference.length() < DEGENERATE_LENGTH {
                return OrientationSolution {
                    rotation: current_rotation,
                    facing: false,
                };
            }

            let current_forward = current_rotation * Vec3::NEG_Z;
            let deviation = current_forward.angle_between(to_reference);
            let threshold = if last_facing {
                FACING_SETTLED_RADIANS
            } else {
                deadzone_radians
            };

            if deviation > threshold {
                match facing_rotation(to_reference) {
                    Some(rotation) => OrientationSolution {
                        rotation,
                        facing: true,
                    },
                    None => OrientationSolution {
                        rotation: current_rotation,
                        facing: false,
                    },
                }
            } else {
                OrientationSolution {
                    rotation: current_rotation,
                    facing: false,
                }
            }
        }
    }
}
