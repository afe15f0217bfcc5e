//! Hover tracking: ближайшая touch цель в радиусе pointer'а

use bevy::prelude::*;

use super::components::{TouchPointer, TouchTarget};
use super::events::TouchHoverEvent;

/// Ближайшая цель, чья поверхность в пределах `touch_radius` от pointer'а
///
/// Порядок выбора (детерминированный):
/// 1. минимальная дистанция до поверхности (внутри collider'а = 0)
/// 2. минимальная дистанция до центра (перекрывающиеся collider'ы)
/// 3. минимальный key
pub fn closest_touch_target<K>(
    pointer: Vec3,
    touch_radius: f32,
    targets: impl IntoIterator<Item = (K, Vec3, f32)>,
) -> Option<K>
where
    K: Copy + Ord,
{
    let mut best: Option<(f32, f32, K)> = None;

    for (key, center, radius) in targets {
        let center_distance = pointer.distance(center);
        let surface_distance = (center_distance - radius).max(0.0);
        if surface_distance > touch_radius {
            continue;
        }

        let candidate = (surface_distance, center_distance, key);
        best = match best {
            Some(current) if !is_closer(&candidate, &current) => Some(current),
            _ => Some(candidate),
        };
    }

    best.map(|(_, _, key)| key)
}

fn is_closer<K: Ord>(a: &(f32, f32, K), b: &(f32, f32, K)) -> bool {
    a.0.total_cmp(&b.0)
        .then(a.1.total_cmp(&b.1))
        .then(a.2.cmp(&b.2))
        .is_lt()
}

/// Система: обновление hover цели для всех pointer'ов
///
/// Despawned цель исчезает из query → pointer получает Ended.
pub fn update_touch_hover(
    mut pointers: Query<(Entity, &Transform, &mut TouchPointer)>,
    targets: Query<(Entity, &Transform, &TouchTarget), Without<TouchPointer>>,
    mut hover_events: EventWriter<TouchHoverEvent>,
) {
    for (pointer_entity, pointer_transform, mut pointer) in pointers.iter_mut() {
        let hovered = closest_touch_target(
            pointer_transform.translation,
            pointer.touch_radius,
            targets
                .iter()
                .map(|(entity, transform, target)| (entity, transform.translation, target.radius)),
        );

        if hovered == pointer.hovered {
            continue;
        }

        if let Some(previous) = pointer.hovered {
            hover_events.write(TouchHoverEvent::Ended {
                pointer: pointer_entity,
                target: previous,
            });
        }
        if let Some(target) = hovered {
            hover_events.write(TouchHoverEvent::Started {
                pointer: pointer_entity,
                target,
            });
        }

        crate::log(&format!(
            "Touch: {:?} hover {:?} → {:?}",
            pointer_entity, pointer.hovered, hovered
        ));
        pointer.hovered = hovered;
    }
}
