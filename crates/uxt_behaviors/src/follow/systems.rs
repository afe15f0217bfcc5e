//! Follow systems (ECS host ↔ controller)

use bevy::prelude::*;

use super::components::{FollowState, FollowTarget, Pose};
use super::config::FollowConfig;
use super::controller::{step_follow, FollowInput, TargetFrame};
use super::events::RecenterFollow;

/// Система: предупреждение о нарушенных preconditions конфига
///
/// Срабатывает при добавлении/изменении FollowConfig. Конфиг не правим —
/// валидация на стороне конфигуратора.
pub fn warn_invalid_follow_config(query: Query<(Entity, &FollowConfig), Changed<FollowConfig>>) {
    for (entity, config) in query.iter() {
        if let Some(violation) = config.precondition_violation() {
            crate::log_warning(&format!(
                "Follow: {:?} has invalid config ({}), behavior is unspecified",
                entity, violation
            ));
        }
    }
}

/// Система: RecenterFollow events → FollowState::recenter_requested
pub fn apply_recenter_requests(
    mut events: EventReader<RecenterFollow>,
    mut query: Query<&mut FollowState>,
) {
    for event in events.read() {
        let Ok(mut state) = query.get_mut(event.entity) else {
            crate::log(&format!("Follow: recenter for {:?} ignored (no FollowState)", event.entity));
            continue;
        };
        state.recenter_requested = true;
    }
}

/// Система: один follow tick для всех followers
///
/// Target/reference читаются из Transform (без FollowConfig — follower не может
/// следовать за другим follower'ом). Follower без target'а пропускается.
pub fn update_follow(
    mut followers: Query<(Entity, &FollowConfig, &FollowTarget, &mut FollowState, &mut Transform)>,
    targets: Query<&Transform, Without<FollowConfig>>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, config, follow_target, mut state, mut transform) in followers.iter_mut() {
        let target_transform = targets.get(follow_target.target).ok();
        track_presence(entity, &mut state.target_missing, target_transform.is_some(), "target");
        let Some(target_transform) = target_transform else {
            continue;
        };

        // Без отдельного reference смотрим на target
        let reference = match follow_target.reference {
            Some(reference) => targets.get(reference).ok().map(|transform| transform.translation),
            None => Some(target_transform.translation),
        };
        track_presence(entity, &mut state.reference_missing, reference.is_some(), "reference");
        let Some(reference) = reference else {
            continue;
        };

        let was_facing = state.last_facing;
        let input = FollowInput {
            current: Pose::from_transform(&transform),
            target: TargetFrame::from_transform(target_transform),
            reference,
            delta_secs: delta,
        };

        let pose = step_follow(config, &mut state, &input);
        pose.apply_to(&mut transform);

        if state.last_facing && !was_facing {
            crate::log(&format!("Follow: {:?} re-facing reference", entity));
        }
    }
}

/// Лог только на переходе present ↔ missing, отдельно для target и reference
fn track_presence(entity: Entity, missing: &mut bool, present: bool, what: &str) {
    if present == !*missing {
        return;
    }
    if present {
        crate::log(&format!("Follow: {:?} {} available again", entity, what));
    } else {
        crate::log(&format!("Follow: {:?} skipped, {} entity is missing", entity, what));
    }
    *missing = !present;
}
