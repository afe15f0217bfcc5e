//! Follow events

use bevy::prelude::*;

/// Event: вернуть follower перед target'ом (на default_distance)
///
/// Генерируется host'ом (кнопка "recenter", голосовая команда).
/// Обрабатывается: `apply_recenter_requests` → FollowState::recenter_requested →
/// `step_follow` на следующем tick.
#[derive(Event, Debug, Clone)]
pub struct RecenterFollow {
    pub entity: Entity,
}
