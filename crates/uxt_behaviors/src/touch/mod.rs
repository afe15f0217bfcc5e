//! Touch pointer — hover tracking для нескольких pointer'ов
//!
//! Pointer = entity с Transform + TouchPointer (кончик пальца, обновляется host'ом).
//! Target = entity с Transform + TouchTarget (сферический collider).
//! Hover переходы публикуются как TouchHoverEvent.

use bevy::prelude::*;

use crate::follow::FollowSystems;

pub mod components;
pub mod events;
pub mod hover;


// Re-export основных типов
pub use components::{TouchPointer, TouchTarget};
pub use events::TouchHoverEvent;
pub use hover::closest_touch_target;

/// Touch Plugin
///
/// Hover считается после follow: targets, прикреплённые к follower'ам,
/// уже на позиции текущего frame.
pub struct TouchPlugin;

impl Plugin for TouchPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TouchHoverEvent>()
            .register_type::<TouchPointer>()
            .register_type::<TouchTarget>();

        app.add_systems(Update, hover::update_touch_hover.after(FollowSystems));
    }
}
