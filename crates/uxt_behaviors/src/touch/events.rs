//! Touch events

use bevy::prelude::*;

/// Hover переходы touch pointer'а
///
/// На смене цели: сначала Ended (старая), затем Started (новая).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchHoverEvent {
    Started { pointer: Entity, target: Entity },
    Ended { pointer: Entity, target: Entity },
}

impl TouchHoverEvent {
    pub fn pointer(&self) -> Entity {
        match self {
            TouchHoverEvent::Started { pointer, .. } | TouchHoverEvent::Ended { pointer, .. } => *pointer,
        }
    }

    pub fn target(&self) -> Entity {
        match self {
            TouchHoverEvent::Started { target, .. } | TouchHoverEvent::Ended { target, .. } => *target,
        }
    }
}
