//! Общие helpers для integration тестов
//!
//! FrameQueue: упорядоченная последовательность шагов (input → tick → assert)
//! поверх headless App с fake clock. Каждый шаг выполняется перед своим `app.update()`.

#![allow(dead_code)]

use bevy::prelude::*;
use std::collections::VecDeque;
use uxt_behaviors::{create_headless_app, BehaviorsPlugin};

type Step = Box<dyn FnOnce(&mut App)>;

#[derive(Default)]
pub struct FrameQueue {
    steps: VecDeque<Step>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Шаг выполнится в начале следующего свободного frame
    pub fn enqueue(&mut self, step: impl FnOnce(&mut App) + 'static) -> &mut Self {
        self.steps.push_back(Box::new(step));
        self
    }

    /// Прогоняет все шаги: step → app.update() → следующий step
    pub fn run(&mut self, app: &mut App) {
        while let Some(step) = self.steps.pop_front() {
            step(app);
            app.update();
        }
    }
}

/// Headless App со всеми behaviors
pub fn create_behaviors_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(BehaviorsPlugin);
    app
}

pub fn transform_of(app: &App, entity: Entity) -> Transform {
    app.world()
        .get::<Transform>(entity)
        .copied()
        .expect("entity must have Transform")
}

pub fn set_transform(app: &mut App, entity: Entity, transform: Transform) {
    let mut entity_mut = app.world_mut().entity_mut(entity);
    let mut current = entity_mut
        .get_mut::<Transform>()
        .expect("entity must have Transform");
    *current = transform;
}
