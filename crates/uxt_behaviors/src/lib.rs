//! UXT Behaviors Core
//!
//! Mixed-reality interaction behaviors поверх Bevy 0.16 ECS:
//! - follow: объект держится в диапазоне дистанций и в конусе обзора target'а
//! - touch: hover tracking для touch pointer'ов (кончики пальцев)
//!
//! Host (движок) владеет entities и Transform'ами и тикает App раз в frame.
//! Behaviors владеют только своим per-entity state (FollowState, TouchPointer::hovered).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod follow;
pub mod logger;
pub mod touch;

// Re-export базовых типов для удобства
pub use follow::{
    step_follow, FollowConfig, FollowInput, FollowPlugin, FollowState, FollowSystems, FollowTarget,
    OrientationMode, Pose, RecenterFollow, TargetFrame,
};
pub use logger::*;
pub use touch::{TouchHoverEvent, TouchPlugin, TouchPointer, TouchTarget};

/// Частота fake clock в headless режиме (тесты, demo)
pub const HEADLESS_TICK_HZ: f64 = 60.0;

/// Главный plugin (объединяет все behaviors)
pub struct BehaviorsPlugin;

impl Plugin for BehaviorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((FollowPlugin, TouchPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Для scripted движения target'ов в тестах и demo; сами behaviors random не используют.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Fake clock: каждый `app.update()` сдвигает Time ровно на 1/60 сек
/// (первый update — delta 0, как у Bevy).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / HEADLESS_TICK_HZ,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
