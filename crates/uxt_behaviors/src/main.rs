//! Headless demo follow behavior
//!
//! Target (голова пользователя) бродит и крутится случайно, follower держится рядом.
//! Раз в 60 тиков печатаем дистанцию и углы относительно target'а.

use bevy::prelude::*;
use rand::Rng;
use uxt_behaviors::follow::solver::angular::{horizontal_angle, vertical_angle};
use uxt_behaviors::{
    create_headless_app, log_info, BehaviorsPlugin, DeterministicRng, FollowConfig, FollowTarget,
};

/// Маркер target'а demo
#[derive(Component)]
struct Wanderer {
    velocity: Vec3,
    yaw_rate: f32,
}

/// Случайное блуждание target'а (seeded RNG → воспроизводимо)
fn wander(mut query: Query<(&mut Transform, &mut Wanderer)>, mut rng: ResMut<DeterministicRng>, time: Res<Time>) {
    let delta = time.delta_secs();

    for (mut transform, mut wanderer) in query.iter_mut() {
        if rng.rng.gen_bool(0.02) {
            wanderer.velocity = Vec3::new(rng.rng.gen_range(-1.0..1.0), 0.0, rng.rng.gen_range(-1.0..1.0));
            wanderer.yaw_rate = rng.rng.gen_range(-2.0..2.0);
        }
        transform.translation += wanderer.velocity * delta;
        transform.rotate_y(wanderer.yaw_rate * delta);
    }
}

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting UXT follow demo (seed: {})", seed));

    app.add_plugins(BehaviorsPlugin)
        .add_systems(Update, wander.before(uxt_behaviors::FollowSystems));

    let head = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 1.6, 0.0),
            Wanderer {
                velocity: Vec3::ZERO,
                yaw_rate: 0.0,
            },
        ))
        .id();

    let panel = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 1.6, -2.0),
            FollowConfig::default(),
            FollowTarget::new(head),
        ))
        .id();

    // 600 тиков = 10 секунд при 60Hz
    for tick in 0..600 {
        app.update();

        if tick % 60 == 0 {
            let world = app.world();
            let (Some(head_transform), Some(panel_transform)) =
                (world.get::<Transform>(head), world.get::<Transform>(panel))
            else {
                break;
            };

            let offset = panel_transform.translation - head_transform.translation;
            log_info(&format!(
                "Tick {}: distance {:.3}m, horizontal {:.1}°, vertical {:.1}°",
                tick,
                offset.length(),
                horizontal_angle(offset, *head_transform.forward(), *head_transform.up()).to_degrees(),
                vertical_angle(offset, *head_transform.forward(), *head_transform.right()).to_degrees(),
            ));
        }
    }

    log_info("Demo complete!");
}
