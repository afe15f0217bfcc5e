//! Tests for follow controller (step_follow без ECS).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::follow::solver::angular::{horizontal_angle, vertical_angle};
    use crate::follow::{step_follow, FollowConfig, FollowInput, FollowState, OrientationMode, Pose, TargetFrame};

    const DT: f32 = 1.0 / 60.0;

    /// Target в начале координат, смотрит в -Z
    fn target_at_origin() -> TargetFrame {
        TargetFrame::from_transform(&Transform::IDENTITY)
    }

    fn input(position: Vec3, rotation: Quat, target: TargetFrame) -> FollowInput {
        FollowInput {
            current: Pose::new(position, rotation),
            target,
            reference: target.position,
            delta_secs: DT,
        }
    }

    #[test]
    fn test_too_close_pushed_to_minimum() {
        let config = FollowConfig::immediate();
        let mut state = FollowState::default();

        let start = Vec3::new(0.0, 0.0, -config.minimum_distance * 0.5);
        let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target_at_origin()));

        assert!(pose.position.length() >= config.minimum_distance - 1.0e-5);
    }

    #[test]
    fn test_too_far_pulled_to_maximum() {
        let config = FollowConfig::immediate();
        let mut state = FollowState::default();

        let start = Vec3::new(0.0, 0.0, -config.maximum_distance * 1.5);
        let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target_at_origin()));

        assert!(pose.position.length() <= config.maximum_distance + 1.0e-5);
    }

    #[test]
    fn test_ignore_flags_make_position_identity() {
        let config = FollowConfig {
            ignore_distance_clamp: true,
            ignore_angle_clamp: true,
            orientation: OrientationMode::WorldLock,
            ..FollowConfig::immediate()
        };
        let mut state = FollowState::default();

        let start = Vec3::new(4.0, 3.0, 2.0); // далеко и за спиной
        let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target_at_origin()));

        assert_eq!(pose.position, start);
        assert_eq!(pose.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_random_targets_keep_band_and_cone() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            ..FollowConfig::immediate()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..300 {
            let mut state = FollowState::default();
            let target_transform = Transform::from_xyz(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            )
            .with_rotation(Quat::from_euler(
                EulerRot::YXZ,
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-1.4..1.4),
                rng.gen_range(-0.5..0.5),
            ));
            let target = TargetFrame::from_transform(&target_transform);
            let start = target.position
                + Vec3::new(
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-3.0..3.0),
                    rng.gen_range(-3.0..3.0),
                );

            let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target));
            let offset = pose.position - target.position;
            let distance = offset.length();

            assert!(
                distance >= config.minimum_distance - 1.0e-4 && distance <= config.maximum_distance + 1.0e-4,
                "distance {} out of band",
                distance
            );

            let h = horizontal_angle(offset, target.forward, target.up);
            let v = vertical_angle(offset, target.forward, target.right);
            assert!(h.abs() <= config.max_view_horizontal_radians() + 1.0e-3, "h = {}", h.to_degrees());
            assert!(v.abs() <= config.max_view_vertical_radians() + 1.0e-3, "v = {}", v.to_degrees());
        }
    }

    #[test]
    fn test_world_lock_rotation_invariant() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            ..FollowConfig::immediate()
        };
        let mut state = FollowState::default();
        let initial = Quat::from_rotation_y(0.7);
        let mut pose = Pose::new(Vec3::new(0.0, 0.0, -0.5), initial);

        for tick in 0..120 {
            let angle = tick as f32 * 0.05;
            let target_transform = Transform::from_xyz(angle.sin(), 0.0, angle.cos())
                .with_rotation(Quat::from_rotation_y(angle));
            let target = TargetFrame::from_transform(&target_transform);
            pose = step_follow(&config, &mut state, &input(pose.position, pose.rotation, target));
            assert_eq!(pose.rotation, initial);
            assert!(!state.last_facing);
        }
    }

    #[test]
    fn test_face_reference_first_tick_faces() {
        let config = FollowConfig::immediate();
        let mut state = FollowState::default();

        // Object перед target'ом, смотрит от него (-Z) → отклонение 180°
        let pose = step_follow(
            &config,
            &mut state,
            &input(Vec3::new(0.0, 0.0, -0.5), Quat::IDENTITY, target_at_origin()),
        );

        assert!(state.last_facing);
        let to_reference = Vec3::ZERO - pose.position;
        assert!(pose.forward().cross(to_reference).length() < 1.0e-3);
        assert!(pose.forward().dot(to_reference) > 0.0);

        // Следующий tick без движения: отклонение 0 → выходим из facing
        let again = step_follow(&config, &mut state, &input(pose.position, pose.rotation, target_at_origin()));
        assert!(!state.last_facing);
        assert_eq!(again.rotation, pose.rotation);
    }

    #[test]
    fn test_degenerate_position_recovers_deterministically() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            ..FollowConfig::immediate()
        };
        let mut first = FollowState::default();
        let mut second = FollowState::default();

        let a = step_follow(&config, &mut first, &input(Vec3::ZERO, Quat::IDENTITY, target_at_origin()));
        let b = step_follow(&config, &mut second, &input(Vec3::ZERO, Quat::IDENTITY, target_at_origin()));

        assert_eq!(a, b);
        assert!(a.position.is_finite());
        assert!((a.position.length() - config.minimum_distance).abs() < 1.0e-4);
    }

    #[test]
    fn test_recenter_places_in_front_at_default_distance() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            ..FollowConfig::immediate()
        };
        let mut state = FollowState {
            recenter_requested: true,
            ..default()
        };

        let pose = step_follow(
            &config,
            &mut state,
            &input(Vec3::new(0.3, 0.1, -0.6), Quat::IDENTITY, target_at_origin()),
        );

        assert!((pose.position - Vec3::new(0.0, 0.0, -config.default_distance)).length() < 1.0e-5);
        assert!(!state.recenter_requested, "recenter is one-shot");
    }

    #[test]
    fn test_move_to_default_distance_blend() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            interpolate_pose: true,
            move_to_default_distance_lerp_time: 0.5,
            ..default()
        };
        let mut state = FollowState::default();
        let target = target_at_origin();

        // Старт за maximum_distance → clamp до 1.0, затем линейно к 0.5 за 0.5 сек
        let mut pose = Pose::new(Vec3::new(0.0, 0.0, -2.0), Quat::IDENTITY);
        pose = step_follow(&config, &mut state, &input(pose.position, pose.rotation, target));
        assert!(state.is_moving_to_default_distance());
        assert!(pose.position.length() <= config.maximum_distance + 1.0e-5);

        let mut previous = pose.position.length();
        for _ in 0..40 {
            pose = step_follow(&config, &mut state, &input(pose.position, pose.rotation, target));
            let distance = pose.position.length();
            assert!(distance <= previous + 1.0e-5, "blend must move monotonically toward default");
            previous = distance;
        }

        assert!(!state.is_moving_to_default_distance());
        assert!((pose.position.length() - config.default_distance).abs() < 1.0e-4);
    }

    #[test]
    fn test_interpolation_lags_behind_solution() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            interpolate_pose: true,
            move_to_default_distance_lerp_time: 0.0,
            pose_lerp_time: 0.2,
            ..default()
        };
        let mut state = FollowState::default();

        let start = Vec3::new(0.0, 0.0, -2.0);
        let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target_at_origin()));

        // Один tick: ещё не дошли до maximum_distance, но двигаемся к нему
        let distance = pose.position.length();
        assert!(distance < 2.0);
        assert!(distance > config.maximum_distance);
    }

    #[test]
    fn test_ignore_pitch_and_roll_flattens_cone() {
        let config = FollowConfig {
            orientation: OrientationMode::WorldLock,
            ignore_reference_pitch_and_roll: true,
            ..FollowConfig::immediate()
        };
        let mut state = FollowState::default();

        // Target смотрит на 60° вниз; object на уровне target'а перед ним
        let target_transform = Transform::from_rotation(Quat::from_rotation_x(-60.0_f32.to_radians()));
        let target = TargetFrame::from_transform(&target_transform);
        let start = Vec3::new(0.0, 0.0, -0.5);

        let pose = step_follow(&config, &mut state, &input(start, Quat::IDENTITY, target));
        // Без pitch конус горизонтальный → позиция внутри конуса, не двигаем
        assert!((pose.position - start).length() < 1.0e-5);
    }
}
