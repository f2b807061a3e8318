//! Locomotion domain: debug-only test arena.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, Ground};

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.5, 0.4),
        ..default()
    });
    let pillar_color = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.3, 0.4),
        ..default()
    });

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground slab
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(40.0, 1.0, 40.0))),
        MeshMaterial3d(ground_color.clone()),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 1.0, 40.0),
        ground_layers,
    ));

    // Step for jump testing
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(4.0, 1.0, 4.0))),
        MeshMaterial3d(ground_color),
        Transform::from_xyz(6.0, 0.5, -4.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 1.0, 4.0),
        ground_layers,
    ));

    // Pillars to walk around
    for x in [-5.0, 5.0] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(1.0, 3.0, 1.0))),
            MeshMaterial3d(pillar_color.clone()),
            Transform::from_xyz(x, 1.5, 4.0),
            RigidBody::Static,
            Collider::cuboid(1.0, 3.0, 1.0),
            ground_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
