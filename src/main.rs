// Viscous liquid demo: drag with the left mouse button to pour, right click
// for a splash. Audio is synthesized from time until a real extractor is wired
// in; B forces a beat, Space pauses, R resets.
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use viscous2d::{AudioFrame, FluidParams, FluidSet, FluidState, InputState, ViscousPlugin};

const DOMAIN: Vec2 = Vec2::new(800.0, 600.0);

fn sim_to_world(position: Vec2) -> Vec2 {
    Vec2::new(position.x - DOMAIN.x * 0.5, DOMAIN.y * 0.5 - position.y)
}

fn world_to_sim(position: Vec2) -> Vec2 {
    Vec2::new(position.x + DOMAIN.x * 0.5, DOMAIN.y * 0.5 - position.y)
}

fn init(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn feed_input(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mouse: Res<ButtonInput<MouseButton>>,
    state: Res<FluidState>,
    mut input: ResMut<InputState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        input.is_dragging = false;
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let pointer = world_to_sim(world_pos);
    input.pointer = pointer;
    input.is_dragging = mouse.pressed(MouseButton::Left);
    if mouse.just_pressed(MouseButton::Right) && !state.paused {
        input.click(pointer, state.sim_time());
    }
}

fn synthesize_audio(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut audio: ResMut<AudioFrame>,
    mut last_bar: Local<u32>,
) {
    let t = time.elapsed_secs();
    let bass = (0.5 + 0.5 * (t * 0.7).sin()).powi(2);
    let bar = (t * 2.0) as u32;
    let beat = keyboard.just_pressed(KeyCode::KeyB) || bar != *last_bar;
    *last_bar = bar;

    *audio = AudioFrame {
        rms: 0.3 + 0.2 * (t * 1.3).sin(),
        bass,
        mid: 0.4,
        treble: 0.2,
        centroid: 0.5 + 0.5 * (t * 0.23).sin(),
        beat,
    };
}

fn controls(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<FluidState>) {
    if keyboard.just_pressed(KeyCode::Space) {
        state.toggle_pause();
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        state.reset();
    }
}

fn draw_particles(state: Res<FluidState>, mut gizmos: Gizmos) {
    for particle in state.snapshot() {
        let color = Color::hsla(particle.hue, 0.8, 0.55, particle.alpha);
        gizmos.circle_2d(
            Isometry2d::from_translation(sim_to_world(particle.position)),
            particle.size,
            color,
        );
    }
}

#[derive(Component)]
struct DiagnosticsText;

fn setup_diagnostics(mut commands: Commands) {
    commands.spawn((
        Text::default(),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        DiagnosticsText,
    ));
}

fn update_diagnostics(
    diagnostics: Res<DiagnosticsStore>,
    state: Res<FluidState>,
    mut query: Query<&mut Text, With<DiagnosticsText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    let report = state.last_report();
    let constants = state.constants();

    for mut text in &mut query {
        text.0 = format!(
            "FPS: {:.1}{}\nParticles: {}/{}\nViscosity: {:.2}\nGravity: {:.0}\nNeighbors: {:.3} ms\nForces: {:.3} ms",
            fps,
            if state.paused { " (paused)" } else { "" },
            state.particle_count(),
            state.params().max_particles,
            constants.viscosity,
            constants.gravity,
            report.timings.neighbors_ms,
            report.timings.forces_ms,
        );
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "viscous2d".to_string(),
                resolution: bevy::window::WindowResolution::new(DOMAIN.x as u32, DOMAIN.y as u32),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(ViscousPlugin::with_params(
            FluidParams::honey().with_domain(DOMAIN.x, DOMAIN.y),
        ))
        .add_systems(Startup, (init, setup_diagnostics))
        .add_systems(
            Update,
            (controls, feed_input, synthesize_audio).before(FluidSet::Simulate),
        )
        .add_systems(
            Update,
            (draw_particles, update_diagnostics).after(FluidSet::Simulate),
        )
        .run();
}
