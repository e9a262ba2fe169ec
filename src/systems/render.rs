//! Scene rendering using Raylib's 3D mode.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::heading::Heading;
use crate::components::modelslot::ModelSlot;
use crate::components::worldposition::WorldPosition;
use crate::resources::modelstore::ModelStore;
use crate::resources::scenecamera::SceneCamera;

/// Deep teal clear color.
const BACKGROUND: Color = Color {
    r: 0,
    g: 34,
    b: 34,
    a: 255,
};

const FLOOR_COLOR: Color = Color {
    r: 0,
    g: 136,
    b: 0,
    a: 255,
};

const FLOOR_SIZE: f32 = 50.0;
const FLOOR_THICKNESS: f32 = 1.0;

/// Draw the ground slab and every entity whose model is loaded.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    store: NonSend<ModelStore>,
    camera: Res<SceneCamera>,
    query: Query<(&WorldPosition, Option<&Heading>, &ModelSlot)>,
) {
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(BACKGROUND);

    {
        let mut d3 = d.begin_mode3D(camera.0);

        // Ground slab with its top face at y = 0.
        d3.draw_cube(
            Vector3::new(0.0, -FLOOR_THICKNESS * 0.5, 0.0),
            FLOOR_SIZE,
            FLOOR_THICKNESS,
            FLOOR_SIZE,
            FLOOR_COLOR,
        );

        for (position, heading, slot) in query.iter() {
            if let ModelSlot::Ready { key } = slot {
                if let Some(model) = store.get(key) {
                    let yaw_degrees = heading.map(|h| h.yaw.to_degrees()).unwrap_or(0.0);
                    d3.draw_model_ex(
                        model,
                        position.pos,
                        Vector3::new(0.0, 1.0, 0.0),
                        yaw_degrees,
                        Vector3::new(1.0, 1.0, 1.0),
                        Color::WHITE,
                    );
                }
            }
        }
    }

    d.draw_fps(10, 10);
}
