use macroquad::prelude::*;
use crate::application::{Cursor, OrbitCamera, Simulation};

/// Radians of orbit per pixel of mouse drag
const ORBIT_SENSITIVITY: f32 = 0.01;

/// Last mouse position while an orbit drag is in progress
#[derive(Default)]
pub struct DragState {
    last: Option<(f32, f32)>,
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut OrbitCamera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle orbit with right mouse button drag
pub fn handle_orbit(camera: &mut OrbitCamera, drag: &mut DragState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Right) {
        drag.last = None;
        return;
    }

    if let Some(last) = drag.last {
        let dx = mouse_pos.0 - last.0;
        let dy = mouse_pos.1 - last.1;
        camera.orbit(-dx * ORBIT_SENSITIVITY, dy * ORBIT_SENSITIVITY);
    }
    drag.last = Some(mouse_pos);
}

/// Move the toggle cursor one cell per key press
pub fn handle_cursor(cursor: &mut Cursor, grid_size: i32) {
    let moves: [(KeyCode, (i32, i32, i32)); 6] = [
        (KeyCode::A, (-1, 0, 0)),
        (KeyCode::D, (1, 0, 0)),
        (KeyCode::Q, (0, -1, 0)),
        (KeyCode::E, (0, 1, 0)),
        (KeyCode::W, (0, 0, -1)),
        (KeyCode::S, (0, 0, 1)),
    ];

    moves
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, (dx, dy, dz))| cursor.step(*dx, *dy, *dz, grid_size));
}

/// Process keyboard input functionally
pub fn process_keyboard_input(
    state: Simulation,
    cursor: &Cursor,
    camera: &mut OrbitCamera,
) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::R, Simulation::reset),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Single step only while paused, otherwise the timer owns stepping
    if is_key_pressed(KeyCode::N) && !new_state.is_running() {
        new_state.advance();
    }

    if is_key_pressed(KeyCode::Enter) {
        new_state.toggle(cursor.position());
    }

    if is_key_pressed(KeyCode::P) {
        let next = new_state.algorithm().next();
        new_state.set_algorithm(next);
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}
