use macroquad::prelude::*;
use crate::application::{Cursor, OrbitCamera, Simulation};
use crate::domain::{Coordinate, Lattice};

/// World-space edge length of one cell
pub const CELL_SIZE: f32 = 1.0;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// World position of a cell's center, with the lattice centered on the origin
fn cell_center(coordinate: Coordinate, grid_size: usize) -> Vec3 {
    let half = grid_size as f32 * CELL_SIZE / 2.0;
    vec3(
        coordinate.x as f32 + 0.5,
        coordinate.y as f32 + 0.5,
        coordinate.z as f32 + 0.5,
    ) * CELL_SIZE
        - Vec3::splat(half)
}

/// Shade by position so depth is readable without lighting
fn cell_color(coordinate: Coordinate, grid_size: usize) -> Color {
    let n = grid_size.max(1) as f32;
    Color::new(
        0.2 + 0.8 * coordinate.x as f32 / n,
        0.6 + 0.4 * coordinate.y as f32 / n,
        0.3 + 0.7 * coordinate.z as f32 / n,
        1.0,
    )
}

/// Point the 3D camera at the lattice center
pub fn apply_camera(camera: &OrbitCamera) {
    let (x, y, z) = camera.eye();
    set_camera(&Camera3D {
        position: vec3(x, y, z),
        target: Vec3::ZERO,
        up: Vec3::Y,
        ..Default::default()
    });
}

/// Draw live cells, the lattice bounds and the cursor cell
pub fn draw_lattice(lattice: &Lattice, cursor: &Cursor) {
    let n = lattice.size();
    let cube = Vec3::splat(CELL_SIZE * 0.9);

    for cell in lattice.iter_live() {
        draw_cube(cell_center(cell.coordinate, n), cube, None, cell_color(cell.coordinate, n));
    }

    let extent = n as f32 * CELL_SIZE;
    draw_cube_wires(Vec3::ZERO, Vec3::splat(extent), Color::from_rgba(80, 80, 80, 255));

    if !lattice.is_empty() {
        draw_cube_wires(cell_center(cursor.position(), n), Vec3::splat(CELL_SIZE), YELLOW);
    }
}

/// Draw the text overlay in screen space
pub fn draw_hud(state: &Simulation, cursor: &Cursor) {
    set_default_camera();

    let lattice = state.lattice();
    let cursor_pos = cursor.position();
    let cursor_state = match lattice.lookup(cursor_pos) {
        Some(cell) if cell.alive => "alive",
        Some(_) => "dead",
        None => "-",
    };

    let status_color = if state.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        (format!("Generation: {}", state.generation()), 24.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        (
            (if state.is_running() { "Running" } else { "Paused" }).to_string(),
            48.0,
            18.0,
            status_color,
        ),
        (
            format!(
                "Grid: {0}x{0}x{0}  Live: {1} / {2}",
                lattice.size(),
                format_number(lattice.live_count()),
                format_number(lattice.len())
            ),
            70.0,
            14.0,
            LIGHTGRAY,
        ),
        (format!("Speed: {:.0} gen/s", state.updates_per_second()), 88.0, 14.0, LIGHTGRAY),
        (
            format!("{} | Step: {:.1}ms | FPS: {}", state.algorithm().name(), state.last_step_time_ms(), get_fps()),
            106.0,
            14.0,
            GRAY,
        ),
        (state.algorithm().description().to_string(), 122.0, 12.0, GRAY),
        (
            format!("Cursor: ({}, {}, {}) {}", cursor_pos.x, cursor_pos.y, cursor_pos.z, cursor_state),
            140.0,
            14.0,
            YELLOW,
        ),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, 10.0, *y, *size, *color);
    });

    let controls = [
        "Space: Play/Pause  N: Step  R: Reset",
        "WASD/QE: Move cursor  Enter: Toggle cell",
        "Up/Down: Speed  P: Algorithm  H: Camera home",
        "RMB drag: Orbit  Wheel: Zoom",
    ];
    let base = screen_height() - 16.0 * controls.len() as f32;
    controls.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, 10.0, base + 16.0 * i as f32, 14.0, GRAY);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(8_000_000), "8.0M");
    }

    #[test]
    fn test_cell_center_is_symmetric() {
        let first = cell_center(Coordinate::new(0, 0, 0), 4);
        let last = cell_center(Coordinate::new(3, 3, 3), 4);
        assert_eq!(first, -last);
        assert_eq!(first, Vec3::splat(-1.5));
    }
}
