use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use voxel_life::{
    Algorithm, Cursor, OrbitCamera, Simulation, SimulationConfig,
    rendering, input::{self, DragState},
};

/// 3D Game of Life viewer
#[derive(Parser, Debug)]
#[command(name = "voxel_life", about = "Interactive 3D Game of Life (B5/S456)")]
struct Args {
    /// Edge length of the cubic lattice
    #[arg(long, allow_negative_numbers = true)]
    grid_size: Option<i32>,

    /// Chance that each cell starts alive
    #[arg(long)]
    live_probability: Option<f64>,

    /// Seed for a reproducible initial lattice
    #[arg(long)]
    seed: Option<u64>,

    /// Generations per second while running
    #[arg(long)]
    updates_per_second: Option<f32>,

    /// Compute generations on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

impl Args {
    /// Overlay command-line values on the defaults
    fn into_config(self) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            grid_size: self.grid_size.unwrap_or(defaults.grid_size),
            live_probability: self.live_probability.unwrap_or(defaults.live_probability),
            seed: self.seed,
            updates_per_second: self.updates_per_second.unwrap_or(defaults.updates_per_second),
            algorithm: if self.parallel { Algorithm::Parallel } else { defaults.algorithm },
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Voxel Life - 3D Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("voxel_life=info")),
        )
        .init();

    let config = match Args::parse().into_config().validate() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            std::process::exit(2);
        }
    };
    info!(?config, "starting viewer");

    let mut state = Simulation::new(&config);
    let mut camera = OrbitCamera::new(config.grid_size);
    let mut cursor = Cursor::centered(config.grid_size);
    let mut drag = DragState::default();

    loop {
        let mouse_pos = mouse_position();

        // Process input
        input::handle_zoom(&mut camera);
        input::handle_orbit(&mut camera, &mut drag, mouse_pos);
        input::handle_cursor(&mut cursor, state.grid_size());
        state = input::process_keyboard_input(state, &cursor, &mut camera);

        // Update simulation
        state = state.tick(get_frame_time());

        // Render
        clear_background(BLACK);
        rendering::apply_camera(&camera);
        rendering::draw_lattice(state.lattice(), &cursor);
        rendering::draw_hud(&state, &cursor);

        next_frame().await;
    }
}
