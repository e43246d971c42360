use std::f32::consts::FRAC_PI_2;

/// Keep the eye off the poles so the up vector never degenerates
const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;

const HOME_YAW: f32 = 0.8;
const HOME_PITCH: f32 = 0.5;

/// OrbitCamera circles the lattice center at a fixed distance
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    home_distance: f32,
}

impl OrbitCamera {
    /// Camera framing a cube with the given edge length
    pub fn new(grid_size: i32) -> Self {
        let home_distance = (grid_size.max(1) as f32) * 2.0;
        Self {
            yaw: HOME_YAW,
            pitch: HOME_PITCH,
            distance: home_distance,
            home_distance,
        }
    }

    /// Rotate around the target
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move closer by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.distance = (self.distance / factor).clamp(self.min_distance(), self.max_distance());
    }

    /// Move away by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(self.min_distance(), self.max_distance());
    }

    fn min_distance(&self) -> f32 {
        self.home_distance * 0.25
    }

    fn max_distance(&self) -> f32 {
        self.home_distance * 4.0
    }

    /// Eye position relative to the lattice center
    pub fn eye(&self) -> (f32, f32, f32) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        (
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.yaw = HOME_YAW;
        self.pitch = HOME_PITCH;
        self.distance = self.home_distance;
    }
}
