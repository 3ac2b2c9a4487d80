//! Camera animation for the companion scene.
//!
//! The scene is a glowing sphere inside a starfield. "Enter call" first eases
//! the camera back to its home position, then zooms in while the background
//! warms from navy to purple, and finally swaps the sphere for a smaller
//! pulsing "neutron star".

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

pub const TERMS_ACCEPTED_KEY: &str = "companionTermsAccepted";
pub const LIGHT_SENSITIVITY_KEY: &str = "companionLightSensitivity";

pub const ZOOMED_OUT: Vec3 = Vec3::new(0.0, 0.0, 3.5);
pub const ZOOMED_IN: Vec3 = Vec3::new(0.0, 0.0, 1.5);
pub const ORIGIN: Vec3 = Vec3::new(0.0, 0.0, 0.0);

const RESET_SPEED: f64 = 2.0;
const RESET_EPSILON: f64 = 0.01;
const ZOOM_SNAP_DISTANCE: f64 = 0.05;
const MIN_ZOOM_SPEED: f64 = 0.5;
const MAX_ZOOM_SPEED: f64 = 2.5;
const INITIAL_FOV: f64 = 65.0;
const ZOOMED_IN_FOV: f64 = 55.0;
const ORBIT_RADIANS_PER_PX: f64 = 0.005;

pub const INITIAL_BACKGROUND: Rgb = Rgb(0x1a, 0x1a, 0x2e);
pub const ZOOMED_IN_BACKGROUND: Rgb = Rgb(0x4a, 0x0e, 0x6b);

pub const INITIAL_SPHERE_RADIUS: f64 = 1.0;
pub const NEUTRON_STAR_RADIUS: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }

    pub fn dot(self, o: Vec3) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(self, o: Vec3) -> Vec3 {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }

    pub fn distance(self, o: Vec3) -> f64 {
        self.sub(o).length()
    }

    /// Move towards `to` by fraction `t`, clamped so a long frame never overshoots
    pub fn lerp(self, to: Vec3, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3::new(
            self.x + (to.x - self.x) * t,
            self.y + (to.y - self.y) * t,
            self.z + (to.z - self.z) * t,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanionPhase {
    #[default]
    Idle,
    ResettingCamera,
    ZoomingIn,
    NeutronStarVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    #[default]
    Listening,
    Interruptible,
}

impl AgentState {
    pub fn button_label(&self) -> &'static str {
        match self {
            AgentState::Listening => "Listening",
            AgentState::Interruptible => "Talk to interrupt",
        }
    }
}

/// Screen-space projection of a scene point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Normalised device coordinates, roughly -1..1 at the viewport edges
    pub x: f64,
    pub y: f64,
    /// Perspective scale for sizes at this depth
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanionScene {
    pub phase: CompanionPhase,
    pub camera: Vec3,
    pub target: Vec3,
    pub fov: f64,
    pub background: Rgb,
    pub muted: bool,
    pub agent: AgentState,
}

impl Default for CompanionScene {
    fn default() -> Self {
        Self {
            phase: CompanionPhase::Idle,
            camera: ZOOMED_OUT,
            target: ORIGIN,
            fov: INITIAL_FOV,
            background: INITIAL_BACKGROUND,
            muted: false,
            agent: AgentState::Listening,
        }
    }
}

impl CompanionScene {
    pub fn enter_call(&mut self) {
        if self.phase == CompanionPhase::Idle {
            tracing::debug!("Starting camera reset sequence");
            self.phase = CompanionPhase::ResettingCamera;
        }
    }

    /// Advance the animation by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        match self.phase {
            CompanionPhase::Idle => {}
            CompanionPhase::ResettingCamera => {
                self.camera = self.camera.lerp(ZOOMED_OUT, dt * RESET_SPEED);
                self.target = self.target.lerp(ORIGIN, dt * RESET_SPEED);

                if self.camera.distance(ZOOMED_OUT) < RESET_EPSILON
                    && self.target.distance(ORIGIN) < RESET_EPSILON
                {
                    self.camera = ZOOMED_OUT;
                    self.target = ORIGIN;
                    self.phase = CompanionPhase::ZoomingIn;
                }
            }
            CompanionPhase::ZoomingIn => {
                let progress = self.zoom_progress();
                let speed = lerp(MIN_ZOOM_SPEED, MAX_ZOOM_SPEED, progress);
                let remaining = self.camera.distance(ZOOMED_IN);

                self.camera = self.camera.lerp(ZOOMED_IN, dt * speed);
                self.background = INITIAL_BACKGROUND.lerp(ZOOMED_IN_BACKGROUND, progress);
                self.fov = lerp(INITIAL_FOV, ZOOMED_IN_FOV, progress);

                if remaining < ZOOM_SNAP_DISTANCE {
                    self.camera = ZOOMED_IN;
                    self.background = ZOOMED_IN_BACKGROUND;
                    self.fov = ZOOMED_IN_FOV;
                    self.target = ORIGIN;
                    self.phase = CompanionPhase::NeutronStarVisible;
                }
            }
            CompanionPhase::NeutronStarVisible => {
                if self.target.distance(ORIGIN) > RESET_EPSILON {
                    self.target = ORIGIN;
                }
            }
        }
    }

    /// 0 at the home position, 1 at the zoomed-in position
    pub fn zoom_progress(&self) -> f64 {
        let total = ZOOMED_OUT.distance(ZOOMED_IN);
        if total <= 0.001 {
            return 1.0;
        }
        (1.0 - self.camera.distance(ZOOMED_IN) / total).clamp(0.0, 1.0)
    }

    /// Orbit the camera around the target by a pointer drag, only while idle
    pub fn orbit(&mut self, dx_px: f64, dy_px: f64) {
        if !self.controls_enabled() {
            return;
        }
        let offset = self.camera.sub(self.target);
        let radius = offset.length();
        if radius == 0.0 {
            return;
        }
        let azimuth = offset.x.atan2(offset.z) - dx_px * ORBIT_RADIANS_PER_PX;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - dy_px * ORBIT_RADIANS_PER_PX)
            .clamp(0.1, PI - 0.1);
        self.camera = Vec3::new(
            self.target.x + radius * polar.sin() * azimuth.sin(),
            self.target.y + radius * polar.cos(),
            self.target.z + radius * polar.sin() * azimuth.cos(),
        );
    }

    pub fn controls_enabled(&self) -> bool {
        self.phase == CompanionPhase::Idle
    }

    pub fn shows_initial_sphere(&self) -> bool {
        self.phase != CompanionPhase::NeutronStarVisible
    }

    pub fn shows_neutron_star(&self) -> bool {
        self.phase == CompanionPhase::NeutronStarVisible
    }

    pub fn background_hex(&self) -> String {
        self.background.to_hex()
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_agent_state(&mut self) {
        self.agent = match self.agent {
            AgentState::Listening => AgentState::Interruptible,
            AgentState::Interruptible => AgentState::Listening,
        };
    }

    /// Perspective-project a world point for the current camera
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let forward = self.target.sub(self.camera).normalize();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward);

        let rel = point.sub(self.camera);
        let depth = rel.dot(forward);
        if depth <= 0.05 {
            return None;
        }
        let focal = 1.0 / (self.fov.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: rel.dot(right) * scale,
            y: rel.dot(up) * scale,
            scale,
        })
    }

    /// On-screen radius of the visible sphere in normalised units
    pub fn sphere_screen_radius(&self) -> f64 {
        let radius = if self.shows_neutron_star() {
            NEUTRON_STAR_RADIUS
        } else {
            INITIAL_SPHERE_RADIUS
        };
        self.project(self.target).map(|p| p.scale * radius).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub twinkle: f64,
}

impl Star {
    /// Brightness at time `t` seconds, in 0.2..=1.0
    pub fn brightness(&self, t: f64) -> f64 {
        let b = 0.5 + 0.5 * (t * self.twinkle + self.twinkle * PI).sin();
        b.clamp(0.2, 1.0)
    }
}

pub const STAR_COUNT: usize = 6000;
const STAR_INNER_RADIUS: f64 = 1.2;
const STAR_OUTER_RADIUS: f64 = 10.0;

/// Stars spread over a spherical shell around the origin
pub fn generate_starfield(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta = 2.0 * PI * rng.r#gen::<f64>();
            let phi = (2.0 * rng.r#gen::<f64>() - 1.0).acos();
            let r = rng.gen_range(STAR_INNER_RADIUS..STAR_OUTER_RADIUS);
            Star {
                position: Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                ),
                twinkle: rng.gen_range(0.3..1.5),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(scene: &mut CompanionScene) -> usize {
        let mut frames = 0;
        while scene.phase != CompanionPhase::NeutronStarVisible && frames < 10_000 {
            scene.tick(1.0 / 60.0);
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_enter_call_only_from_idle() {
        let mut scene = CompanionScene::default();
        scene.enter_call();
        assert_eq!(scene.phase, CompanionPhase::ResettingCamera);
        assert!(!scene.controls_enabled());
        scene.phase = CompanionPhase::NeutronStarVisible;
        scene.enter_call();
        assert_eq!(scene.phase, CompanionPhase::NeutronStarVisible);
    }

    #[test]
    fn test_full_sequence_reaches_neutron_star() {
        let mut scene = CompanionScene::default();
        scene.orbit(200.0, 50.0);
        assert!(scene.camera.distance(ZOOMED_OUT) > 0.1);

        scene.enter_call();
        let frames = run_until_settled(&mut scene);
        assert!(frames < 10_000);
        assert_eq!(scene.camera, ZOOMED_IN);
        assert_eq!(scene.fov, ZOOMED_IN_FOV);
        assert_eq!(scene.background, ZOOMED_IN_BACKGROUND);
        assert!(scene.shows_neutron_star());
        assert!(!scene.shows_initial_sphere());
    }

    #[test]
    fn test_reset_snaps_home_before_zoom() {
        let mut scene = CompanionScene::default();
        scene.camera = Vec3::new(1.0, 1.0, 3.0);
        scene.enter_call();
        while scene.phase == CompanionPhase::ResettingCamera {
            scene.tick(1.0 / 60.0);
        }
        assert_eq!(scene.phase, CompanionPhase::ZoomingIn);
        assert_eq!(scene.camera, ZOOMED_OUT);
        assert_eq!(scene.target, ORIGIN);
    }

    #[test]
    fn test_zoom_interpolates_fov_and_background() {
        let mut scene = CompanionScene {
            phase: CompanionPhase::ZoomingIn,
            camera: Vec3::new(0.0, 0.0, 2.5),
            ..Default::default()
        };
        assert!((scene.zoom_progress() - 0.5).abs() < 1e-9);
        scene.tick(0.0);
        assert!((scene.fov - 60.0).abs() < 1e-9);
        assert_eq!(scene.background, Rgb(0x32, 0x14, 0x4d));
    }

    #[test]
    fn test_orbit_ignored_while_animating() {
        let mut scene = CompanionScene {
            phase: CompanionPhase::ZoomingIn,
            ..Default::default()
        };
        scene.orbit(100.0, 100.0);
        assert_eq!(scene.camera, ZOOMED_OUT);
    }

    #[test]
    fn test_orbit_keeps_radius() {
        let mut scene = CompanionScene::default();
        scene.orbit(-150.0, 30.0);
        assert!((scene.camera.distance(ORIGIN) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_toggles() {
        let mut scene = CompanionScene::default();
        scene.toggle_mute();
        scene.toggle_agent_state();
        assert!(scene.muted);
        assert_eq!(scene.agent.button_label(), "Talk to interrupt");
        scene.toggle_agent_state();
        assert_eq!(scene.agent, AgentState::Listening);
    }

    #[test]
    fn test_projection_centres_target() {
        let scene = CompanionScene::default();
        let p = scene.project(ORIGIN).unwrap();
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        assert!(scene.project(Vec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn test_sphere_grows_when_zoomed_in() {
        let far = CompanionScene::default();
        let near = CompanionScene {
            camera: Vec3::new(0.0, 0.0, 2.0),
            ..Default::default()
        };
        assert!(near.sphere_screen_radius() > far.sphere_screen_radius());
    }

    #[test]
    fn test_starfield_shell_and_twinkle_range() {
        let stars = generate_starfield(STAR_COUNT, 7);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            let r = star.position.length();
            assert!((STAR_INNER_RADIUS - 1e-9..STAR_OUTER_RADIUS + 1e-9).contains(&r));
            assert!((0.3..1.5).contains(&star.twinkle));
            for t in [0.0, 1.3, 42.0] {
                let b = star.brightness(t);
                assert!((0.2..=1.0).contains(&b));
            }
        }
        assert_eq!(generate_starfield(10, 7), generate_starfield(10, 7));
    }
}
