//! The particle field: a viewport-sized set of drifting dots.

use std::time::Instant;

use byeol_core::FrameSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::RgbaColor;
use crate::particle::Particle;
use crate::surface::Surface;

/// Square pixels of viewport per particle.
pub const AREA_PER_PARTICLE: f64 = 9000.0;

/// Fill used for every particle: translucent gold.
pub const PARTICLE_COLOR: RgbaColor = RgbaColor::new(255, 221, 0, 0.7);

/// Number of particles for a viewport of the given size.
pub fn particle_count(width: f32, height: f32) -> usize {
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    (width as f64 * height as f64 / AREA_PER_PARTICLE).floor() as usize
}

/// Owns every particle along with the viewport they live in.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    /// Empty field with an entropy-seeded generator. Call [`Self::init`]
    /// before the first frame.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty field with a reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current viewport size in pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Throw away every particle and spawn a fresh set sized for the
    /// viewport.
    pub fn init(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = particle_count(self.width, self.height);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::random(&mut self.rng, self.width, self.height);
            self.particles.push(particle);
        }
    }

    /// Reinitialize only when the viewport actually changed. Returns true
    /// when the particles were recreated.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.init(width, height);
        true
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(&mut self.rng, width, height);
        }
    }

    /// Clear `surface` and draw each particle as a filled circle.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, PARTICLE_COLOR);
        }
    }

    /// One animation frame: step, then render.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }

    /// Run a frame if `frames` has one due. Returns true when it did.
    pub fn drive<F, S>(&mut self, frames: &mut F, now: Instant, surface: &mut S) -> bool
    where
        F: FrameSource + ?Sized,
        S: Surface + ?Sized,
    {
        if !frames.take_frame(now) {
            return false;
        }
        self.on_frame(surface);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls instead of painting.
    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        circles: Vec<(f32, f32, f32)>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (0.0, 0.0)
        }

        fn clear(&mut self) {
            self.clears += 1;
            self.circles.clear();
        }

        fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: RgbaColor) {
            assert_eq!(color, PARTICLE_COLOR);
            self.circles.push((x, y, radius));
        }
    }

    /// Hands out a fixed number of frames.
    struct ManualFrames {
        remaining: usize,
        at: Instant,
    }

    impl FrameSource for ManualFrames {
        fn take_frame(&mut self, _now: Instant) -> bool {
            if self.remaining == 0 {
                return false;
            }
            self.remaining -= 1;
            true
        }

        fn next_frame(&self) -> Instant {
            self.at
        }
    }

    #[test]
    fn test_particle_count() {
        assert_eq!(particle_count(900.0, 900.0), 90);
        assert_eq!(particle_count(1600.0, 800.0), 142);
        assert_eq!(particle_count(94.0, 95.0), 0);
        assert_eq!(particle_count(0.0, 900.0), 0);
    }

    #[test]
    fn test_init_900_square() {
        let mut field = ParticleField::with_seed(42);
        field.init(900.0, 900.0);
        assert_eq!(field.len(), 90);
        for p in field.particles() {
            assert!((1.0..3.0).contains(&p.radius));
            assert!((0.0..900.0).contains(&p.x));
            assert!((0.0..900.0).contains(&p.y));
        }
    }

    #[test]
    fn test_init_replaces_particles() {
        let mut field = ParticleField::with_seed(3);
        field.init(900.0, 900.0);
        field.init(300.0, 300.0);
        assert_eq!(field.len(), 10);
        assert!(field.particles().iter().all(|p| p.is_inside(300.0, 300.0)));
    }

    #[test]
    fn test_particles_stay_inside_forever() {
        let mut field = ParticleField::with_seed(9);
        field.init(120.0, 150.0);
        let velocities: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.dx, p.dy)).collect();

        for _ in 0..5_000 {
            field.step();
            for p in field.particles() {
                assert!(p.is_inside(120.0, 150.0), "{p:?}");
            }
        }

        let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.dx, p.dy)).collect();
        assert_eq!(velocities, after);
    }

    #[test]
    fn test_empty_viewport() {
        let mut field = ParticleField::with_seed(0);
        field.init(0.0, 0.0);
        assert!(field.is_empty());
        field.step();

        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        assert_eq!(surface.clears, 1);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn test_resize_only_when_changed() {
        let mut field = ParticleField::with_seed(5);
        assert!(field.resize(900.0, 900.0));
        let before = field.particles().to_vec();
        assert!(!field.resize(900.0, 900.0));
        assert_eq!(field.particles(), before.as_slice());
        assert!(field.resize(450.0, 900.0));
        assert_eq!(field.len(), 45);
    }

    #[test]
    fn test_render_draws_every_particle() {
        let mut field = ParticleField::with_seed(11);
        field.init(300.0, 300.0);

        let mut surface = RecordingSurface::default();
        field.render(&mut surface);
        assert_eq!(surface.circles.len(), field.len());
        for (p, &(x, y, r)) in field.particles().iter().zip(&surface.circles) {
            assert_eq!((p.x, p.y, p.radius), (x, y, r));
        }
    }

    #[test]
    fn test_drive_runs_one_frame_per_due_frame() {
        let mut field = ParticleField::with_seed(13);
        field.init(300.0, 300.0);
        let start = field.particles().to_vec();

        let now = Instant::now();
        let mut frames = ManualFrames {
            remaining: 2,
            at: now,
        };
        let mut surface = RecordingSurface::default();

        assert!(field.drive(&mut frames, now, &mut surface));
        assert!(field.drive(&mut frames, now, &mut surface));
        assert!(!field.drive(&mut frames, now, &mut surface));
        assert_eq!(surface.clears, 2);
        assert_ne!(field.particles(), start.as_slice());
    }
}
