//! A single drifting particle.

use rand::Rng;

/// Radius range in pixels, half-open.
const RADIUS_MIN: f32 = 1.0;
const RADIUS_MAX: f32 = 3.0;

/// Largest speed along either axis, in pixels per frame.
const MAX_SPEED: f32 = 0.25;

/// Position and constant velocity of one dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
}

impl Particle {
    /// Spawn a particle somewhere inside a `width` x `height` viewport.
    /// Both dimensions must be positive.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            dx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            dy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            radius: rng.gen_range(RADIUS_MIN..RADIUS_MAX),
        }
    }

    pub fn is_inside(&self, width: f32, height: f32) -> bool {
        (0.0..width).contains(&self.x) && (0.0..height).contains(&self.y)
    }

    /// Move by one frame of velocity. If that leaves the viewport, jump to
    /// a fresh random point instead. Velocity is never reflected.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f32, height: f32) {
        self.x += self.dx;
        self.y += self.dy;
        if !self.is_inside(width, height) {
            self.x = rng.gen_range(0.0..width);
            self.y = rng.gen_range(0.0..height);
        }
    }
}
