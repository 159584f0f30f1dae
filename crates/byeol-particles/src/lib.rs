//! Particle background for the byeol clock.
//!
//! A field of slow drifting dots is stepped and redrawn once per frame.
//! Drawing goes through the [`Surface`] trait; [`BrailleSurface`] is the
//! terminal implementation, which packs sub-cell dots into braille
//! characters.

mod color;
mod field;
mod particle;
mod surface;

pub use color::{RgbaColor, blend_over};
pub use field::{AREA_PER_PARTICLE, PARTICLE_COLOR, ParticleField, particle_count};
pub use particle::Particle;
pub use surface::{BrailleSurface, CELL_HEIGHT_PX, CELL_WIDTH_PX, Surface};
