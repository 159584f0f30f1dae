//! Color compositing for translucent particles.

use ratatui::style::Color;

/// An sRGB color with straight alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Composite `fg` over an opaque `background`.
///
/// Terminals have no alpha channel, so translucency is resolved against
/// the theme background before painting.
pub fn blend_over(fg: RgbaColor, background: (u8, u8, u8)) -> Color {
    let a = fg.a.clamp(0.0, 1.0);
    let (br, bg, bb) = background;
    Color::Rgb(mix(fg.r, br, a), mix(fg.g, bg, a), mix(fg.b, bb, a))
}

fn mix(top: u8, bottom: u8, alpha: f32) -> u8 {
    (top as f32 * alpha + bottom as f32 * (1.0 - alpha)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_and_transparent() {
        let gold = RgbaColor::new(255, 221, 0, 1.0);
        assert_eq!(blend_over(gold, (0, 0, 0)), Color::Rgb(255, 221, 0));

        let clear = RgbaColor::new(255, 221, 0, 0.0);
        assert_eq!(blend_over(clear, (10, 20, 30)), Color::Rgb(10, 20, 30));
    }

    #[test]
    fn test_partial_alpha() {
        let half = RgbaColor::new(200, 100, 0, 0.5);
        assert_eq!(blend_over(half, (0, 0, 0)), Color::Rgb(100, 50, 0));
        assert_eq!(blend_over(half, (100, 100, 100)), Color::Rgb(150, 100, 50));

        let quarter = RgbaColor::new(200, 100, 0, 0.25);
        assert_eq!(blend_over(quarter, (0, 0, 200)), Color::Rgb(50, 25, 150));
    }
}
