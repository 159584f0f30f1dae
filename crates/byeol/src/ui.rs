//! Drawing the clock face, footer and particle layer.

use byeol_core::Theme;
use byeol_fonts::{GLYPH_HEIGHT, is_renderable, render_text, text_width};
use byeol_particles::BrailleSurface;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::clock::{ClockDisplay, DisplayField};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub foreground: Color,
    /// Fields that just changed.
    pub highlight: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: (244, 243, 238),
                foreground: Color::Rgb(40, 40, 52),
                highlight: Color::Rgb(196, 120, 0),
                muted: Color::Rgb(130, 130, 140),
            },
            Theme::Dark => Palette {
                background: (16, 17, 24),
                foreground: Color::Rgb(228, 228, 236),
                highlight: Color::Rgb(255, 221, 0),
                muted: Color::Rgb(110, 110, 125),
            },
        }
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::Rgb(r, g, b)
    }
}

/// Spacing between the hours, minutes and seconds groups.
const GROUP_GAP: &str = "  ";

fn field_style(field: &DisplayField, palette: &Palette) -> Style {
    if field.updated {
        Style::new().fg(palette.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(palette.foreground)
    }
}

/// Width of the block-art clock for the given display.
fn clock_width(display: &ClockDisplay) -> usize {
    let digits = text_width(&display.hours.text)
        + text_width(&display.minutes.text)
        + text_width(&display.seconds.text);
    let colons = 2 * (text_width(":") + 2 * GROUP_GAP.len());
    let meridiem = if display.meridiem.is_empty() {
        0
    } else {
        GROUP_GAP.len() + text_width(display.meridiem)
    };
    digits + colons + meridiem
}

/// Whether the block-art clock can draw every field within `width` columns.
fn block_clock_fits(display: &ClockDisplay, width: u16) -> bool {
    let texts = [
        display.hours.text.as_str(),
        display.minutes.text.as_str(),
        display.seconds.text.as_str(),
        display.meridiem,
    ];
    texts.iter().all(|text| is_renderable(text)) && clock_width(display) <= width as usize
}

/// Rows of block art, one styled span per field.
fn clock_lines(display: &ClockDisplay, palette: &Palette) -> Vec<Line<'static>> {
    let hours = render_text(&display.hours.text);
    let minutes = render_text(&display.minutes.text);
    let seconds = render_text(&display.seconds.text);
    let colon = render_text(":");
    let meridiem = render_text(display.meridiem);

    let plain = Style::new().fg(palette.foreground);
    let styles = [
        field_style(&display.hours, palette),
        field_style(&display.minutes, palette),
        field_style(&display.seconds, palette),
    ];

    (0..GLYPH_HEIGHT)
        .map(|row| {
            let mut spans = vec![
                Span::styled(hours[row].clone(), styles[0]),
                Span::raw(GROUP_GAP),
                Span::styled(colon[row].clone(), plain),
                Span::raw(GROUP_GAP),
                Span::styled(minutes[row].clone(), styles[1]),
                Span::raw(GROUP_GAP),
                Span::styled(colon[row].clone(), plain),
                Span::raw(GROUP_GAP),
                Span::styled(seconds[row].clone(), styles[2]),
            ];
            if !display.meridiem.is_empty() {
                spans.push(Span::raw(GROUP_GAP));
                spans.push(Span::styled(meridiem[row].clone(), plain));
            }
            Line::from(spans)
        })
        .collect()
}

/// Single-line fallback for terminals too narrow for block digits.
fn compact_line(display: &ClockDisplay, palette: &Palette) -> Line<'static> {
    let plain = Style::new().fg(palette.foreground);
    let field = |f: &DisplayField| Span::styled(f.text.clone(), field_style(f, palette));

    let mut spans = vec![
        field(&display.hours),
        Span::styled(":", plain),
        field(&display.minutes),
        Span::styled(":", plain),
        field(&display.seconds),
    ];
    if !display.meridiem.is_empty() {
        spans.push(Span::styled(format!(" {}", display.meridiem), plain));
    }
    Line::from(spans)
}

fn help_line(
    display: &ClockDisplay,
    palette: &Palette,
    particles_paused: Option<bool>,
) -> Line<'static> {
    let key = |k: &'static str| k.bold().fg(palette.foreground);
    let text = |t: String| Span::styled(t, Style::new().fg(palette.muted));

    let mut spans = vec![
        key("q"),
        text(" quit  ".into()),
        key("t"),
        text(format!(" {}  ", display.format_label)),
        key("z/Z"),
        text(" timezone  ".into()),
        key("d"),
        text(format!(" {}", display.theme_label)),
    ];
    if let Some(paused) = particles_paused {
        spans.push(text("  ".into()));
        spans.push(key("p"));
        spans.push(text(if paused { " resume" } else { " pause" }.to_string()));
    }
    Line::from(spans).centered()
}

/// Draw the whole screen.
///
/// `particles` is the layer to show behind the clock along with whether it
/// is paused; `None` when particles are disabled.
pub fn render(
    frame: &mut Frame,
    display: &ClockDisplay,
    particles: Option<(&BrailleSurface, bool)>,
) {
    let theme = if display.dark { Theme::Dark } else { Theme::Light };
    let palette = Palette::for_theme(theme);
    let area = frame.area();

    frame.render_widget(
        Block::new().style(Style::new().bg(palette.background_color())),
        area,
    );
    if let Some((surface, _)) = particles {
        frame.render_widget(surface, area);
    }

    let fits = block_clock_fits(display, area.width);
    let clock_height = if fits { GLYPH_HEIGHT as u16 } else { 1 };

    let chunks = Layout::vertical([
        Constraint::Fill(1),              // Top padding
        Constraint::Length(clock_height), // Clock
        Constraint::Length(1),            // Spacing
        Constraint::Length(1),            // Timezone
        Constraint::Fill(1),              // Bottom padding
        Constraint::Length(1),            // Help text
    ])
    .split(area);

    let clock = if fits {
        Paragraph::new(clock_lines(display, &palette))
    } else {
        Paragraph::new(compact_line(display, &palette))
    };
    frame.render_widget(clock.alignment(Alignment::Center), chunks[1]);

    let zone = Paragraph::new(display.zone_label)
        .style(Style::new().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(zone, chunks[3]);

    let paused = particles.map(|(_, paused)| paused);
    frame.render_widget(help_line(display, &palette, paused), chunks[5]);
}
