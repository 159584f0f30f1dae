//! The application loop: terminal events in, frames out.

use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::{FrameSource, SystemTimeSource, Ticker, next_wakeup};
use byeol_particles::{BrailleSurface, ParticleField};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{DefaultTerminal, Frame};

use crate::clock::ClockController;
use crate::ui::{self, Palette};

/// Longest the loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Particle field plus the surface it paints and the frame clock that
/// drives it.
#[derive(Debug)]
struct ParticleLayer {
    field: ParticleField,
    surface: BrailleSurface,
    frames: Ticker,
    paused: bool,
}

impl ParticleLayer {
    fn new(fps: u32, now: Instant) -> Self {
        Self {
            field: ParticleField::new(),
            surface: BrailleSurface::new(0, 0),
            frames: Ticker::per_second(fps, now),
            paused: false,
        }
    }

    /// Recreate every particle for a new terminal size and paint them, so a
    /// paused layer still shows the new set.
    fn resize(&mut self, cols: u16, rows: u16) {
        self.surface.resize(cols, rows);
        let (width, height) = BrailleSurface::pixel_size(cols, rows);
        self.field.init(width, height);
        self.field.render(&mut self.surface);
        info!(
            "event=particles_reset cols={cols} rows={rows} width={width} height={height} count={}",
            self.field.len()
        );
    }

    fn poll(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        self.field.drive(&mut self.frames, now, &mut self.surface)
    }

    fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused {
            self.frames.reset(now);
        }
        debug!("event=particles_paused paused={}", self.paused);
    }

    fn next_frame(&self) -> Option<Instant> {
        (!self.paused).then(|| self.frames.next_frame())
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    clock: ClockController<SystemTimeSource>,
    /// `None` when particles are disabled.
    particles: Option<ParticleLayer>,
}

impl App {
    /// Construct a new instance of [`App`] from validated config.
    pub fn new(config: &Config, now: Instant) -> color_eyre::Result<Self> {
        let prefs = config.preferences()?;
        let zones = config.timezone_choices()?;
        info!(
            "event=app_start format={:?} zone={} theme={:?} zones={}",
            prefs.time_format,
            prefs.timezone,
            prefs.theme,
            zones.len()
        );

        let particles = config
            .particles
            .enabled
            .then(|| ParticleLayer::new(config.particles.fps, now));

        Ok(Self {
            running: false,
            clock: ClockController::new(prefs, zones, SystemTimeSource, now),
            particles,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let timeout = self.poll_timeout(Instant::now());
            self.handle_crossterm_events(timeout)?;
            self.poll_timers(Instant::now());
        }
        info!("event=app_exit");
        Ok(())
    }

    /// Time until the next clock tick, marker expiry or particle frame.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let frame = self.particles.as_ref().and_then(ParticleLayer::next_frame);
        next_wakeup([Some(self.clock.next_deadline()), frame])
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL)
    }

    fn poll_timers(&mut self, now: Instant) {
        self.clock.poll(now);
        if let Some(layer) = &mut self.particles {
            layer.poll(now);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.clock.prefs().theme);
        if let Some(layer) = &mut self.particles {
            layer.surface.set_background(palette.background);
        }
        let particles = self
            .particles
            .as_ref()
            .map(|layer| (&layer.surface, layer.paused));
        ui::render(frame, self.clock.display(), particles);
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        if let Some(layer) = &mut self.particles {
            layer.resize(cols, rows);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so timers stay on schedule.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.clock.toggle_format(now),
            (_, KeyCode::Char('z')) => self.clock.next_timezone(now),
            (_, KeyCode::Char('Z')) => self.clock.previous_timezone(now),
            (_, KeyCode::Char('d')) => self.clock.toggle_theme(),
            (_, KeyCode::Char('p')) => {
                if let Some(layer) = &mut self.particles {
                    layer.toggle_pause(now);
                }
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
