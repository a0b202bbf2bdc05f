// Copyright (c) 2026 rezky_nightky

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::caption::{CaptionTypewriter, Phase};
use crate::config::Settings;
use crate::field::{FieldConfig, ParticleField};
use crate::frame::Frame;
use crate::palette::{build_palette, Palette};
use crate::terminal::Terminal;
use crate::viewport::TerminalCanvas;

/// The animation wired to a terminal-sized canvas. Holds no terminal handle,
/// so it can be driven headless.
pub struct App {
    palette: Palette,
    field: ParticleField,
    caption: CaptionTypewriter,
    canvas: TerminalCanvas,
    screensaver: bool,
    paused_at: Option<Instant>,
    pub running: bool,
}

impl App {
    pub fn new(settings: &Settings, cols: u16, rows: u16) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let palette = build_palette(settings.color);
        let canvas = TerminalCanvas::new(cols, rows, settings.color_mode, palette.background);
        let field = ParticleField::new(
            canvas.viewport().surface(),
            FieldConfig {
                points: settings.points,
                glyph_color: palette.glyph,
                background: palette.background,
            },
            StdRng::from_rng(&mut rng),
        );
        let caption = CaptionTypewriter::new(&settings.caption, StdRng::from_rng(&mut rng));

        Self {
            palette,
            field,
            caption,
            canvas,
            screensaver: settings.screensaver,
            paused_at: None,
            running: true,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn caption(&self) -> &CaptionTypewriter {
        &self.caption
    }

    pub fn frame(&self) -> &Frame {
        self.canvas.frame()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
        self.field.resize(self.canvas.viewport().surface());
        debug!("terminal resized to {}x{}", cols, rows);
    }

    pub fn restart(&mut self) {
        self.field.restart();
        self.caption.reset();
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.paused_at.take() {
            Some(since) => {
                self.caption.shift(now.saturating_duration_since(since));
                info!("resumed");
            }
            None => {
                self.paused_at = Some(now);
                info!("paused");
            }
        }
    }

    /// Renders one animation frame. Returns false while paused.
    pub fn render(&mut self, now: Instant) -> bool {
        if self.paused_at.is_some() {
            return false;
        }

        let progress = self.field.tick(&mut self.canvas);
        if progress.caption_ready() && self.caption.phase() == Phase::Idle {
            self.caption.trigger(now);
        }
        self.caption.poll(now);
        if self.caption.is_visible() {
            self.canvas
                .draw_caption(self.caption.display(), self.palette.caption);
        }
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.screensaver {
            self.running = false;
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => self.running = false,
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => self.running = false,
            (KeyCode::Char(' '), _) => self.restart(),
            (KeyCode::Char('p'), _) => self.toggle_pause(now),
            _ => {}
        }
    }
}

/// Drives `app` on the real terminal until quit or `settings.duration` runs out.
pub fn run(settings: &Settings) -> anyhow::Result<()> {
    let mut term = Terminal::new().context("failed to set up terminal")?;
    let (w, h) = term.size()?;
    let mut app = App::new(settings, w, h);
    info!(
        "starting: {}x{} cells, {} points, {} fps, {}",
        w,
        h,
        settings.points,
        settings.fps,
        settings.color_mode.label()
    );

    let start_time = Instant::now();
    let end_time = settings
        .duration
        .map(|s| start_time + Duration::from_secs_f64(s));

    let target_period = Duration::from_secs_f64(1.0 / settings.fps);
    let mut next_frame = Instant::now();
    let mut frames: u64 = 0;
    let mut overshoot_frames: u64 = 0;

    while app.running {
        if end_time.is_some_and(|end| Instant::now() >= end) {
            break;
        }
        let mut pending_resize: Option<(u16, u16)> = None;

        loop {
            while Terminal::poll_event(Duration::from_millis(0))? {
                match Terminal::read_event()? {
                    Event::Resize(nw, nh) => pending_resize = Some((nw, nh)),
                    Event::Key(k) => app.handle_key(k, Instant::now()),
                    _ => {}
                }
                if !app.running {
                    break;
                }
            }

            if !app.running || pending_resize.is_some() {
                break;
            }

            let now = Instant::now();
            if now >= next_frame {
                break;
            }

            let mut timeout = next_frame - now;
            if let Some(end) = end_time {
                if now >= end {
                    break;
                }
                timeout = timeout.min(end - now);
            }
            let _ = Terminal::poll_event(timeout)?;
        }

        if !app.running {
            break;
        }

        if let Some((nw, nh)) = pending_resize {
            app.resize(nw, nh);
        }

        let work_start = Instant::now();
        if app.render(work_start) {
            term.draw(app.frame())?;
        }
        frames += 1;
        if work_start.elapsed() > target_period {
            overshoot_frames += 1;
        }

        next_frame += target_period;
        let now = Instant::now();
        if now > next_frame {
            next_frame = now;
        }
    }

    debug!(
        "stopped after {:.3}s: {} frames, {} over budget",
        start_time.elapsed().as_secs_f64(),
        frames,
        overshoot_frames
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{ColorMode, ColorScheme};

    fn settings() -> Settings {
        Settings {
            fps: 60.0,
            duration: None,
            points: 200,
            caption: "ok".to_string(),
            color: ColorScheme::Red,
            color_mode: ColorMode::TrueColor,
            seed: Some(42),
            screensaver: false,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn caption_starts_once_heart_is_mostly_built() {
        let t0 = Instant::now();
        let mut app = App::new(&settings(), 80, 24);
        let mut i = 0u64;
        while app.caption().phase() == Phase::Idle {
            app.render(t0 + Duration::from_millis(16 * i));
            i += 1;
            assert!(i < 2000, "caption never triggered");
        }
        assert!(app.field().progress().caption_ready());
        assert_eq!(app.field().assigned_points(), 181);

        for _ in 0..100 {
            app.render(t0 + Duration::from_millis(16 * i));
            i += 1;
        }
        assert_eq!(app.caption().phase(), Phase::Done);
        let row: String = app.frame().row(23).iter().map(|c| c.ch).collect();
        assert_eq!(row.trim(), "ok");
    }

    #[test]
    fn pause_freezes_animation_clock() {
        let t0 = Instant::now();
        let mut app = App::new(&settings(), 80, 24);
        app.render(t0);
        let before = app.field().clock().elapsed();

        app.handle_key(press(KeyCode::Char('p')), t0);
        assert!(app.is_paused());
        assert!(!app.render(t0 + Duration::from_millis(16)));
        assert_eq!(app.field().clock().elapsed(), before);

        app.handle_key(press(KeyCode::Char('p')), t0 + Duration::from_millis(500));
        assert!(app.render(t0 + Duration::from_millis(516)));
        assert!(app.field().clock().elapsed() > before);
    }

    #[test]
    fn keys_quit_and_restart() {
        let t0 = Instant::now();
        let mut app = App::new(&settings(), 80, 24);
        for i in 0..100 {
            app.render(t0 + Duration::from_millis(16 * i));
        }
        assert!(app.field().assigned_points() > 0);
        app.handle_key(press(KeyCode::Char(' ')), t0);
        assert_eq!(app.field().assigned_points(), 0);
        assert!(app.running);

        app.handle_key(press(KeyCode::Char('q')), t0);
        assert!(!app.running);
    }

    #[test]
    fn screensaver_quits_on_any_key() {
        let mut s = settings();
        s.screensaver = true;
        let mut app = App::new(&s, 80, 24);
        app.handle_key(press(KeyCode::Char('x')), Instant::now());
        assert!(!app.running);
    }

    #[test]
    fn resize_refits_field_surface() {
        let mut app = App::new(&settings(), 80, 24);
        assert_eq!(app.field().surface().width, 352.0);
        app.resize(200, 60);
        assert_eq!(app.frame().width, 200);
        assert_eq!(app.field().surface().width, 928.0);
    }
}
