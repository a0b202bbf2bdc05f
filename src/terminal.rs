// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::cell::Cell;
use crate::frame::Frame;

/// Raw-mode alternate screen that only rewrites cells that changed since the
/// previous frame.
pub struct Terminal {
    stdout: Stdout,
    last: Option<Frame>,
    run_buf: String,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()
        })();
        if let Err(e) = init_res {
            restore(&mut out);
            return Err(e);
        }
        Ok(Self {
            stdout: out,
            last: None,
            run_buf: String::with_capacity(64),
        })
    }

    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll_event(timeout: Duration) -> Result<bool> {
        event::poll(timeout)
    }

    pub fn read_event() -> Result<event::Event> {
        event::read()
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let full = self
            .last
            .as_ref()
            .map_or(true, |l| l.width != frame.width || l.height != frame.height);

        self.stdout.queue(terminal::BeginSynchronizedUpdate)?;
        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut pen = Pen::default();
        for y in 0..frame.height {
            let row = frame.row(y);
            let prev = if full {
                None
            } else {
                self.last.as_ref().map(|l| l.row(y))
            };

            let mut x = 0usize;
            while x < row.len() {
                if prev.is_some_and(|p| p.get(x) == Some(&row[x])) {
                    x += 1;
                    continue;
                }

                let head = row[x];
                self.run_buf.clear();
                self.run_buf.push(head.ch);
                let mut end = x + 1;
                while end < row.len()
                    && row[end].same_style(&head)
                    && !prev.is_some_and(|p| p.get(end) == Some(&row[end]))
                {
                    self.run_buf.push(row[end].ch);
                    end += 1;
                }

                self.stdout.queue(cursor::MoveTo(x as u16, y))?;
                pen.apply(&mut self.stdout, &head)?;
                self.stdout.queue(Print(self.run_buf.as_str()))?;
                x = end;
            }
        }

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EndSynchronizedUpdate)?;
        self.stdout.flush()?;

        match self.last.as_mut() {
            Some(last) if !full => last.clone_from(frame),
            _ => self.last = Some(frame.clone()),
        }
        Ok(())
    }
}

/// Tracks the attributes already sent so unchanged ones are not repeated.
#[derive(Default)]
struct Pen {
    fg: Option<Option<Color>>,
    bg: Option<Option<Color>>,
    bold: Option<bool>,
}

impl Pen {
    fn apply(&mut self, out: &mut Stdout, cell: &Cell) -> Result<()> {
        if self.fg != Some(cell.fg) {
            out.queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            out.queue(SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)))?;
            self.bg = Some(cell.bg);
        }
        if self.bold != Some(cell.bold) {
            out.queue(SetAttribute(if cell.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }))?;
            self.bold = Some(cell.bold);
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}

fn restore(out: &mut Stdout) {
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

pub fn restore_terminal_best_effort() {
    restore(&mut stdout());
}
