use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode terminal that flushes a cell buffer line-by-line, writing only
/// the lines that changed since the previous frame.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Clear and hand out the frame buffer for drawing.
    ///
    /// When the terminal size changed, both buffers are recreated and the
    /// screen is wiped so the next flush repaints it fully.
    pub fn frame(&mut self) -> io::Result<&mut Buffer> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        self.current.clear();
        Ok(&mut self.current)
    }

    /// Write the lines that changed since the previous flush, then swap
    /// buffers.
    pub fn flush_frame(&mut self) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        for y in self.current.dirty_lines(&self.previous) {
            queue!(self.stdout, cursor::MoveTo(0, y))?;

            // Cells after a wide glyph are placeholders; the glyph already
            // advanced the cursor past them.
            let mut skip = 0usize;
            for &cell in self.current.line(y) {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }

                if last_fg != Some(cell.fg) {
                    queue!(
                        self.stdout,
                        SetForegroundColor(CtColor::Rgb {
                            r: cell.fg.r,
                            g: cell.fg.g,
                            b: cell.fg.b,
                        })
                    )?;
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    queue!(
                        self.stdout,
                        SetBackgroundColor(CtColor::Rgb {
                            r: cell.bg.r,
                            g: cell.bg.g,
                            b: cell.bg.b,
                        })
                    )?;
                    last_bg = Some(cell.bg);
                }

                if cell.style.bold != last_style.bold {
                    if cell.style.bold {
                        queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                    } else {
                        queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                    }
                }
                if cell.style.dim != last_style.dim {
                    if cell.style.dim {
                        queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                    } else {
                        queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                    }
                }
                if cell.style.underline != last_style.underline {
                    if cell.style.underline {
                        queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                    } else {
                        queue!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
                    }
                }
                last_style = cell.style;

                write!(self.stdout, "{}", cell.ch)?;
                skip = char_width(cell.ch).saturating_sub(1);
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    /// Collect pending raw events; blocks when `timeout` is `None`.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                // Drain whatever arrived with it.
                while event::poll(Duration::ZERO)? {
                    events.push(event::read()?);
                }
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
