use std::fs::File;

use log::debug;
use simplelog::{Config, LevelFilter, WriteLogger};
use treegrid::{
    layout, process_events, render_to_buffer, toggle, Document, Event, Indicator, Key, PageInfo,
    Rect, Row, RowId, Table, Terminal, Theme, HEADER_ROWS,
};

struct App {
    doc: Document,
    /// Index of the cursor row among the visible rows.
    cursor: usize,
    /// First visible row shown in the body (scroll offset).
    top: usize,
}

impl App {
    fn new(doc: Document) -> Self {
        Self {
            doc,
            cursor: 0,
            top: 0,
        }
    }

    fn visible_count(&self) -> usize {
        self.doc.table.visible_count()
    }

    fn cursor_id(&self) -> Option<RowId> {
        self.doc
            .table
            .visible()
            .nth(self.cursor)
            .map(|row| row.id.clone())
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, count as isize - 1) as usize;
    }

    /// Keep cursor and scroll offset valid after a visibility change.
    fn clamp_to_visible(&mut self, body_height: usize) {
        let count = self.visible_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.top = self.top.min(count.saturating_sub(body_height.max(1)));
        if self.cursor < self.top {
            self.top = self.cursor;
        } else if body_height > 0 && self.cursor >= self.top + body_height {
            self.top = self.cursor + 1 - body_height;
        }
    }

    fn toggle_at_cursor(&mut self) {
        if let Some(target) = self.cursor_id() {
            debug!("[app] toggling {target} from keyboard");
            toggle(&mut self.doc.table, &target);
        }
    }
}

fn main() -> std::io::Result<()> {
    // Raw mode owns stdout, so log to a file.
    let log_file = File::create("treegrid-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut app = App::new(sample_document());
    let theme = Theme::default();
    let mut term = Terminal::new()?;

    loop {
        let buf = term.frame()?;
        let viewport = Rect::from_size(buf.width(), buf.height());
        let body_height = viewport.height.saturating_sub(HEADER_ROWS) as usize;
        app.clamp_to_visible(body_height);

        let frame_layout = layout(&app.doc, viewport, app.top);
        let cursor_id = app.cursor_id();
        render_to_buffer(&app.doc, &frame_layout, buf, &theme, cursor_id.as_ref());
        term.flush_frame()?;

        let raw = term.poll(None)?;
        for event in process_events(&raw, &frame_layout) {
            match event {
                Event::ToggleActivated { target } => {
                    toggle(&mut app.doc.table, &target);
                    app.clamp_to_visible(body_height);
                }

                Event::Click { y, .. } => {
                    // Clicking a row moves the cursor onto it.
                    if let Some(line) = frame_layout.line_at(y) {
                        if let Some(index) = app
                            .doc
                            .table
                            .visible()
                            .position(|row| row.id == line.id)
                        {
                            app.cursor = index;
                        }
                    }
                }

                Event::Wheel { delta } => {
                    let max_top = app.visible_count().saturating_sub(body_height.max(1));
                    let target = app.top as isize + delta as isize;
                    app.top = target.clamp(0, max_top as isize) as usize;
                }

                Event::Key { key, .. } => match key {
                    Key::Char('q') | Key::Escape => return Ok(()),
                    Key::Up => app.move_cursor(-1),
                    Key::Down => app.move_cursor(1),
                    Key::PageUp => app.move_cursor(-(body_height.max(1) as isize)),
                    Key::PageDown => app.move_cursor(body_height.max(1) as isize),
                    Key::Home => app.cursor = 0,
                    Key::End => app.cursor = app.visible_count().saturating_sub(1),
                    Key::Enter | Key::Char(' ') => {
                        app.toggle_at_cursor();
                        app.clamp_to_visible(body_height);
                    }
                    _ => {}
                },

                Event::Resize { .. } => {}
            }
        }
    }
}

fn id(s: &str) -> RowId {
    s.parse().expect("static row id")
}

fn branch(s: &str, entry: &str, desc: &str) -> Row {
    Row::new(id(s))
        .entry(entry)
        .desc(desc)
        .control(Indicator::Expanded)
}

fn leaf(s: &str, entry: &str, desc: &str) -> Row {
    Row::new(id(s)).entry(entry).desc(desc)
}

fn sample_document() -> Document {
    let table = Table::from_rows(vec![
        branch("row_0_", "core", "Core primitives"),
        branch("row_0_0_", "Pipeline", "Staged processing graph"),
        leaf("row_0_0_0_", "run", "Execute all stages in order"),
        leaf("row_0_0_1_", "reset", "Drop buffered state"),
        leaf("row_0_0_2_", "push_stage", "Append a stage to the graph"),
        branch("row_0_1_", "Sample", "One measurement with timestamp"),
        leaf("row_0_1_0_", "value", "Measured amplitude"),
        leaf("row_0_1_1_", "at", "Capture instant"),
        leaf("row_0_2_", "Channel", "Bounded sample queue"),
        branch("row_1_", "filters", "Signal conditioning"),
        branch("row_1_0_", "Biquad", "Second-order IIR section"),
        leaf("row_1_0_0_", "low_pass", "Butterworth low-pass setup"),
        leaf("row_1_0_1_", "high_pass", "Butterworth high-pass setup"),
        leaf("row_1_0_2_", "apply", "Filter one sample"),
        leaf("row_1_1_", "Median", "Order-statistic smoother"),
        leaf("row_1_2_", "Decimator", "Integer-rate downsampler"),
        branch("row_2_", "io", "Capture and export"),
        leaf("row_2_0_", "WavWriter", "Streaming RIFF encoder"),
        leaf("row_2_1_", "PcmReader", "Raw capture source"),
    ]);
    Document::new(
        PageInfo::new("signalkit", "Streaming DSP toolkit", "Class Index"),
        table,
    )
}
