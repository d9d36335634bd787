use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use treegrid::{
    layout, process_events, render_to_buffer, toggle, Document, Event, Indicator, Key, PageInfo,
    Rect, Row, RowId, Table, Terminal, Theme,
};

fn main() -> std::io::Result<()> {
    // Raw mode owns stdout, so log to a file.
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = sample_document();
    let theme = Theme::default();
    let mut term = Terminal::new()?;

    loop {
        let buf = term.frame()?;
        let viewport = Rect::from_size(buf.width(), buf.height());
        let frame_layout = layout(&doc, viewport, 0);
        render_to_buffer(&doc, &frame_layout, buf, &theme, None);
        term.flush_frame()?;

        let raw = term.poll(None)?;
        for event in process_events(&raw, &frame_layout) {
            match event {
                Event::ToggleActivated { target } => {
                    toggle(&mut doc.table, &target);
                }
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                _ => {}
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
        leaf("row_0_1_", "Sample", "One measurement with timestamp"),
        branch("row_1_", "filters", "Signal conditioning"),
        leaf("row_1_0_", "Biquad", "Second-order IIR section"),
        leaf("row_1_1_", "Median", "Order-statistic smoother"),
    ]);
    Document::new(
        PageInfo::new("signalkit", "Streaming DSP toolkit", "Class Index"),
        table,
    )
}
