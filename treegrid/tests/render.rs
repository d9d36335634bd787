use treegrid::{
    layout, render_to_buffer, restripe, toggle, Buffer, Document, Indicator, PageInfo, Rect, Row,
    RowId, Table, Theme, HEADER_ROWS,
};

fn id(s: &str) -> RowId {
    s.parse().unwrap()
}

fn sample_doc() -> Document {
    let table = Table::from_rows(vec![
        Row::new(id("row_0_"))
            .entry("core")
            .desc("Core primitives")
            .control(Indicator::Expanded),
        Row::new(id("row_0_0_")).entry("Pipeline").desc("Staged work"),
        Row::new(id("row_1_"))
            .entry("text")
            .desc("Shaping and layout")
            .control(Indicator::Expanded),
    ]);
    Document::new(
        PageInfo::new("lumen", "graphics toolkit", "Module Index"),
        table,
    )
}

fn render(doc: &Document, width: u16, height: u16, cursor: Option<&RowId>) -> Buffer {
    let result = layout(doc, Rect::from_size(width, height), 0);
    let mut buf = Buffer::new(width, height);
    render_to_buffer(doc, &result, &mut buf, &Theme::default(), cursor);
    buf
}

fn line_string(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .map(|x| buf.get(x, y).unwrap().ch)
        .collect()
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_shows_project_brief_and_title() {
    let doc = sample_doc();
    let buf = render(&doc, 80, 24, None);

    assert!(line_string(&buf, 0).starts_with("lumen  graphics toolkit"));
    assert!(line_string(&buf, 1).starts_with("Module Index"));

    // Project name is bold, brief is dimmed.
    assert!(buf.get(0, 0).unwrap().style.bold);
    assert!(buf.get(7, 0).unwrap().style.dim);
    assert!(buf.get(0, 1).unwrap().style.underline);
}

// ============================================================================
// Rows
// ============================================================================

#[test]
fn test_control_glyph_tracks_indicator() {
    let mut doc = sample_doc();

    let buf = render(&doc, 80, 24, None);
    assert_eq!(buf.get(0, HEADER_ROWS).unwrap().ch, '▾');

    toggle(&mut doc.table, &id("row_0_"));
    let buf = render(&doc, 80, 24, None);
    assert_eq!(buf.get(0, HEADER_ROWS).unwrap().ch, '▸');
}

#[test]
fn test_entries_indent_by_depth() {
    let doc = sample_doc();
    let buf = render(&doc, 80, 24, None);

    // Depth 0: entry two columns past the control.
    assert_eq!(buf.get(2, HEADER_ROWS).unwrap().ch, 'c');
    // Depth 1 leaf: two more columns.
    assert_eq!(buf.get(4, HEADER_ROWS + 1).unwrap().ch, 'P');
    assert!(buf.get(4, HEADER_ROWS + 1).unwrap().style.bold);
}

#[test]
fn test_description_column_on_wide_screens() {
    let doc = sample_doc();
    let buf = render(&doc, 80, 24, None);

    // Descriptions start at the right two-fifths split, dimmed.
    let desc_x = 80 - 80 * 2 / 5;
    assert_eq!(buf.get(desc_x, HEADER_ROWS).unwrap().ch, 'C');
    assert!(buf.get(desc_x, HEADER_ROWS).unwrap().style.dim);
}

#[test]
fn test_no_description_column_on_narrow_screens() {
    let doc = sample_doc();
    let buf = render(&doc, 30, 24, None);

    assert!(!line_string(&buf, HEADER_ROWS).contains("Core"));
}

#[test]
fn test_long_entry_truncated_with_ellipsis() {
    let table = Table::from_rows(vec![Row::new(id("row_0_"))
        .entry("a_very_long_identifier_that_cannot_possibly_fit_here")]);
    let doc = Document::new(PageInfo::default(), table);

    let buf = render(&doc, 30, 24, None);

    assert!(line_string(&buf, HEADER_ROWS).contains('…'));
}

#[test]
fn test_hidden_rows_are_not_drawn() {
    let mut doc = sample_doc();
    toggle(&mut doc.table, &id("row_0_"));

    let buf = render(&doc, 80, 24, None);

    // row_0_0_ is gone; row_1_ moved up to the second body line.
    assert_eq!(buf.get(2, HEADER_ROWS + 1).unwrap().ch, 't');
    assert_eq!(line_string(&buf, HEADER_ROWS + 2).trim(), "");
}

// ============================================================================
// Stripes and cursor
// ============================================================================

#[test]
fn test_stripe_backgrounds_alternate() {
    let mut doc = sample_doc();
    restripe(&mut doc.table);
    let theme = Theme::default();

    let buf = render(&doc, 80, 24, None);

    let last = buf.width() - 1;
    assert_eq!(buf.get(last, HEADER_ROWS).unwrap().bg, theme.background);
    assert_eq!(buf.get(last, HEADER_ROWS + 1).unwrap().bg, theme.stripe);
    assert_eq!(buf.get(last, HEADER_ROWS + 2).unwrap().bg, theme.background);
}

#[test]
fn test_cursor_row_highlighted() {
    let mut doc = sample_doc();
    restripe(&mut doc.table);
    let theme = Theme::default();
    let cursor = id("row_0_0_");

    let buf = render(&doc, 80, 24, Some(&cursor));

    let last = buf.width() - 1;
    assert_eq!(buf.get(last, HEADER_ROWS + 1).unwrap().bg, theme.cursor);
    // Other rows keep their stripe.
    assert_eq!(buf.get(last, HEADER_ROWS).unwrap().bg, theme.background);
}
