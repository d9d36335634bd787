use treegrid::{layout, Document, Indicator, PageInfo, Rect, Row, RowId, Table, HEADER_ROWS};

fn id(s: &str) -> RowId {
    s.parse().unwrap()
}

fn sample_doc() -> Document {
    let table = Table::from_rows(vec![
        Row::new(id("row_0_"))
            .entry("core")
            .control(Indicator::Expanded),
        Row::new(id("row_0_0_")).entry("Pipeline"),
        Row::new(id("row_1_"))
            .entry("text")
            .control(Indicator::Expanded),
        Row::new(id("row_1_0_")).entry("Shaper").hidden(),
    ]);
    Document::new(PageInfo::new("lumen", "graphics toolkit", "Module Index"), table)
}

#[test]
fn test_layout_places_visible_rows_below_header() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, 24), 0);

    let ys: Vec<u16> = result.lines().iter().map(|line| line.y).collect();
    assert_eq!(ys, vec![HEADER_ROWS, HEADER_ROWS + 1, HEADER_ROWS + 2]);

    // Hidden rows get no line.
    assert!(result.get(&id("row_1_0_")).is_none());
}

#[test]
fn test_layout_control_rects() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, 24), 0);

    assert_eq!(
        result.get(&id("row_0_")).unwrap().control,
        Some(Rect::new(0, HEADER_ROWS, 2, 1))
    );
    // Leaf rows have no control.
    assert_eq!(result.get(&id("row_0_0_")).unwrap().control, None);
}

#[test]
fn test_layout_indents_controls_by_depth() {
    let table = Table::from_rows(vec![
        Row::new(id("row_0_"))
            .entry("core")
            .control(Indicator::Expanded),
        Row::new(id("row_0_0_"))
            .entry("Pipeline")
            .control(Indicator::Expanded),
        Row::new(id("row_0_0_0_")).entry("run"),
    ]);
    let doc = Document::new(PageInfo::default(), table);

    let result = layout(&doc, Rect::from_size(80, 24), 0);

    assert_eq!(result.get(&id("row_0_")).unwrap().control.unwrap().x, 0);
    assert_eq!(result.get(&id("row_0_0_")).unwrap().control.unwrap().x, 2);
}

#[test]
fn test_layout_scroll_offset_skips_rows() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, 24), 1);

    assert_eq!(result.lines()[0].id, id("row_0_0_"));
    assert_eq!(result.lines()[0].y, HEADER_ROWS);
}

#[test]
fn test_layout_stops_at_viewport_bottom() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, HEADER_ROWS + 2), 0);

    assert_eq!(result.lines().len(), 2);
}

#[test]
fn test_control_at_hit_testing() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, 24), 0);

    assert_eq!(result.control_at(0, HEADER_ROWS), Some(&id("row_0_")));
    assert_eq!(result.control_at(1, HEADER_ROWS), Some(&id("row_0_")));
    // Past the control rect.
    assert_eq!(result.control_at(2, HEADER_ROWS), None);
    // A line without a control.
    assert_eq!(result.control_at(0, HEADER_ROWS + 1), None);
}

#[test]
fn test_line_at() {
    let doc = sample_doc();
    let result = layout(&doc, Rect::from_size(80, 24), 0);

    assert_eq!(result.line_at(HEADER_ROWS + 1).unwrap().id, id("row_0_0_"));
    assert!(result.line_at(0).is_none());
}
