use crate::id::RowId;
use crate::page::Document;

/// Screen lines taken by the page header above the table body.
pub const HEADER_ROWS: u16 = 3;

/// Rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> u16 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// One visible row placed on a screen line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLine {
    pub id: RowId,
    pub y: u16,
    /// Hit region of the expand/collapse control, when the row has one
    /// and it fits the viewport.
    pub control: Option<Rect>,
}

/// Placement of the visible rows for one frame, consumed by rendering and
/// hit-testing.
#[derive(Debug, Clone, Default)]
pub struct TableLayout {
    lines: Vec<RowLine>,
}

impl TableLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: RowLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[RowLine] {
        &self.lines
    }

    pub fn get(&self, id: &RowId) -> Option<&RowLine> {
        self.lines.iter().find(|line| line.id == *id)
    }

    pub fn line_at(&self, y: u16) -> Option<&RowLine> {
        self.lines.iter().find(|line| line.y == y)
    }

    /// The row whose control covers the given point, if any.
    pub fn control_at(&self, x: u16, y: u16) -> Option<&RowId> {
        self.lines
            .iter()
            .find(|line| matches!(&line.control, Some(rect) if rect.contains(x, y)))
            .map(|line| &line.id)
    }
}

/// Lay out the visible rows of `doc` into `viewport`, one line per row,
/// starting from the visible row at offset `top`.
///
/// Rows are indented two columns per tree level; the control sits at the
/// start of the indent.
pub fn layout(doc: &Document, viewport: Rect, top: usize) -> TableLayout {
    let mut result = TableLayout::new();
    let mut y = viewport.y + HEADER_ROWS;

    for row in doc.table.visible().skip(top) {
        if y >= viewport.bottom() {
            break;
        }
        let indent = (2 * row.depth()) as u16;
        let control = row.control.and_then(|_| {
            let x = viewport.x.saturating_add(indent);
            (x.saturating_add(2) <= viewport.right()).then_some(Rect::new(x, y, 2, 1))
        });
        result.push(RowLine {
            id: row.id.clone(),
            y,
            control,
        });
        y += 1;
    }

    result
}
