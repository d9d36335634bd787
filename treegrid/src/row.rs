use crate::id::RowId;

/// State shown by a row's expand/collapse control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Expanded,
    Collapsed,
}

impl Indicator {
    pub fn glyph(self) -> char {
        match self {
            Self::Expanded => '▾',
            Self::Collapsed => '▸',
        }
    }
}

/// Stripe parity of a visible row, reassigned after every visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stripe {
    #[default]
    Even,
    Odd,
}

/// One row of a hierarchical table.
///
/// Rows pre-exist in the document; the toggle only reads their id and
/// position and mutates visibility, indicator and stripe state.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    pub entry: String,
    pub desc: String,
    pub visible: bool,
    pub control: Option<Indicator>,
    pub stripe: Stripe,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            entry: String::new(),
            desc: String::new(),
            visible: true,
            control: None,
            stripe: Stripe::Even,
        }
    }

    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn control(mut self, indicator: Indicator) -> Self {
        self.control = Some(indicator);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    pub fn depth(&self) -> usize {
        self.id.depth()
    }
}
