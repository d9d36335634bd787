use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Path identifier of a row in a display hierarchy.
///
/// The canonical text form is `row_` followed by one integer segment per
/// tree level, each with its own trailing underscore: `row_` is the root,
/// `row_1_` one of its children, `row_1_2_` a grandchild. Every id ends
/// with the delimiter, so textual prefix matching and segment-wise prefix
/// matching agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowId {
    segments: Vec<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseRowIdError {
    #[error("row id must start with `row_`")]
    MissingPrefix,
    #[error("invalid path segment `{0}` in row id")]
    InvalidSegment(String),
}

impl RowId {
    /// The root id `row_` (zero segments).
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn new(segments: impl Into<Vec<u32>>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    /// Tree depth, i.e. the number of path segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// The id one level deeper, at child position `n`.
    pub fn child(&self, n: u32) -> Self {
        let mut segments = self.segments.clone();
        segments.push(n);
        Self { segments }
    }

    /// The id one level up, or None for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// True if `other` lies anywhere in the subtree below this id.
    pub fn is_ancestor_of(&self, other: &RowId) -> bool {
        other.segments.len() > self.segments.len() && other.segments.starts_with(&self.segments)
    }

    /// True if `other` is exactly one level below this id.
    pub fn is_parent_of(&self, other: &RowId) -> bool {
        other.segments.len() == self.segments.len() + 1
            && other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row_")?;
        for segment in &self.segments {
            write!(f, "{segment}_")?;
        }
        Ok(())
    }
}

impl FromStr for RowId {
    type Err = ParseRowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("row_").ok_or(ParseRowIdError::MissingPrefix)?;
        if rest.is_empty() {
            return Ok(Self::root());
        }
        // Each segment carries its own trailing delimiter.
        let body = rest
            .strip_suffix('_')
            .ok_or_else(|| ParseRowIdError::InvalidSegment(rest.to_string()))?;
        let mut segments = Vec::new();
        for part in body.split('_') {
            let n = part
                .parse()
                .map_err(|_| ParseRowIdError::InvalidSegment(part.to_string()))?;
            segments.push(n);
        }
        Ok(Self { segments })
    }
}
