use super::Rgb;

/// Named colors used when drawing a document table.
///
/// The stripe color is the background of odd visible rows; even rows use
/// the plain background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub stripe: Rgb,
    pub entry: Rgb,
    pub desc: Rgb,
    pub control: Rgb,
    pub header: Rgb,
    pub cursor: Rgb,
}

impl Theme {
    pub fn new() -> Self {
        let background = Rgb::new(18, 18, 22);
        Self {
            background,
            stripe: background.lighten(0.06),
            entry: Rgb::new(230, 230, 235),
            desc: Rgb::new(160, 160, 170),
            control: Rgb::new(110, 170, 255),
            header: Rgb::new(245, 245, 250),
            cursor: background.lighten(0.16),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
