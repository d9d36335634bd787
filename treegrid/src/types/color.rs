#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Raise perceptual lightness by `amount` (0.0..=1.0 scale).
    pub fn lighten(self, amount: f32) -> Self {
        let mut oklch = rgb_to_oklch(self);
        oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
        oklch_to_rgb(oklch)
    }

    /// Lower perceptual lightness by `amount` (0.0..=1.0 scale).
    pub fn darken(self, amount: f32) -> Self {
        let mut oklch = rgb_to_oklch(self);
        oklch.l = (oklch.l - amount).clamp(0.0, 1.0);
        oklch_to_rgb(oklch)
    }
}

fn rgb_to_oklch(rgb: Rgb) -> palette::Oklch {
    use palette::{IntoColor, Srgb};

    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    srgb.into_color()
}

fn oklch_to_rgb(oklch: palette::Oklch) -> Rgb {
    use palette::{IntoColor, Srgb};

    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
