use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Perceptual blend toward another color in OKLCH space.
    /// `amount` of 0.0 keeps self, 1.0 yields `other`. Used to render a
    /// partially transparent foreground against a backdrop.
    pub fn blend_toward(&self, other: &Color, amount: f32) -> Color {
        let t = amount.clamp(0.0, 1.0);
        let (from_l, from_c, from_h) = self.to_oklch();
        let (to_l, to_c, to_h) = other.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        // Hue takes the shortest path around the circle
        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        Color::oklch(l, c, h)
    }

    fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Color::Oklch { l, c, h } => (*l, *c, *h),
            Color::Rgb { r, g, b } => {
                let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }
}
