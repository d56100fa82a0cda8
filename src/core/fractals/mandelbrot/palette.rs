use crate::core::data::colour::Colour;

pub const DEFAULT_PALETTE_SIZE: usize = 1000;

const HUE_EXPONENT: f64 = 0.25;
const SATURATION: f64 = 0.9;
const LIGHTNESS: f64 = 0.6;

/// Packed colour for iteration counts the palette does not cover.
pub const INTERIOR_COLOUR: u32 = Colour::BLACK.pack();

/// Converts HSL (all components in `[0, 1]`) to an RGB colour.
///
/// Channels are truncated, not rounded, after scaling to `[0, 255]`.
#[must_use]
pub fn hsl_to_colour(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let v = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };

    let (r, g, b) = if v > 0.0 {
        let m = lightness + lightness - v;
        let sv = (v - m) / v;
        let h = hue * 6.0;
        let sextant = h as u32;
        let fract = h - f64::from(sextant);
        let vsf = v * sv * fract;
        let mid1 = m + vsf;
        let mid2 = v - vsf;

        match sextant {
            0 => (v, mid1, m),
            1 => (mid2, v, m),
            2 => (m, v, mid1),
            3 => (m, mid2, v),
            4 => (mid1, m, v),
            5 => (v, m, mid2),
            _ => (lightness, lightness, lightness),
        }
    } else {
        (lightness, lightness, lightness)
    };

    Colour {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}

/// Builds `size` packed colours along a `t^0.25` hue ramp.
///
/// The fourth root spreads the low iteration counts, which dominate near the
/// set boundary, across most of the hue circle.
#[must_use]
pub fn build_palette(size: usize) -> Vec<u32> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            hsl_to_colour(t.powf(HUE_EXPONENT), SATURATION, LIGHTNESS).pack()
        })
        .collect()
}

/// Fixed lookup table from escape count to packed colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<u32>,
}

impl Palette {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            colours: build_palette(size),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[u32] {
        &self.colours
    }

    /// Palette entry for `iterations`, or [`INTERIOR_COLOUR`] past the end.
    #[inline]
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> u32 {
        self.colours
            .get(iterations as usize)
            .copied()
            .unwrap_or(INTERIOR_COLOUR)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_SIZE)
    }
}
