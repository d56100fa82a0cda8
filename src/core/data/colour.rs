/// Opaque alpha byte written into every packed pixel.
pub const OPAQUE_ALPHA: u32 = 0xFF;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Packs as `0xAABBGGRR` with alpha fixed at 255.
    ///
    /// On a little-endian target the bytes of the packed value read R, G, B, A,
    /// which is the layout RGBA8 surfaces expect.
    #[must_use]
    pub const fn pack(self) -> u32 {
        OPAQUE_ALPHA << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }

    /// Inverse of [`Colour::pack`]; the alpha byte is discarded.
    #[must_use]
    pub const fn unpack(packed: u32) -> Self {
        Self {
            r: (packed & 0xFF) as u8,
            g: (packed >> 8 & 0xFF) as u8,
            b: (packed >> 16 & 0xFF) as u8,
        }
    }
}

#[must_use]
pub const fn alpha(packed: u32) -> u8 {
    (packed >> 24) as u8
}
