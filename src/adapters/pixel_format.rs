//! Pixel format conversion helpers for presentation adapters.

/// Copies packed `0xAABBGGRR` pixels into an RGBA8 byte frame.
///
/// Pixels are copied pairwise until either side runs out; the return value is
/// the number of pixels written. Any trailing partial pixel in `dst` is left
/// alone.
pub fn copy_abgr_to_rgba(src: &[u32], dst: &mut [u8]) -> usize {
    let mut copied = 0;

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel.copy_from_slice(&packed.to_le_bytes());
        copied += 1;
    }

    copied
}
