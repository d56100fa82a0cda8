/// Host-side frame storage: `width * height` packed `0xAABBGGRR` pixels.
///
/// The renderer never allocates; hosts own one of these and lend the data
/// slice to each `render_frame` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u32>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u32] {
        &mut self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 4);

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.buffer().len(), 40);
        assert!(buffer.buffer().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_zero_dimension_buffer_is_empty() {
        assert_eq!(PixelBuffer::new(0, 100).buffer().len(), 0);
    }
}
