use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(&mut writer, buffer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Encodes `buffer` as binary PPM; alpha is dropped.
pub fn write_ppm(writer: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;

    for &packed in buffer.buffer() {
        let Colour { r, g, b } = Colour::unpack(packed);
        writer.write_all(&[r, g, b])?;
    }

    Ok(())
}
