use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use std::io::Write;
use std::path::Path;

/// Writes a frame as a binary PPM file. The buffer's padding byte is
/// dropped; PPM carries plain RGB triples.
pub fn write_ppm(frame: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut writer = std::io::BufWriter::new(file);

    write_ppm_to(frame, &mut writer)
}

pub fn write_ppm_to(frame: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(
        writer,
        "{} {}",
        frame.resolution().width(),
        frame.resolution().height()
    )?;
    writeln!(writer, "255")?;

    for pixel in frame.bytes().chunks_exact(BYTES_PER_PIXEL) {
        writer.write_all(&pixel[..3])?;
    }

    writer.flush()
}
