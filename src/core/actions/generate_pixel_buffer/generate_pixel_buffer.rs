use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError, BYTES_PER_PIXEL};
use crate::core::data::pixel_rect::PixelRect;

/// Generates a pixel buffer by mapping input values to colours.
///
/// `input` is row-major over `pixel_rect`; the buffer is only built once
/// every value has been mapped.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        buffer.extend_from_slice(&mapper.map(value).to_rgba());
    }

    PixelBuffer::from_data(pixel_rect, buffer)
}
