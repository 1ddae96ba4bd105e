//! Pixel format helpers for presentation adapters.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

/// Byte length of an RGBA frame holding a `src_width` x `src_height` image
/// shrunk by `scale`, or `None` if `scale` is zero or does not divide both
/// sides.
#[must_use]
pub fn downsampled_len(src_width: usize, src_height: usize, scale: usize) -> Option<usize> {
    if scale == 0 || src_width % scale != 0 || src_height % scale != 0 {
        return None;
    }

    Some((src_width / scale) * (src_height / scale) * BYTES_PER_PIXEL)
}

/// Shrinks an RGBA image by an integer factor, averaging each `scale` x
/// `scale` block into one destination pixel.
///
/// # Arguments
/// * `src` - Source RGBA data, `src_width` pixels per row
/// * `scale` - Shrink factor on both axes
/// * `dst` - Destination RGBA data, `src_width / scale` pixels per row
///
/// # Panics
/// Panics if `scale` is zero, if `src_width` is not a multiple of `scale`,
/// or if `dst` is not exactly `src` shrunk by `scale` on both axes.
pub fn downsample_rgba(src: &[u8], src_width: usize, scale: usize, dst: &mut [u8]) {
    assert!(scale > 0, "scale must be greater than zero");
    assert!(
        src_width % scale == 0,
        "src width {} is not a multiple of scale {}",
        src_width,
        scale
    );

    let src_stride = src_width * BYTES_PER_PIXEL;
    let src_height = if src_stride == 0 { 0 } else { src.len() / src_stride };
    let dst_width = src_width / scale;
    let expected_dst_len = dst_width * (src_height / scale) * BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    if scale == 1 {
        dst.copy_from_slice(src);
        return;
    }

    let block = (scale * scale) as u32;

    for (i, dst_pixel) in dst.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let x0 = (i % dst_width) * scale;
        let y0 = (i / dst_width) * scale;
        let mut sums = [0u32; BYTES_PER_PIXEL];

        for y in y0..y0 + scale {
            let row = &src[y * src_stride..(y + 1) * src_stride];
            for src_pixel in row[x0 * BYTES_PER_PIXEL..(x0 + scale) * BYTES_PER_PIXEL]
                .chunks_exact(BYTES_PER_PIXEL)
            {
                for (sum, &channel) in sums.iter_mut().zip(src_pixel) {
                    *sum += u32::from(channel);
                }
            }
        }

        for (channel, sum) in dst_pixel.iter_mut().zip(sums) {
            *channel = ((sum + block / 2) / block) as u8;
        }
    }
}

/// Draws a one-pixel rectangle outline into an RGBA frame, clipped to the
/// frame.
///
/// `x` and `y` may be negative and the rectangle may extend past the frame;
/// only the visible part of the outline is drawn.
pub fn draw_outline(
    frame: &mut [u8],
    frame_width: usize,
    frame_height: usize,
    (x, y, width, height): (i64, i64, i64, i64),
    colour: Colour,
) {
    if width <= 0 || height <= 0 {
        return;
    }

    let rgba = colour.to_rgba();
    let (right, bottom) = (x + width - 1, y + height - 1);
    let mut plot = |px: i64, py: i64| {
        if px < 0 || py < 0 || px >= frame_width as i64 || py >= frame_height as i64 {
            return;
        }
        let offset = (py as usize * frame_width + px as usize) * BYTES_PER_PIXEL;
        frame[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    };

    let (left_clip, right_clip) = (x.max(0), right.min(frame_width as i64 - 1));
    for px in left_clip..=right_clip {
        plot(px, y);
        plot(px, bottom);
    }

    let (top_clip, bottom_clip) = (y.max(0), bottom.min(frame_height as i64 - 1));
    for py in top_clip..=bottom_clip {
        plot(x, py);
        plot(right, py);
    }
}
