use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::adapters::pixel_format::{downsample_rgba, downsampled_len, draw_outline};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::selection::Selection;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
    #[error("image {width}x{height} does not shrink by {scale} into a {frame_len}-byte frame")]
    FrameMismatch {
        width: u32,
        height: u32,
        scale: u32,
        frame_len: usize,
    },
}

/// Shows a full-resolution buffer shrunk by `scale`, with an optional
/// selection outline on top.
///
/// The frame has the fixed display size; `pixels` scales it onto whatever
/// surface the window actually has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    scale: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        (width, height): (u32, u32),
        scale: u32,
    ) -> Result<Self, pixels::Error> {
        let surface = window.inner_size();
        let surface_texture = SurfaceTexture::new(surface.width, surface.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            scale: scale.max(1),
        })
    }

    pub fn present(
        &mut self,
        buffer: &PixelBuffer,
        selection: Option<Selection>,
    ) -> Result<(), PresentError> {
        let pixel_rect = buffer.pixel_rect();
        let (src_width, src_height) = (pixel_rect.width(), pixel_rect.height());
        let scale = self.scale as usize;
        let frame = self.pixels.frame_mut();

        if downsampled_len(src_width as usize, src_height as usize, scale) != Some(frame.len()) {
            return Err(PresentError::FrameMismatch {
                width: src_width,
                height: src_height,
                scale: self.scale,
                frame_len: frame.len(),
            });
        }

        downsample_rgba(buffer.buffer(), src_width as usize, scale, frame);

        if let Some(selection) = selection {
            let scale = f64::from(self.scale);
            draw_outline(
                frame,
                self.width as usize,
                self.height as usize,
                (
                    (selection.x() / scale).round() as i64,
                    (selection.y() / scale).round() as i64,
                    (selection.width() / scale).round() as i64,
                    (selection.height() / scale).round() as i64,
                ),
                Colour::WHITE,
            );
        }

        Ok(self.pixels.render()?)
    }

    /// Maps a cursor position in the window to full-resolution image pixels.
    /// Positions outside the frame are clamped to its edge.
    #[must_use]
    pub fn image_point(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));

        Point {
            x: (x as u32 * self.scale) as i32,
            y: (y as u32 * self.scale) as i32,
        }
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}
