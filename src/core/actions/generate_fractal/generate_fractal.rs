use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Runs `algorithm` over every pixel of `pixel_rect` in row-major order on
/// the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for pixel in pixel_rect.points() {
        results.push(algorithm.compute(pixel)?);
    }

    Ok(results)
}
