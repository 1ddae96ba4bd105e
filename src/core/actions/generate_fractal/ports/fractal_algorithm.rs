use crate::core::data::point::Point;
use std::error::Error;

/// Computes the raw fractal value for a single pixel of a render.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
