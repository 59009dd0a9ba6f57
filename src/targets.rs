//! Accumulation target pair for transparent surface compositing

use ::blend::{Additive, Blend, Coverage};
use ::color::{RGBAf32Color, TransparentColor};
use ::error::{BlendError, BlendResult};
use ::geometry::{Coordinate, Dimensions, HasDimensions};
use ::resolver::TransparentOutput;

/// Clear value of the coverage target.
///
/// Inverse-alpha blending only ever attenuates the target, so it starts fully open.
pub const DEFAULT_COVERAGE_VALUE: f32 = 1.0;

/// The pair of targets the resolved fragments are blended into.
///
/// The accumulation target clears to transparent black and blends
/// additively; the coverage target clears to one and blends
/// `dst * (1 - src)`. Both blend functions are fixed, which is what makes
/// the accumulation commutative and therefore order-independent.
pub struct AccumulationTargets {
    dimensions: Dimensions,
    accumulation: Vec<RGBAf32Color>,
    coverage: Vec<f32>,
}

impl AccumulationTargets {
    /// Create a new target pair with both targets at their clear values
    pub fn new(dimensions: Dimensions) -> AccumulationTargets {
        AccumulationTargets {
            dimensions,
            accumulation: vec![RGBAf32Color::empty(); dimensions.area()],
            coverage: vec![DEFAULT_COVERAGE_VALUE; dimensions.area()],
        }
    }

    /// Reset both targets to their clear values
    pub fn clear(&mut self) {
        for value in self.accumulation.iter_mut() {
            *value = RGBAf32Color::empty();
        }

        for value in self.coverage.iter_mut() {
            *value = DEFAULT_COVERAGE_VALUE;
        }
    }

    /// Blend a resolved fragment into both targets at the given coordinate.
    ///
    /// Returns `BlendError::InvalidPixelCoordinate` for out of bounds coordinates.
    pub fn accumulate(&mut self, coord: Coordinate, output: TransparentOutput) -> BlendResult<()> {
        if !self.dimensions.in_bounds(coord) {
            return Err(BlendError::InvalidPixelCoordinate);
        }

        let index = coord.into_index(self.dimensions);

        self.blend_at(index, output);

        Ok(())
    }

    /// Blend a full buffer of resolved fragments, one per pixel in row-major order.
    ///
    /// Returns `BlendError::MismatchedFragmentCount` if the buffer does not
    /// cover the target exactly.
    pub fn accumulate_buffer(&mut self, outputs: &[TransparentOutput]) -> BlendResult<()> {
        if outputs.len() != self.dimensions.area() {
            return Err(BlendError::MismatchedFragmentCount(outputs.len(), self.dimensions.area()));
        }

        for (index, output) in outputs.iter().enumerate() {
            self.blend_at(index, *output);
        }

        Ok(())
    }

    #[inline]
    fn blend_at(&mut self, index: usize, output: TransparentOutput) {
        self.accumulation[index] = Additive.blend(output.accumulation, self.accumulation[index]);
        self.coverage[index] = Coverage.blend(output.coverage, self.coverage[index]);
    }

    /// The accumulation target, in row-major order
    #[inline]
    pub fn accumulation(&self) -> &[RGBAf32Color] { &self.accumulation }

    /// The coverage target, in row-major order
    #[inline]
    pub fn coverage(&self) -> &[f32] { &self.coverage }
}

impl HasDimensions for AccumulationTargets {
    #[inline]
    fn dimensions(&self) -> Dimensions { self.dimensions }
}
