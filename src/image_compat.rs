//! Conversion of the transparency targets into `image` buffers for inspection

use image;

use ::geometry::{Dimensions, HasDimensions};
use ::targets::AccumulationTargets;

pub trait ImageTargets {
    /// Copy the accumulation target into an RGBA image, channels clamped to `[0, 1]`.
    ///
    /// Raw accumulation values can exceed one long before the resolve pass
    /// normalizes them, so this is a debugging aid, not a composite.
    fn accumulation_to_image(&self) -> Option<image::RgbaImage>;

    /// Copy the coverage target into a grayscale image
    fn coverage_to_image(&self) -> Option<image::GrayImage>;
}

impl ImageTargets for AccumulationTargets {
    fn accumulation_to_image(&self) -> Option<image::RgbaImage> {
        let Dimensions { width, height } = self.dimensions();

        let mut res = Vec::with_capacity(self.accumulation().len() * 4);

        for color in self.accumulation() {
            res.push((color.x.max(0.0).min(1.0) * 255.0).floor() as u8);
            res.push((color.y.max(0.0).min(1.0) * 255.0).floor() as u8);
            res.push((color.z.max(0.0).min(1.0) * 255.0).floor() as u8);
            res.push((color.w.max(0.0).min(1.0) * 255.0).floor() as u8);
        }

        image::RgbaImage::from_raw(width, height, res)
    }

    fn coverage_to_image(&self) -> Option<image::GrayImage> {
        let Dimensions { width, height } = self.dimensions();

        let res = self.coverage()
                      .iter()
                      .map(|coverage| (coverage.max(0.0).min(1.0) * 255.0).floor() as u8)
                      .collect();

        image::GrayImage::from_raw(width, height, res)
    }
}
