//! Color definitions for transparent fragment resolution

use nalgebra::Vector4;
use nalgebra::coordinates::XYZW;

/// RGBA 32-bit Floating Point Color
pub type RGBAf32Color = Vector4<f32>;

/// Defines the operations the transparency resolver needs from an RGBA color
pub trait TransparentColor: Copy + Send + Sync + 'static {
    /// An empty, fully transparent color in which values can be accumulated into
    fn empty() -> Self;
    /// Get the alpha of the color
    fn get_alpha(&self) -> f32;
    /// The largest of the red, green and blue channels
    fn max_channel(&self) -> f32;
    /// Copy the color with the red, green and blue channels multiplied by alpha
    fn premultiply(self) -> Self;
    /// Copy the color with the red, green and blue channels divided by alpha.
    ///
    /// An alpha of zero is not guarded; the division produces non-finite
    /// channels that propagate into anything computed from them.
    fn unpremultiply(self) -> Self;
}

impl TransparentColor for RGBAf32Color {
    #[inline]
    fn empty() -> RGBAf32Color {
        Vector4::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    fn get_alpha(&self) -> f32 {
        let XYZW { w, .. } = **self;

        w
    }

    #[inline]
    fn max_channel(&self) -> f32 {
        let XYZW { x, y, z, .. } = **self;

        x.max(y).max(z)
    }

    #[inline]
    fn premultiply(self) -> RGBAf32Color {
        let XYZW { x, y, z, w } = *self;

        Vector4::new(x * w, y * w, z * w, w)
    }

    #[inline]
    fn unpremultiply(self) -> RGBAf32Color {
        let XYZW { x, y, z, w } = *self;

        Vector4::new(x / w, y / w, z / w, w)
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Vector4;

    use super::TransparentColor;

    #[test]
    fn test_alpha_and_max_channel() {
        let color = Vector4::new(0.25, 0.75, 0.5, 0.5);

        assert_eq!(color.get_alpha(), 0.5);
        assert_eq!(color.max_channel(), 0.75);
    }

    #[test]
    fn test_premultiply() {
        let color = Vector4::new(0.5, 1.0, 0.25, 0.5);

        assert_eq!(color.premultiply(), Vector4::new(0.25, 0.5, 0.125, 0.5));
        assert_eq!(color.premultiply().unpremultiply(), color);
    }

    #[test]
    fn test_unpremultiply_zero_alpha_is_non_finite() {
        let color = Vector4::new(0.5, 0.5, 0.5, 0.0).unpremultiply();

        assert!(!color.x.is_finite());
        assert!(!color.y.is_finite());
        assert!(!color.z.is_finite());
    }
}
