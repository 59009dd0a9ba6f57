//! Transparent fragment color resolution
//!
//! Implements the weighted blended order-independent transparency scheme:
//! every transparent fragment is resolved into an accumulation color and a
//! coverage value, written to two targets with fixed blend functions and
//! normalized by a separate resolve pass. Because the weighting is
//! commutative, fragments can be rasterized in any order.
//!
//! Three weighting functions are provided. The `oit` cargo feature fixes
//! which one is bound to [`transparent_color_output`](fn.transparent_color_output.html),
//! so the per-fragment path never branches on configuration at runtime.

use rayon::prelude::*;

use ::color::{RGBAf32Color, TransparentColor};
use ::utils::{clamp, saturate};

/// Resolved per-fragment outputs for the two transparency targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransparentOutput {
    /// Destined for the additively blended accumulation target
    pub accumulation: RGBAf32Color,
    /// Destined for the inverse-alpha blended coverage target,
    /// where it is broadcast to every channel
    pub coverage: f32,
}

/// A shaded transparent fragment, as handed over by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransparentFragment {
    /// Shaded fragment color
    pub color: RGBAf32Color,
    /// Camera-space depth, negative in front of the camera
    pub linear_z: f32,
    /// Depth in the normalized range
    pub z: f32,
}

/// Weighting by normalized depth and the dominant color channel.
///
/// The color is un-premultiplied before the channel maximum is taken, then
/// re-premultiplied on output. An alpha of zero makes that division produce
/// non-finite channels which end up in the accumulation output; fully
/// transparent fragments are expected to have been discarded by the caller,
/// and the hazard is propagated rather than guarded here.
///
/// Not reachable through [`transparent_color_output`](fn.transparent_color_output.html);
/// kept as an alternative for pipelines that select their weighting
/// explicitly via [`WeightFunction`](enum.WeightFunction.html).
pub fn weighted_normalized_depth(color: RGBAf32Color, z: f32) -> TransparentOutput {
    let alpha = color.get_alpha();
    let color = color.unpremultiply();

    let depth_weight = clamp(0.001 / (1e-5 + z.powi(4)), 1e-2, 3e3);
    let channel_weight = (color.max_channel() * alpha).min(1.0).max(alpha);
    let weight = saturate(channel_weight * depth_weight);

    TransparentOutput {
        accumulation: color.premultiply() * weight,
        coverage: alpha,
    }
}

/// Weighting by camera-space depth and a tunable factor, giving precedence
/// to nearer surfaces.
///
/// The color is used as supplied; the caller decides whether it is
/// premultiplied. `linear_z` is expected to be negative so that its
/// reciprocal flips positive. Zero depth is not guarded: the division
/// overflows to infinity and lands on a clamp bound, or turns into NaN when
/// alpha is also zero, in which case it propagates into the output.
pub fn weighted_linear_depth(color: RGBAf32Color, linear_z: f32, weight_factor: f32) -> TransparentOutput {
    let alpha = color.get_alpha();

    let weight = clamp((-1.0 / linear_z) * alpha * weight_factor * 10.0, 0.01, 10.0);

    TransparentOutput {
        accumulation: color * weight,
        coverage: alpha,
    }
}

/// No weighting at all; the premultiplied input color is passed through and
/// the coverage output is zero, which leaves the inverse-alpha target
/// untouched. This is the non-OIT fallback path.
#[inline]
pub fn premultiplied_passthrough(color: RGBAf32Color) -> TransparentOutput {
    TransparentOutput {
        accumulation: color,
        coverage: 0.0,
    }
}

/// The closed set of weighting strategies.
///
/// Meant to be chosen once when a pipeline is built, not per fragment; the
/// build-time default is [`ACTIVE`](#associatedconstant.ACTIVE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightFunction {
    /// [`weighted_normalized_depth`](fn.weighted_normalized_depth.html)
    NormalizedDepth,
    /// [`weighted_linear_depth`](fn.weighted_linear_depth.html)
    LinearDepth,
    /// [`premultiplied_passthrough`](fn.premultiplied_passthrough.html)
    Passthrough,
}

impl WeightFunction {
    /// The weight function bound to `transparent_color_output` in this build
    #[cfg(feature = "oit")]
    pub const ACTIVE: WeightFunction = WeightFunction::LinearDepth;

    /// The weight function bound to `transparent_color_output` in this build
    #[cfg(not(feature = "oit"))]
    pub const ACTIVE: WeightFunction = WeightFunction::Passthrough;

    /// Resolve a single fragment with this weight function.
    ///
    /// `weight_factor` is a uniform tuning input; only the linear-depth
    /// weighting reads it.
    pub fn resolve(&self, fragment: TransparentFragment, weight_factor: f32) -> TransparentOutput {
        match *self {
            WeightFunction::NormalizedDepth => weighted_normalized_depth(fragment.color, fragment.z),
            WeightFunction::LinearDepth => weighted_linear_depth(fragment.color, fragment.linear_z, weight_factor),
            WeightFunction::Passthrough => premultiplied_passthrough(fragment.color),
        }
    }
}

/// Fixed resolver call site for transparent surface rasterization.
///
/// With the `oit` cargo feature this is [`weighted_linear_depth`](fn.weighted_linear_depth.html);
/// without it, [`premultiplied_passthrough`](fn.premultiplied_passthrough.html).
/// The signature carries all inputs regardless of variant so call sites are
/// independent of the configuration.
#[cfg(feature = "oit")]
#[inline(always)]
pub fn transparent_color_output(color: RGBAf32Color, linear_z: f32, _z: f32, weight_factor: f32) -> TransparentOutput {
    weighted_linear_depth(color, linear_z, weight_factor)
}

/// Fixed resolver call site for transparent surface rasterization.
///
/// With the `oit` cargo feature this is [`weighted_linear_depth`](fn.weighted_linear_depth.html);
/// without it, [`premultiplied_passthrough`](fn.premultiplied_passthrough.html).
/// The signature carries all inputs regardless of variant so call sites are
/// independent of the configuration.
#[cfg(not(feature = "oit"))]
#[inline(always)]
pub fn transparent_color_output(color: RGBAf32Color, _linear_z: f32, _z: f32, _weight_factor: f32) -> TransparentOutput {
    premultiplied_passthrough(color)
}

/// Resolve a whole buffer of transparent fragments in parallel.
///
/// Fragments are fully independent, so no execution order is guaranteed;
/// outputs line up with their inputs.
pub fn resolve_buffer(weight: WeightFunction, weight_factor: f32, fragments: &[TransparentFragment]) -> Vec<TransparentOutput> {
    fragments.par_iter()
             .map(|fragment| weight.resolve(*fragment, weight_factor))
             .collect()
}
