//! Weighted Order-Independent Transparency blending
//!
//! [Documentation](https://docs.rs/softblend/)
//!
//! Resolves shaded transparent fragments into the pair of values consumed by
//! a two-target OIT compositing setup: an accumulation color written with
//! `(ONE, ONE)` additive blending, and a coverage value written with
//! `(ZERO, ONE_MINUS_SRC_ALPHA)` blending. A later resolve pass normalizes
//! the accumulation target by the coverage target; that pass is out of scope
//! for this crate.
//!
//! ### Example:
//!
//! ```rust
//! use softblend::{transparent_color_output, RGBAf32Color};
//!
//! let color = RGBAf32Color::new(0.2, 0.4, 0.6, 0.8);
//! let output = transparent_color_output(color, -2.0, 0.5, 1.0);
//!
//! assert_eq!(output.coverage.is_nan(), false);
//! ```
//!
//! ### Current Features:
//!
//! * Three interchangeable weighting functions, with the active one fixed at
//! build time by the `oit` cargo feature.
//! * Closed [`WeightFunction`](resolver/enum.WeightFunction.html) strategy set for
//! pipelines that select a variant once at construction time.
//! * Parallel whole-buffer resolution with Rayon.
//! * Accumulation/coverage target pair enforcing the OIT blend contract.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.

//#![deny(missing_docs)]

extern crate nalgebra;
extern crate num_traits;
extern crate rayon;
extern crate thiserror;

#[cfg(feature = "image_compat")]
extern crate image;

pub mod error;
pub mod utils;
pub mod geometry;
pub mod color;
pub mod blend;
pub mod resolver;
pub mod targets;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{BlendError, BlendResult};
pub use geometry::{Coordinate, Dimensions, HasDimensions};
pub use color::{RGBAf32Color, TransparentColor};
pub use blend::{Additive, Blend, Coverage};
pub use resolver::{premultiplied_passthrough, resolve_buffer, transparent_color_output,
                   weighted_linear_depth, weighted_normalized_depth,
                   TransparentFragment, TransparentOutput, WeightFunction};
pub use targets::AccumulationTargets;
