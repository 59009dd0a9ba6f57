//! Blending operators for the transparency targets

use std::marker::PhantomData;

use ::color::RGBAf32Color;

/// Defines some kind of blending function over a single target component
pub trait Blend<T>: Send + Sync {
    /// The first parameter passed to the blend function is the value resolved
    /// for the current fragment, the source value.
    ///
    /// The second parameter passed to the blend function is the existing value
    /// in the target to blend over.
    ///
    /// You can use the tool [Here](http://www.andersriggelsen.dk/glblendfunc.php) to see how OpenGL does blending,
    /// and choose how you want to blend values.
    fn blend(&self, a: T, b: T) -> T;
}

impl<'a, B, T> Blend<T> for &'a B where B: Blend<T> {
    fn blend(&self, a: T, b: T) -> T {
        (**self).blend(a, b)
    }
}

impl<T> Blend<T> for () {
    #[inline(always)]
    fn blend(&self, a: T, _: T) -> T { a }
}

/// `(ONE, ONE)` additive blending, the contract of the accumulation target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Additive;

impl Blend<RGBAf32Color> for Additive {
    #[inline(always)]
    fn blend(&self, a: RGBAf32Color, b: RGBAf32Color) -> RGBAf32Color { a + b }
}

impl Blend<f32> for Additive {
    #[inline(always)]
    fn blend(&self, a: f32, b: f32) -> f32 { a + b }
}

/// `(ZERO, ONE_MINUS_SRC_ALPHA)` blending, the contract of the coverage target.
///
/// The source value contributes nothing directly; it only attenuates what is
/// already present, so a zero source leaves the target untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coverage;

impl Blend<f32> for Coverage {
    #[inline(always)]
    fn blend(&self, a: f32, b: f32) -> f32 { b * (1.0 - a) }
}

/// Generic blend structure that can accept a user-defined blend function at compile time
pub struct GenericBlend<T, F> {
    blend_func: F,
    component: PhantomData<T>,
}

impl<T, F> GenericBlend<T, F> {
    pub fn new(blend_func: F) -> GenericBlend<T, F> where F: Fn(T, T) -> T + Send + Sync + 'static {
        GenericBlend { blend_func, component: PhantomData }
    }
}

impl<T, F> Blend<T> for GenericBlend<T, F> where T: Send + Sync,
                                                 F: Fn(T, T) -> T + Send + Sync + 'static {
    fn blend(&self, a: T, b: T) -> T {
        (self.blend_func)(a, b)
    }
}
