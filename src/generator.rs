//! The "produce the next value" seam.

/// A source of values, one per call.
///
/// Implemented by [`crate::WeightedSampler`]; code that only needs a stream of
/// values can take `impl NumberGenerator` instead of a concrete sampler.
pub trait NumberGenerator {
    type Output;

    /// Produce the next value.
    fn next_value(&mut self) -> Self::Output;
}

impl<G: NumberGenerator + ?Sized> NumberGenerator for &mut G {
    type Output = G::Output;

    fn next_value(&mut self) -> Self::Output {
        (**self).next_value()
    }
}

impl<G: NumberGenerator + ?Sized> NumberGenerator for Box<G> {
    type Output = G::Output;

    fn next_value(&mut self) -> Self::Output {
        (**self).next_value()
    }
}
