//! Uniform random sources consumed by the sampler.
//!
//! The sampler never owns a seed. It pulls `f32` values in `[0, 1)` from a
//! [`UniformSource`], which is implemented for every [`Rng`] and for the
//! replay/recording helpers below.
use rand::Rng;

/// Source of uniformly distributed `f32` values in `[0, 1)`.
///
/// Every [`Rng`] is a source, so a seeded `StdRng` can be handed over
/// directly.
pub trait UniformSource {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Returns an index in `0..len`; `len` must be non-zero.
    ///
    /// The default scales one [`next_unit`](Self::next_unit) draw, which only
    /// reaches every index while `len <= 2^24`. Sources with wider output
    /// should override it.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index called with an empty range");
        ((self.next_unit() as f64 * len as f64) as usize).min(len - 1)
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        unit_f32(self.next_u32())
    }

    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        index_from_bits(self.next_u64(), len)
    }
}

/// Maps the upper 24 bits of `bits` onto `[0, 1)`.
#[inline]
pub(crate) fn unit_f32(bits: u32) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (bits >> 8) as f32 * SCALE
}

/// Widening multiply of 64 random bits onto `0..len`.
#[inline]
pub(crate) fn index_from_bits(bits: u64, len: usize) -> usize {
    ((bits as u128 * len as u128) >> 64) as usize
}

/// Largest `f32` strictly below a positive finite `side`.
#[inline]
pub(crate) fn just_below(side: f32) -> f32 {
    debug_assert!(side.is_finite() && side > 0.0, "side {side} must be positive");
    f32::from_bits(side.to_bits() - 1)
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty list yields `0.0` forever.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f32>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<f32>) -> Self {
        let upper = just_below(1.0);
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, upper) })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ReplaySource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// Wraps another source and records every value it hands out.
#[derive(Debug, Clone)]
pub struct RecordingSource<S> {
    inner: S,
    recorded: Vec<f32>,
}

impl<S: UniformSource> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            recorded: Vec::new(),
        }
    }

    pub fn recorded(&self) -> &[f32] {
        &self.recorded
    }

    /// Consumes the wrapper, returning the inner source and the recorded draws.
    pub fn into_parts(self) -> (S, Vec<f32>) {
        (self.inner, self.recorded)
    }
}

impl<S: UniformSource> UniformSource for RecordingSource<S> {
    fn next_unit(&mut self) -> f32 {
        let v = self.inner.next_unit();
        self.recorded.push(v);
        v
    }
}
