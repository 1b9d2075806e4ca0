//! Clamped linear interpolation closures.
//!
//! This module provides [`linear_scale`], a generator that builds a
//! mapping from one numeric range onto another. The returned closure
//! interpolates linearly and clamps its result to the output range, so
//! inputs outside the input range saturate at the nearest output bound.
//!
//! # Examples
//!
//! ```rust
//! use combinars::scale::linear_scale;
//!
//! // Map sensor readings in 5..=10 onto a 0..=10 gauge.
//! let gauge = linear_scale(5.0, 10.0, 0.0, 10.0);
//!
//! assert_eq!(gauge(5.0), 0.0);
//! assert_eq!(gauge(7.5), 5.0);
//! assert_eq!(gauge(10.0), 10.0);
//!
//! // Out-of-range inputs clamp.
//! assert_eq!(gauge(4.0), 0.0);
//! assert_eq!(gauge(11.0), 10.0);
//! ```

/// Builds a clamped linear mapping from an input range to an output range.
///
/// The returned closure computes
///
/// ```text
/// output_min + (output_max - output_min) * (x - input_min) / (input_max - input_min)
/// ```
///
/// and clamps the result to the output range. The clamp bounds are
/// normalized first, so an inverted output range (`output_min >
/// output_max`) clamps correctly instead of collapsing:
///
/// ```rust
/// use combinars::scale::linear_scale;
///
/// // Higher input, lower output.
/// let inverted = linear_scale(0.0, 10.0, 10.0, 0.0);
///
/// assert_eq!(inverted(0.0), 10.0);
/// assert_eq!(inverted(10.0), 0.0);
/// assert_eq!(inverted(-5.0), 10.0); // clamps at the high end
/// assert_eq!(inverted(15.0), 0.0);  // clamps at the low end
/// ```
///
/// # Degenerate Input Range
///
/// `input_min == input_max` makes the interpolation divide by zero; the
/// resulting non-finite value propagates (NaN in, NaN out). The generator
/// does not guard against it.
pub fn linear_scale(
    input_min: f64,
    input_max: f64,
    output_min: f64,
    output_max: f64,
) -> impl Fn(f64) -> f64 {
    let lower = output_min.min(output_max);
    let upper = output_min.max(output_max);

    move |input| {
        let ratio = (input - input_min) / (input_max - input_min);
        let projected = (output_max - output_min).mul_add(ratio, output_min);
        projected.clamp(lower, upper)
    }
}
