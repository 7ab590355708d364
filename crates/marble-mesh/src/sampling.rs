//! Uniform sampling of the closed unit interval.

/// Yield `count` evenly spaced samples over `[0, 1]`, both ends included.
///
/// The first sample is exactly `0.0` and, for `count >= 2`, the last is
/// exactly `1.0`. Degenerate counts never divide by zero: `0` yields
/// nothing and `1` yields the single sample `0.0`.
///
/// ```
/// use marble_mesh::sample_unit_interval;
///
/// let samples: Vec<f32> = sample_unit_interval(5).collect();
/// assert_eq!(samples, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn sample_unit_interval(count: u32) -> impl ExactSizeIterator<Item = f32> + Clone {
    let last = count.saturating_sub(1);
    (0..count).map(move |k| {
        if last == 0 {
            0.0
        } else {
            k as f32 / last as f32
        }
    })
}
