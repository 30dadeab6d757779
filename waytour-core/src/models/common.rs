/// Alias to a scalar floating type.
///
/// NOTE: prefer `f64` as the default floating type: coordinate deltas can be tiny
/// and switching to `f32` leads to precision issues in tour length comparisons.
pub type Float = f64;

/// Represents a distance.
pub type Distance = Float;
