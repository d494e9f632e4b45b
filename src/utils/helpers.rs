/// Rounds `value` to three decimal places.
///
/// Used wherever the spec calls for `round(x, 3)` before a value is rendered
/// into the result table or the serialized tree.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
