use std::cmp::Ordering;

/// Compares two `f32` values where `NaN` is treated as the smallest value.
pub(crate) fn nan_safe_f32_cmp(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        // if `partial_cmp` returns None we have at least one NaN
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, _) => Ordering::Less,
            _ => Ordering::Greater,
        }
    })
}

/// Compares two `f32` values in descending order, `NaN`s sort last.
pub(crate) fn nan_safe_f32_cmp_desc(a: &f32, b: &f32) -> Ordering {
    nan_safe_f32_cmp(b, a)
}

/// Rounds a value to the given number of decimal places.
pub(crate) fn round_to(value: f32, places: u32) -> f32 {
    let factor = 10_f32.powi(places as i32);
    (value * factor).round() / factor
}
