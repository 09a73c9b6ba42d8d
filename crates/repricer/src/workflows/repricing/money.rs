/// Canonical 2-decimal rounding for every monetary and percentage value the
/// engine produces. `f64::round` rounds half away from zero, which is the
/// behavior the persisted prices were built on; the usual binary-float edge
/// cases at exact `.005` ties are accepted, not corrected.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
