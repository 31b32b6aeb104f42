/// Filled fraction of a progress bar, clamped to `[0, 1]`. A non-positive
/// `max` reads as empty.
pub fn bar_fraction(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// CSS width for a bar to a tenth of a percent, e.g. `"42.5%"`.
pub fn width_percent(value: f64, max: f64) -> String {
    let tenths = (bar_fraction(value, max) * 1000.0).round();
    format!("{}%", tenths / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(bar_fraction(50.0, 100.0), 0.5);
        assert_eq!(bar_fraction(150.0, 100.0), 1.0);
        assert_eq!(bar_fraction(-3.0, 100.0), 0.0);
        assert_eq!(bar_fraction(3.0, 0.0), 0.0);
        assert_eq!(bar_fraction(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn width_is_percent_text() {
        assert_eq!(width_percent(95.0, 100.0), "95%");
        assert_eq!(width_percent(12.5, 100.0), "12.5%");
    }
}
