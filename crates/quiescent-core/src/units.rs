//! Resistance combination and display helpers.

/// Parallel combination of two resistances (ohms).
pub fn parallel(a: f64, b: f64) -> f64 {
    a * b / (a + b)
}

/// Parallel combination of three resistances (ohms).
pub fn parallel3(a: f64, b: f64, c: f64) -> f64 {
    1.0 / (1.0 / a + 1.0 / b + 1.0 / c)
}

/// Round to two decimals, the precision component labels are rendered at.
pub fn round_centi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a resistance with an engineering prefix, e.g. `15.5 kΩ`.
pub fn format_ohms(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e6 {
        (value / 1e6, "MΩ")
    } else if abs >= 1e3 {
        (value / 1e3, "kΩ")
    } else {
        (value, "Ω")
    };
    format!("{} {}", round_centi(scaled), suffix)
}
