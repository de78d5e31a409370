//! Decimal-degree and degree-minute-second conversions

/// Formats a decimal degree as `<hemisphere> <deg>° <min>' <sec>"`.
/// The hemisphere letter is N/S for latitudes and E/W for longitudes;
/// negative input is negated and encoded in the letter.
pub fn decimal_degree_to_dms(degree: f64, is_latitude: bool) -> String {
    let (hemisphere, degree) = if is_latitude {
        if degree < 0.0 { ("S", -degree) } else { ("N", degree) }
    } else if degree < 0.0 {
        ("W", -degree)
    } else {
        ("E", degree)
    };

    let whole = degree.trunc();
    let minutes = ((degree - whole) * 60.0).trunc();
    let seconds = (degree - whole - minutes / 60.0) * 3600.0;

    format!("{} {}\u{b0} {}' {}\"", hemisphere, whole as i64, minutes as i64, seconds)
}

/// Composes degree, minute and second components back into a decimal
/// degree: `d + m/60 + s/3600`
pub fn dms_to_decimal_degree(degree: f64, minute: f64, second: f64) -> f64 {
    degree + minute / 60.0 + second / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_northern_latitude() {
        let formatted = decimal_degree_to_dms(52.5, true);
        assert!(formatted.starts_with("N 52\u{b0} 30' "), "got {}", formatted);
    }

    #[test]
    fn test_southern_latitude_negates() {
        let formatted = decimal_degree_to_dms(-33.8688, true);
        assert!(formatted.starts_with("S 33\u{b0} "), "got {}", formatted);
    }

    #[test]
    fn test_longitude_hemispheres() {
        assert!(decimal_degree_to_dms(13.3778, false).starts_with("E 13\u{b0}"));
        assert!(decimal_degree_to_dms(-74.006, false).starts_with("W 74\u{b0}"));
    }

    #[test]
    fn test_composition_inverse() {
        assert!((dms_to_decimal_degree(52.0, 30.0, 0.0) - 52.5).abs() < 1e-12);
        assert!((dms_to_decimal_degree(13.0, 22.0, 40.08) - 13.3778).abs() < 1e-9);
    }

    #[test]
    fn test_component_round_trip() {
        let degree: f64 = 52.51627;
        let whole = degree.trunc();
        let minutes = ((degree - whole) * 60.0).trunc();
        let seconds = (degree - whole - minutes / 60.0) * 3600.0;
        let back = dms_to_decimal_degree(whole, minutes, seconds);
        assert!((back - degree).abs() < 1e-9);
    }
}
