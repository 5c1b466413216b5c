//! Format - Formatting Utilities

use chrono::{DateTime, Local, Utc};

/// Format a UTC datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a power value with an adaptive unit (W / kW / MW)
pub fn format_power(watts: f64) -> String {
    const KW: f64 = 1_000.0;
    const MW: f64 = 1_000_000.0;

    if watts.abs() >= MW {
        format!("{:.2} MW", watts / MW)
    } else if watts.abs() >= KW {
        format!("{:.1} kW", watts / KW)
    } else {
        format!("{watts:.0} W")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_power_units() {
        assert_eq!(format_power(0.0), "0 W");
        assert_eq!(format_power(850.0), "850 W");
        assert_eq!(format_power(12_500.0), "12.5 kW");
        assert_eq!(format_power(1_957_000.0), "1.96 MW");
    }
}
