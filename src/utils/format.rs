/// Prints whole numbers without a fractional part, so 300.0 calories read as "300".
pub fn format_number(value: f64) -> String {
    if value.fract() == 0. && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Groups digits by thousands: 12345 -> "12,345".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            result.push(',');
        }
        result.push(digit);
    }
    result
}

pub fn format_liters(value: f64) -> String {
    format!("{value:.2} L")
}

#[cfg(test)]
mod tests {
    use super::{format_liters, format_number, format_thousands};

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(300.), "300");
        assert_eq!(format_number(-25.), "-25");
        assert_eq!(format_number(212.5), "212.5");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(4000), "4,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_liters() {
        assert_eq!(format_liters(1.), "1.00 L");
        assert_eq!(format_liters(0.1 + 0.2), "0.30 L");
    }
}
