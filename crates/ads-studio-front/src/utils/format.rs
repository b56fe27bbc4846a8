pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = group_thousands((cents / 100).unsigned_abs());
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, whole, (cents % 100).unsigned_abs())
}

pub fn format_count(count: u64) -> String {
    group_thousands(count)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn format_dimensions(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        "—".to_string()
    } else {
        format!("{}×{}", width, height)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(3120.5), "$3,120.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-12.345), "-$12.35");
    }

    #[test]
    fn test_count() {
        assert_eq!(format_count(1_250_000), "1,250,000");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_string("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(format_dimensions(1080, 1920), "1080×1920");
        assert_eq!(format_dimensions(0, 1920), "—");
    }
}
