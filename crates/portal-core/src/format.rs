//! Display formatting helpers shared by the UI widgets.

use std::time::{Duration, Instant};

/// `1234567.891` -> `"$1,234,567.89"`. Negative amounts put the sign
/// before the dollar sign.
pub fn format_currency(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    // Carry when the fractional part rounds up to a full unit.
    let (whole, cents) = if cents >= 100 {
        (whole + 1, 0)
    } else {
        (whole, cents)
    };
    format!("{}${}.{:02}", sign, group_thousands(whole), cents)
}

/// `2.5` -> `"+2.50%"`, `-1.2` -> `"-1.20%"`. Zero keeps the plus sign.
pub fn format_percent(v: f64) -> String {
    format!("{:+.2}%", v)
}

/// Plain number with thousands separators and no decimals.
pub fn format_number(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(v.abs().round() as u64))
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

/// Coalesces bursts of events: `ready` answers true at most once per
/// `delay` window. Used for terminal resize storms.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    last_fire: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            last_fire: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) < self.delay => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.0), "-$42.00");
    }

    #[test]
    fn currency_carries_rounded_cents() {
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn percent_carries_explicit_sign() {
        assert_eq!(format_percent(2.5), "+2.50%");
        assert_eq!(format_percent(-1.2), "-1.20%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn number_has_no_decimals() {
        assert_eq!(format_number(1234567.4), "1,234,567");
        assert_eq!(format_number(999.6), "1,000");
        assert_eq!(format_number(-1500.0), "-1,500");
    }

    #[test]
    fn debouncer_fires_once_per_window() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(d.ready(t0));
        assert!(!d.ready(t0 + Duration::from_millis(50)));
        assert!(d.ready(t0 + Duration::from_millis(150)));
    }
}
