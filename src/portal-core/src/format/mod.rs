//! Number rendering for amounts shown to players and admins.
use candid::Nat;
use rust_decimal::Decimal;

/// Inserts `,` between groups of three digits: `1234567` becomes `1,234,567`.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_amount(amount: u64) -> String {
    group_digits(&amount.to_string())
}

pub fn format_signed(amount: i64) -> String {
    let grouped = group_digits(&amount.unsigned_abs().to_string());
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `1234.5` becomes `1,234.5`; at most three fraction digits are kept.
pub fn format_decimal(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{}.{frac}", group_digits(int_part)),
        None => format!("{sign}{}", group_digits(int_part)),
    }
}

/// `KSh 15,035`
pub fn format_kes(amount: u64) -> String {
    format!("KSh {}", format_amount(amount))
}

/// Balances are shown with two decimals: `15,000.00`.
pub fn format_balance(balance: &Nat) -> String {
    format!("{}.00", group_digits(&balance.0.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_digits(""), "");
        assert_eq!(group_digits("7"), "7");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("15035"), "15,035");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[test]
    fn formats_signed_amounts() {
        assert_eq!(format_signed(-2450), "-2,450");
        assert_eq!(format_signed(2450), "2,450");
        assert_eq!(format_signed(0), "0");
    }

    #[test]
    fn formats_decimals() {
        assert_eq!(format_decimal(Decimal::new(12345, 1)), "1,234.5");
        assert_eq!(format_decimal(Decimal::from(100)), "100");
        assert_eq!(format_decimal(Decimal::new(123456, 4)), "12.346");
        assert_eq!(format_decimal(Decimal::new(-10000, 0)), "-10,000");
    }

    #[test]
    fn formats_currency_and_balances() {
        assert_eq!(format_kes(8687), "KSh 8,687");
        assert_eq!(format_balance(&Nat::from(1_500_000u64)), "1,500,000.00");
        assert_eq!(format_balance(&Nat::from(0u64)), "0.00");
    }
}
