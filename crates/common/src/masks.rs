//! Keystroke masks for the card fields. Each takes whatever the input box
//! currently holds and returns the value the box should show instead.

pub const CARD_DIGITS: usize = 16;
pub const EXPIRATION_DIGITS: usize = 4;
pub const CVV_DIGITS: usize = 3;

fn digits(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars().filter(|c| c.is_ascii_digit())
}

/// `"4242424242424242"` -> `"4242 4242 4242 4242"`
pub fn card_number(raw: &str) -> String {
    let mut out = String::with_capacity(CARD_DIGITS + 3);
    for (i, c) in digits(raw).take(CARD_DIGITS).enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn holder_name(raw: &str) -> String {
    raw.to_uppercase()
}

/// `"1229"` -> `"12/29"`. The slash only appears once a third digit exists.
pub fn expiration(raw: &str) -> String {
    let mut out = String::with_capacity(EXPIRATION_DIGITS + 1);
    for (i, c) in digits(raw).take(EXPIRATION_DIGITS).enumerate() {
        if i == 2 {
            out.push('/');
        }
        out.push(c);
    }
    out
}

pub fn cvv(raw: &str) -> String {
    digits(raw).take(CVV_DIGITS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_by_four() {
        assert_eq!(card_number(""), "");
        assert_eq!(card_number("4"), "4");
        assert_eq!(card_number("4242"), "4242");
        assert_eq!(card_number("42424"), "4242 4");
        assert_eq!(card_number("4242424242424242"), "4242 4242 4242 4242");
    }

    #[test]
    fn card_number_truncates_to_sixteen_digits() {
        let all: String = "0123456789".repeat(3);
        for n in 0..=all.len() {
            let masked = card_number(&all[..n]);
            let kept: String = masked.chars().filter(|c| *c != ' ').collect();
            assert_eq!(kept, all[..n.min(16)]);
            assert!(masked.split(' ').all(|g| g.len() <= 4));
            assert!(!masked.contains("  "));
            assert!(masked.len() <= 19);
        }
    }

    #[test]
    fn card_number_strips_and_regroups_existing_mask() {
        assert_eq!(card_number("4242 4242-42a42"), "4242 4242 4242");
        // Re-masking a masked value is stable.
        assert_eq!(card_number("4242 4242 4242 4242"), "4242 4242 4242 4242");
    }

    #[test]
    fn holder_name_uppercases_verbatim() {
        assert_eq!(holder_name("jane doe 3rd!"), "JANE DOE 3RD!");
        assert_eq!(holder_name("josé"), "JOSÉ");
    }

    #[test]
    fn expiration_inserts_one_slash() {
        assert_eq!(expiration("1"), "1");
        assert_eq!(expiration("12"), "12");
        assert_eq!(expiration("122"), "12/2");
        assert_eq!(expiration("1229"), "12/29");
        assert_eq!(expiration("12/29"), "12/29");
        assert_eq!(expiration("122999"), "12/29");
        for raw in ["123", "1234", "98765", "12/3"] {
            let masked = expiration(raw);
            assert_eq!(masked.matches('/').count(), 1);
            assert_eq!(masked.find('/'), Some(2));
        }
    }

    #[test]
    fn cvv_keeps_digits() {
        assert_eq!(cvv("1a2 3"), "123");
        assert_eq!(cvv("abc"), "");
    }

    #[test]
    fn cvv_stops_at_three_digits() {
        assert_eq!(cvv("12345"), "123");
        assert_eq!(cvv("9 8x7 6"), "987");
    }
}
