//! Pseudo customer identifier backing the `x`/`y` script placeholders.

use rand::Rng;

/// Reserved token resolving to the tens digit of the customer id.
pub const TENS_TOKEN: &str = "x";
/// Reserved token resolving to the units digit of the customer id.
pub const UNITS_TOKEN: &str = "y";

/// Two-digit pseudo customer/session identifier.
///
/// Drawn uniformly from `0..=99` exactly once per run, so every placeholder
/// occurrence in every path of that run identifies the same pseudo customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerId(u8);

impl CustomerId {
    /// Draw a fresh identifier from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..100))
    }

    /// Build a fixed identifier; values are taken modulo 100.
    pub fn from_value(value: u8) -> Self {
        Self(value % 100)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Tens digit, substituted for every `x` token.
    pub fn tens(&self) -> u8 {
        self.0 / 10
    }

    /// Units digit, substituted for every `y` token.
    pub fn units(&self) -> u8 {
        self.0 % 10
    }

    /// Resolve one script token to a concrete digit.
    ///
    /// `x` maps to the tens digit, `y` to the units digit; anything else
    /// must parse as a single decimal digit. `None` marks a malformed token.
    pub fn resolve_token(&self, token: &str) -> Option<u8> {
        match token {
            TENS_TOKEN => Some(self.tens()),
            UNITS_TOKEN => Some(self.units()),
            _ => match token.parse::<u8>() {
                Ok(digit) if digit <= 9 => Some(digit),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_literal_digits_resolve_unchanged() {
        let id = CustomerId::from_value(42);
        for digit in 0..=9u8 {
            assert_eq!(id.resolve_token(&digit.to_string()), Some(digit));
        }
    }

    #[test]
    fn test_placeholders_resolve_to_id_digits() {
        let id = CustomerId::from_value(73);
        assert_eq!(id.tens(), 7);
        assert_eq!(id.units(), 3);
        assert_eq!(id.resolve_token("x"), Some(7));
        assert_eq!(id.resolve_token("y"), Some(3));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let id = CustomerId::from_value(5);
        assert_eq!(id.resolve_token("z"), None);
        assert_eq!(id.resolve_token("12"), None);
        assert_eq!(id.resolve_token(""), None);
        assert_eq!(id.resolve_token("x y"), None);
    }

    #[test]
    fn test_generate_stays_in_range_and_is_seedable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = CustomerId::generate(&mut rng);
            assert!(id.value() <= 99);
            assert!(id.tens() <= 9 && id.units() <= 9);
        }

        let a = CustomerId::generate(&mut StdRng::seed_from_u64(99));
        let b = CustomerId::generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
