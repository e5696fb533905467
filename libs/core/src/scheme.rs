use std::fmt;

use crate::error::BuildError;

/// URI scheme identifying the companion application, e.g. `com.example.app`.
///
/// Accepts `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` and keeps the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    pub fn parse(raw: &str) -> Result<Self, BuildError> {
        if is_valid_scheme(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BuildError::InvalidScheme(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_scheme(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reverse_dns_schemes() {
        for raw in ["com.example.app", "com.kishikawakatsumi.Doorlock", "a", "x-app+v2.1"] {
            assert_eq!(Scheme::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn rejects_empty_and_illegal_characters() {
        for raw in ["", "1app", ".app", "com example", "com/app", "app:", "çom.app", "com_app"] {
            assert_eq!(
                Scheme::parse(raw),
                Err(BuildError::InvalidScheme(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }
}
