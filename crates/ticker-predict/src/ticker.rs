use std::fmt;

/// A user-supplied ticker symbol, trimmed and known to be non-empty.
///
/// No format validation happens beyond the emptiness check; the prediction
/// endpoint is the one that decides whether a symbol exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Trim `input` and return `None` when nothing is left.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let ticker = Ticker::parse("  AAPL \t\n").unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert_eq!(Ticker::parse(""), None);
        assert_eq!(Ticker::parse("   "), None);
        assert_eq!(Ticker::parse("\t\r\n"), None);
    }

    #[test]
    fn test_parse_keeps_inner_text_verbatim() {
        // Lowercase and inner spaces are the endpoint's problem.
        let ticker = Ticker::parse(" brk b ").unwrap();
        assert_eq!(ticker.to_string(), "brk b");
    }
}
