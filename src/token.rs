//! Command tokens and sequence parsing

use std::fmt;

/// Prefix marking a token as a pure delay directive
const DELAY_PREFIX: &str = "DELAY|";

/// One step of a command sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandToken {
    /// Pause for the given number of milliseconds, no network activity
    Delay(u64),
    /// Transmit an opaque key code to the infrared daemon
    Send(String),
}

impl CommandToken {
    /// Parse a single token.
    ///
    /// A token is a delay iff it starts with the literal `DELAY|`; the
    /// remainder is read as base-10 milliseconds. A count that does not
    /// parse as a `u64` counts as zero, whether malformed or past the
    /// `u64` range. Everything else is an opaque key to transmit.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(DELAY_PREFIX) {
            Some(ms) => CommandToken::Delay(ms.parse().unwrap_or(0)),
            None => CommandToken::Send(raw.to_string()),
        }
    }

    /// The key code, if this is a send token
    pub fn key(&self) -> Option<&str> {
        match self {
            CommandToken::Send(key) => Some(key),
            CommandToken::Delay(_) => None,
        }
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandToken::Delay(ms) => write!(f, "{}{}", DELAY_PREFIX, ms),
            CommandToken::Send(key) => write!(f, "{}", key),
        }
    }
}

/// An ordered list of tokens; list order is execution order
pub type CommandSequence = Vec<CommandToken>;

/// Parse a whole sequence from raw token strings, preserving order
pub fn parse_sequence<I, S>(raw: I) -> CommandSequence
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|s| CommandToken::parse(s.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay_token() {
        assert_eq!(CommandToken::parse("DELAY|250"), CommandToken::Delay(250));
        assert_eq!(CommandToken::parse("DELAY|0"), CommandToken::Delay(0));
    }

    #[test]
    fn test_parse_send_token() {
        assert_eq!(
            CommandToken::parse("KEY_POWER"),
            CommandToken::Send("KEY_POWER".into())
        );
        // Prefix must match exactly, case included
        assert_eq!(
            CommandToken::parse("delay|100"),
            CommandToken::Send("delay|100".into())
        );
    }

    #[test]
    fn test_malformed_delay_count_is_zero() {
        assert_eq!(CommandToken::parse("DELAY|abc"), CommandToken::Delay(0));
        assert_eq!(CommandToken::parse("DELAY|"), CommandToken::Delay(0));
    }

    #[test]
    fn test_out_of_range_delay_count_is_zero() {
        assert_eq!(
            CommandToken::parse("DELAY|99999999999999999999999"),
            CommandToken::Delay(0)
        );
    }

    #[test]
    fn test_parse_sequence_preserves_order() {
        let seq = parse_sequence(["KEY_POWER", "DELAY|500", "KEY_HDMI1"]);
        assert_eq!(
            seq,
            vec![
                CommandToken::Send("KEY_POWER".into()),
                CommandToken::Delay(500),
                CommandToken::Send("KEY_HDMI1".into()),
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(CommandToken::Delay(250).to_string(), "DELAY|250");
        assert_eq!(
            CommandToken::Send("KEY_MUTE".into()).to_string(),
            "KEY_MUTE"
        );
    }
}
