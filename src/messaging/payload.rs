//! Message payload parsing.

use alloy::primitives::U256;
use std::fmt;
use std::str::FromStr;

use crate::messaging::types::MessagingError;

/// Ordered sequence of unsigned integers carried by a message.
///
/// Accepts `[1,2]`, `[0x1, 2]`, `["1","2"]`, `1 2`, `1,2` and `[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Vec<U256>);

impl Payload {
    pub fn values(&self) -> &[U256] {
        &self.0
    }
}

impl FromStr for Payload {
    type Err = MessagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => {
                return Err(MessagingError::InvalidPayload {
                    element: trimmed.to_string(),
                    reason: "unbalanced brackets".to_string(),
                })
            }
        };

        inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|raw| raw.trim_matches('"'))
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                if raw.starts_with('-') {
                    return Err(MessagingError::InvalidPayload {
                        element: raw.to_string(),
                        reason: "must be unsigned".to_string(),
                    });
                }
                raw.parse::<U256>().map_err(|e| MessagingError::InvalidPayload {
                    element: raw.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}
