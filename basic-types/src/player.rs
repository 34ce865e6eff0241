//! A player id abstraction.

use crate::errors::InvalidPlayerId;
use std::{
    fmt,
    fmt::{Debug, Display, Formatter},
    hash::Hash,
    str::FromStr,
};

/// Represents the identifier of a player participating in a sharing or reconstruction.
///
/// Player ids are arbitrary non-empty strings; uniqueness among a set of players is enforced
/// by whatever mapping structure holds them (e.g. the keys of a `HashMap`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl FromStr for PlayerId {
    type Err = InvalidPlayerId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidPlayerId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(InvalidPlayerId(value));
        }
        Ok(Self(value))
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for PlayerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice")]
    #[case("b")]
    #[case("player-20")]
    #[case("椿")]
    fn parses_nonempty_strings(#[case] input: &str) {
        let id: PlayerId = input.parse().unwrap();
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn rejects_empty_strings() {
        assert!("".parse::<PlayerId>().is_err());
        assert!(PlayerId::try_from(String::new()).is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a: PlayerId = "a".parse().unwrap();
        let b: PlayerId = "b".parse().unwrap();
        assert!(a < b);
    }
}
