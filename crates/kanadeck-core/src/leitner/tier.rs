use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Number of proficiency tiers in every scheduling domain.
pub const TIER_COUNT: usize = 5;

/// One of the five Leitner boxes, 1 (newest) through 5 (mastered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    pub const ONE: Tier = Tier(1);
    pub const TWO: Tier = Tier(2);
    pub const THREE: Tier = Tier(3);
    pub const FOUR: Tier = Tier(4);
    pub const FIVE: Tier = Tier(5);

    pub const ALL: [Tier; TIER_COUNT] = [Tier::ONE, Tier::TWO, Tier::THREE, Tier::FOUR, Tier::FIVE];

    pub fn new(n: u8) -> Option<Self> {
        (1..=TIER_COUNT as u8).contains(&n).then_some(Tier(n))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based position within the tier array.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The tier a correct answer promotes to. Tier 5 is absorbing.
    pub fn next(self) -> Tier {
        Tier((self.0 + 1).min(TIER_COUNT as u8))
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::ONE
    }
}

impl TryFrom<u8> for Tier {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Tier::new(n).ok_or(ValidationError::TierOutOfRange(n))
    }
}

impl std::str::FromStr for Tier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s.trim().parse().map_err(|_| ValidationError::InvalidValue {
            field: "tier".into(),
            message: format!("'{s}' is not a number"),
        })?;
        Tier::try_from(n)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        Tier::new(n).ok_or_else(|| serde::de::Error::custom(format!("tier {n} out of range")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_saturates_at_five() {
        assert_eq!(Tier::ONE.next(), Tier::TWO);
        assert_eq!(Tier::FOUR.next(), Tier::FIVE);
        assert_eq!(Tier::FIVE.next(), Tier::FIVE);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Tier::new(0).is_none());
        assert!(Tier::new(6).is_none());
        assert_eq!(Tier::new(3).map(Tier::index), Some(2));
    }

    #[test]
    fn parses_and_serializes_as_integer() {
        assert_eq!("4".parse::<Tier>().unwrap(), Tier::FOUR);
        assert!("9".parse::<Tier>().is_err());
        assert!("x".parse::<Tier>().is_err());
        assert_eq!(serde_json::to_string(&Tier::TWO).unwrap(), "2");
        assert!(serde_json::from_str::<Tier>("7").is_err());
    }
}
