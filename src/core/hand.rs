//! Hands and finger counts.
//!
//! A hand holds between 0 and 4 fingers. Any addition that reaches 5 or more
//! wraps modulo 5, so a sum that is an exact multiple of 5 kills the hand.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of finger values a hand can hold (0 through 4).
pub const HAND_MODULUS: u8 = 5;

/// Positional identity of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Both hands, left first.
    pub const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Left => write!(f, "L"),
            Hand::Right => write!(f, "R"),
        }
    }
}

/// Finger count on one hand, always in `0..=4`.
///
/// ```
/// use tapnswap::core::HandValue;
///
/// let three = HandValue::new(3).unwrap();
/// let two = HandValue::new(2).unwrap();
/// assert!((three + two).is_dead());
/// assert!(HandValue::new(5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HandValue(u8);

impl HandValue {
    /// A dead hand.
    pub const DEAD: HandValue = HandValue(0);

    /// The starting count of every hand.
    pub const ONE: HandValue = HandValue(1);

    /// Create a hand value, rejecting counts above 4.
    pub fn new(value: u8) -> Result<Self> {
        if value < HAND_MODULUS {
            Ok(Self(value))
        } else {
            Err(Error::InvalidHand(value))
        }
    }

    /// Raw finger count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True when the hand holds no fingers.
    #[must_use]
    pub const fn is_dead(self) -> bool {
        self.0 == 0
    }

    /// True when the hand holds at least one finger.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.0 != 0
    }
}

impl std::ops::Add for HandValue {
    type Output = HandValue;

    /// Add fingers modulo 5.
    fn add(self, other: HandValue) -> HandValue {
        HandValue((self.0 + other.0) % HAND_MODULUS)
    }
}

impl TryFrom<u8> for HandValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<HandValue> for u8 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for HandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's two hands, positionally distinguished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hands {
    pub left: HandValue,
    pub right: HandValue,
}

impl Default for Hands {
    fn default() -> Self {
        Self::STARTING
    }
}

impl Hands {
    /// One finger on each hand.
    pub const STARTING: Hands = Hands {
        left: HandValue::ONE,
        right: HandValue::ONE,
    };

    /// Both hands dead.
    pub const DEFEATED: Hands = Hands {
        left: HandValue::DEAD,
        right: HandValue::DEAD,
    };

    /// Create a pair from typed values.
    #[must_use]
    pub const fn new(left: HandValue, right: HandValue) -> Self {
        Self { left, right }
    }

    /// Create a pair from raw counts.
    pub fn from_counts(left: u8, right: u8) -> Result<Self> {
        Ok(Self {
            left: HandValue::new(left)?,
            right: HandValue::new(right)?,
        })
    }

    /// Value held by one hand.
    #[must_use]
    pub const fn get(&self, hand: Hand) -> HandValue {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    /// Replace the value held by one hand.
    #[must_use]
    pub const fn with(self, hand: Hand, value: HandValue) -> Self {
        match hand {
            Hand::Left => Self { left: value, ..self },
            Hand::Right => Self { right: value, ..self },
        }
    }

    /// Total fingers across both hands (0..=8).
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.left.0 + self.right.0
    }

    /// Left and right exchanged.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// True when both hands are dead.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.left.is_dead() && self.right.is_dead()
    }

    /// Hands still holding fingers, left first.
    pub fn alive_hands(&self) -> impl Iterator<Item = Hand> + '_ {
        Hand::BOTH.into_iter().filter(move |&h| self.get(h).is_alive())
    }
}

impl std::fmt::Display for Hands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}
