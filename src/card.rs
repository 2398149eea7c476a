//! Card types and the suit and wild-group records they are resolved from.

use alloc::string::String;
use core::fmt;

/// Card suit, described by a name and a display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suit {
    /// The suit name, e.g. `"Hearts"`.
    pub name: String,
    /// The suit symbol, e.g. `"♥"`.
    pub symbol: String,
}

impl Suit {
    /// Creates a new suit.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.name)
    }
}

/// A block of wild cards that belong to no suit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildGroup {
    /// The label used as both figure and suit of the cards, e.g. `"Wild+4"`.
    pub label: String,
    /// The display symbol.
    pub symbol: String,
    /// How many cards of this kind are in the deck.
    pub count: usize,
}

impl WildGroup {
    /// Creates a new wild group.
    ///
    /// Note: a zero count is accepted here but rejected when the group is
    /// used to build a [`DeckDefinition`](crate::DeckDefinition).
    #[must_use]
    pub fn new(label: impl Into<String>, symbol: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
            count,
        }
    }
}

impl fmt::Display for WildGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.label)
    }
}

/// A card drawn from a deck.
///
/// The value is copied from the game profile bound to the deck at the time
/// the card was drawn; binding another profile later does not change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Position of the card in the deck's unshuffled index space.
    pub index: usize,
    /// The figure label, or the group label for wild cards.
    pub figure: String,
    /// The suit name, or the group label for wild cards.
    pub suit: String,
    /// The suit or wild group symbol.
    pub symbol: String,
    /// Point value under the deck's game profile (0 without a profile).
    pub value: f64,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.figure)
    }
}
