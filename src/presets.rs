//! Built-in national deck styles and game profiles.

use alloc::vec;

use crate::definition::{DeckDefinition, Style};
use crate::error::DefinitionError;
use crate::profile::GameProfile;

/// Italian regional deck: 4 suits of 10 figures, no wild cards.
pub const ITALIAN: Style<'static> = Style {
    name: "Italian",
    suits: &["Coins", "Cups", "Swords", "Clubs"],
    symbols: &["\u{1f4b0}", "\u{1f3c6}", "\u{2694}", "\u{1f38b}"],
    figures: &[
        "2", "3", "4", "5", "6", "7", "Knave", "Knight", "King", "Ace",
    ],
    wild: &[],
};

/// French deck: 4 suits of 13 figures and 2 jokers.
pub const FRENCH: Style<'static> = Style {
    name: "French",
    suits: &["Hearts", "Spades", "Diamonds", "Clubs"],
    symbols: &["\u{2665}", "\u{2660}", "\u{2666}", "\u{2663}"],
    figures: &[
        "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
    ],
    wild: &[("Wild Card", "\u{1f0cf}", 2)],
};

/// Uno deck: 4 colors of 25 cards, 4 wild and 4 wild draw four.
pub const UNO: Style<'static> = Style {
    name: "Uno",
    suits: &["Red", "Yellow", "Green", "Blue"],
    symbols: &["\u{1f534}", "\u{1f49b}", "\u{1f49a}", "\u{1f499}"],
    figures: &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", //
        "1", "2", "3", "4", "5", "6", "7", "8", "9", //
        "Skip", "Reverse", "+2", "Skip", "Reverse", "+2",
    ],
    wild: &[("Wild", "\u{26ab}", 4), ("Wild+4", "\u{26ab}", 4)],
};

/// Returns the Italian deck definition.
///
/// # Errors
///
/// Never fails for the built-in table; the error is kept so callers handle
/// every definition the same way.
pub fn italian() -> Result<DeckDefinition, DefinitionError> {
    DeckDefinition::from_style(&ITALIAN)
}

/// Returns the French deck definition.
///
/// # Errors
///
/// Never fails for the built-in table.
pub fn french() -> Result<DeckDefinition, DefinitionError> {
    DeckDefinition::from_style(&FRENCH)
}

/// Returns the Uno deck definition.
///
/// # Errors
///
/// Never fails for the built-in table.
pub fn uno() -> Result<DeckDefinition, DefinitionError> {
    DeckDefinition::from_style(&UNO)
}

/// Returns the Briscola profile for the Italian deck.
///
/// Ace 11, three 10, king 4, knight 3, knave 2, everything else 0; a full
/// deck is worth 120 points.
#[must_use]
pub fn briscola() -> GameProfile {
    GameProfile::new(
        "Briscola",
        vec![0.0, 10.0, 0.0, 0.0, 0.0, 0.0, 2.0, 3.0, 4.0, 11.0],
    )
}
