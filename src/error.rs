//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when building a deck definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The definition has no suits.
    #[error("deck definition has no suits")]
    NoSuits,
    /// The definition has no figures.
    #[error("deck definition has no figures")]
    NoFigures,
    /// Suit names and suit symbols have different lengths.
    #[error("{names} suit names but {symbols} suit symbols")]
    SymbolCountMismatch {
        /// Number of suit names.
        names: usize,
        /// Number of suit symbols.
        symbols: usize,
    },
    /// A wild group has a count of zero.
    #[error("wild group {index} has no cards")]
    EmptyWildGroup {
        /// Position of the group in the definition.
        index: usize,
    },
    /// Wild groups do not split the wild index range into equal blocks.
    #[error("wild group {index} has {count} cards, expected {expected}")]
    UnevenWildGroups {
        /// Position of the offending group.
        index: usize,
        /// Its card count.
        count: usize,
        /// The count of the first group.
        expected: usize,
    },
    /// The total number of cards does not fit in a `usize`.
    #[error("deck definition has too many cards")]
    TooManyCards,
}

/// Errors that can occur when binding a game profile to a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The profile has fewer figure values than the deck has figures.
    #[error("profile has {found} figure values, deck needs {expected}")]
    MissingFigureValues {
        /// Number of figures in the deck.
        expected: usize,
        /// Number of values in the profile.
        found: usize,
    },
    /// The profile has fewer per-group wild values than the deck has groups.
    #[error("profile has {found} wild values, deck needs {expected}")]
    MissingWildValues {
        /// Number of wild groups in the deck.
        expected: usize,
        /// Number of values in the profile.
        found: usize,
    },
}

/// Errors that can occur when merging decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    /// Merging decks is not supported.
    #[error("merging decks is not supported")]
    Unsupported,
}
