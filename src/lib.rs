//! Configurable playing-card decks with optional `no_std` support.
//!
//! A [`DeckDefinition`] describes the shape of a deck: its suits, its figures
//! and any groups of wild cards. A [`Deck`] turns a definition into a
//! shuffleable sequence of [`Card`]s, valued by an optional [`GameProfile`].
//!
//! # Example
//!
//! ```
//! use deckrs::{CardSource, Deck, presets};
//!
//! let mut deck = Deck::from_definition(presets::french().unwrap(), 42);
//! deck.shuffle(1);
//!
//! let mut drawn = 0;
//! while let Some(card) = deck.draw() {
//!     let _ = card.to_string();
//!     drawn += 1;
//! }
//! assert_eq!(drawn, 54);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod definition;
pub mod error;
pub mod options;
pub mod presets;
pub mod profile;
pub mod shared;
pub mod source;
mod sync;

// Re-export main types
pub use card::{Card, Suit, WildGroup};
pub use deck::Deck;
pub use definition::{DeckDefinition, Style};
pub use error::{DefinitionError, MergeError, ProfileError};
pub use options::DeckOptions;
pub use profile::{GameProfile, WildValue};
pub use shared::SharedDeck;
pub use source::CardSource;
