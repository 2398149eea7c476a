//! A deck that can be shared between threads.

use alloc::sync::Arc;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ProfileError;
use crate::profile::GameProfile;
use crate::source::CardSource;
use crate::sync::Mutex;

/// A [`Deck`] behind a mutex.
///
/// Every operation locks the deck for its whole duration, so concurrent
/// callers never see a card twice or skip one.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Draws the next card.
    #[must_use]
    pub fn draw(&self) -> Option<Card> {
        self.deck.lock().draw()
    }

    /// Shuffles the deck with `iterations` passes.
    pub fn shuffle(&self, iterations: u32) {
        self.deck.lock().shuffle(iterations);
    }

    /// Binds a game profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lacks a value for some card.
    pub fn for_game(&self, profile: impl Into<Arc<GameProfile>>) -> Result<(), ProfileError> {
        self.deck.lock().for_game(profile.into())
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().cards_remaining()
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}
