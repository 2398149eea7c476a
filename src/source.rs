//! The card source trait.

use alloc::sync::Arc;

use crate::card::Card;
use crate::error::{MergeError, ProfileError};
use crate::profile::GameProfile;

/// A shuffleable source of cards.
pub trait CardSource {
    /// Binds a game profile, replacing the active card values.
    ///
    /// Cards already drawn keep the values they were drawn with. Binding does
    /// not reshuffle and does not move the draw position.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lacks a value for some card.
    fn for_game(&mut self, profile: Arc<GameProfile>) -> Result<(), ProfileError>;

    /// Shuffles all cards back into the source using `iterations` passes.
    ///
    /// An `iterations` of 0 is treated as 1.
    fn shuffle(&mut self, iterations: u32);

    /// Draws the next card, or `None` once every card has been drawn.
    fn draw(&mut self) -> Option<Card>;

    /// Merges another source into this one.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not support merging.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>
    where
        Self: Sized;
}
