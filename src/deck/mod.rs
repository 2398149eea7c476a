//! The deck: a drawable, shuffleable sequence of resolved cards.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::definition::DeckDefinition;
use crate::error::ProfileError;
use crate::options::DeckOptions;
use crate::profile::GameProfile;
use crate::source::CardSource;

mod draw;

/// A deck of cards built from a [`DeckDefinition`].
///
/// The deck owns a permutation of the card indices and a cursor into it.
/// [`CardSource::draw`] resolves the index under the cursor into a [`Card`]
/// and advances the cursor; [`CardSource::shuffle`] replaces the permutation
/// and rewinds the cursor. A new deck starts in index order.
///
/// [`Card`]: crate::Card
///
/// # Example
///
/// ```
/// use deckrs::{CardSource, Deck, presets};
///
/// let mut deck = Deck::from_definition(presets::italian().unwrap(), 42)
///     .with_game(presets::briscola())
///     .unwrap();
/// deck.shuffle(1);
///
/// let mut points = 0.0;
/// while let Some(card) = deck.draw() {
///     points += card.value;
/// }
/// assert_eq!(points, 120.0);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    definition: Arc<DeckDefinition>,
    profile: Option<Arc<GameProfile>>,
    /// Card indices in draw order.
    permutation: Vec<usize>,
    /// Position of the next card to draw.
    cursor: usize,
    options: DeckOptions,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given options.
    #[must_use]
    pub fn new(definition: impl Into<Arc<DeckDefinition>>, options: DeckOptions) -> Self {
        let definition = definition.into();
        let permutation = (0..definition.card_count()).collect();

        let mut deck = Self {
            definition,
            profile: None,
            permutation,
            cursor: 0,
            options,
            rng: ChaCha8Rng::seed_from_u64(options.seed),
        };

        if options.shuffle_on_create {
            deck.reshuffle();
        }

        deck
    }

    /// Creates an unvalued deck in index order, seeded with `seed`.
    #[must_use]
    pub fn from_definition(definition: impl Into<Arc<DeckDefinition>>, seed: u64) -> Self {
        Self::new(definition, DeckOptions::default().with_seed(seed))
    }

    /// Binds a game profile and returns the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lacks a value for some card.
    pub fn with_game(mut self, profile: impl Into<Arc<GameProfile>>) -> Result<Self, ProfileError> {
        self.for_game(profile.into())?;
        Ok(self)
    }

    /// Shuffles the deck with the configured number of passes.
    pub fn reshuffle(&mut self) {
        self.shuffle(self.options.shuffle_iterations);
    }

    /// Returns the deck definition.
    #[must_use]
    pub fn definition(&self) -> &DeckDefinition {
        &self.definition
    }

    /// Returns the bound game profile, if any.
    #[must_use]
    pub fn profile(&self) -> Option<&GameProfile> {
        self.profile.as_deref()
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.permutation.len()
    }

    /// Returns the number of wild cards.
    #[must_use]
    pub fn wild_count(&self) -> usize {
        self.definition.wild_count()
    }

    /// Returns the number of wild groups.
    #[must_use]
    pub fn wild_types(&self) -> usize {
        self.definition.wild_types()
    }

    /// Returns the number of cards drawn since the last shuffle.
    #[must_use]
    pub const fn cards_drawn(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.permutation.len() - self.cursor
    }

    /// Returns `true` if every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards_remaining() == 0
    }

    fn bind_profile(&mut self, profile: Arc<GameProfile>) -> Result<(), ProfileError> {
        profile.check(&self.definition)?;
        debug!(
            "{:#} bound to {} after {} draws",
            self, profile.name, self.cursor
        );
        self.profile = Some(profile);
        Ok(())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} deck", self.definition.name())
        } else {
            f.write_str(self.definition.name())
        }
    }
}
