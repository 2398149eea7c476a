//! Deck configuration options.

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_seed(7)
///     .with_shuffle_iterations(3)
///     .with_shuffle_on_create(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Seed for the deck's random number generator.
    pub seed: u64,
    /// Shuffle passes used by [`Deck::reshuffle`](crate::Deck::reshuffle)
    /// and by shuffle-on-create. 0 is treated as 1.
    pub shuffle_iterations: u32,
    /// Whether the deck is shuffled when it is created.
    pub shuffle_on_create: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            shuffle_iterations: 1,
            shuffle_on_create: false,
        }
    }
}

impl DeckOptions {
    /// Sets the random seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the default number of shuffle passes.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_iterations(5);
    /// assert_eq!(options.shuffle_iterations, 5);
    /// ```
    #[must_use]
    pub const fn with_shuffle_iterations(mut self, iterations: u32) -> Self {
        self.shuffle_iterations = iterations;
        self
    }

    /// Sets whether the deck is shuffled on creation.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_create(true);
    /// assert!(options.shuffle_on_create);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_create(mut self, shuffle: bool) -> Self {
        self.shuffle_on_create = shuffle;
        self
    }
}
