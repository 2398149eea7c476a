//! Game profiles: point values for each figure and wild group.

use alloc::string::String;
use alloc::vec::Vec;

use crate::definition::DeckDefinition;
use crate::error::ProfileError;

/// Point value of wild cards.
#[derive(Debug, Clone, PartialEq)]
pub enum WildValue {
    /// Every wild card is worth the same.
    Flat(f64),
    /// One value per wild group, in group order.
    PerGroup(Vec<f64>),
}

impl Default for WildValue {
    fn default() -> Self {
        Self::Flat(0.0)
    }
}

/// Card values for a specific game.
///
/// Figure values are indexed by figure position in the deck definition.
/// A profile may list more values than a deck needs, so one table can serve
/// decks of different sizes.
///
/// ```
/// use deckrs::{GameProfile, WildValue};
///
/// let profile = GameProfile::new("Count", vec![1.0; 13]).with_wild_value(WildValue::Flat(50.0));
/// assert_eq!(profile.figure_value(3), Some(1.0));
/// assert_eq!(profile.wild_value(0), Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameProfile {
    /// Game name.
    pub name: String,
    /// Value of each figure, by figure position.
    pub figure_values: Vec<f64>,
    /// Value of wild cards.
    pub wild_value: WildValue,
}

impl GameProfile {
    /// Creates a profile whose wild cards are worth 0.
    #[must_use]
    pub fn new(name: impl Into<String>, figure_values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            figure_values,
            wild_value: WildValue::default(),
        }
    }

    /// Sets the wild card value.
    #[must_use]
    pub fn with_wild_value(mut self, wild_value: WildValue) -> Self {
        self.wild_value = wild_value;
        self
    }

    /// Returns the value of the figure at `index`.
    #[must_use]
    pub fn figure_value(&self, index: usize) -> Option<f64> {
        self.figure_values.get(index).copied()
    }

    /// Returns the value of a card from the wild group at `group`.
    #[must_use]
    pub fn wild_value(&self, group: usize) -> Option<f64> {
        match &self.wild_value {
            WildValue::Flat(value) => Some(*value),
            WildValue::PerGroup(values) => values.get(group).copied(),
        }
    }

    /// Checks that the profile has a value for every card of `definition`.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile has too few figure values, or too few
    /// per-group wild values.
    pub fn check(&self, definition: &DeckDefinition) -> Result<(), ProfileError> {
        let figures = definition.figures().len();
        if self.figure_values.len() < figures {
            return Err(ProfileError::MissingFigureValues {
                expected: figures,
                found: self.figure_values.len(),
            });
        }

        if let WildValue::PerGroup(values) = &self.wild_value {
            let groups = definition.wild_types();
            if values.len() < groups {
                return Err(ProfileError::MissingWildValues {
                    expected: groups,
                    found: values.len(),
                });
            }
        }

        Ok(())
    }
}
