//! Deck definitions and the national style parameters they are built from.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Suit, WildGroup};
use crate::error::DefinitionError;

/// Raw parameters of a national or game-specific deck style.
///
/// Suit names and symbols are listed separately and zipped in order by
/// [`DeckDefinition::from_style`].
///
/// ```
/// use deckrs::{DeckDefinition, Style};
///
/// let style = Style {
///     name: "Mini",
///     suits: &["Hearts", "Spades"],
///     symbols: &["♥", "♠"],
///     figures: &["J", "Q", "K"],
///     wild: &[("Joker", "🃏", 1)],
/// };
/// let definition = DeckDefinition::from_style(&style).unwrap();
/// assert_eq!(definition.card_count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style<'a> {
    /// Style name, e.g. `"Italian"`.
    pub name: &'a str,
    /// Suit names, in order.
    pub suits: &'a [&'a str],
    /// Suit symbols, in the same order as the names.
    pub symbols: &'a [&'a str],
    /// Figure labels, lowest rank first.
    pub figures: &'a [&'a str],
    /// Wild groups as `(label, symbol, count)`.
    pub wild: &'a [(&'a str, &'a str, usize)],
}

/// The immutable shape of a deck: suits, figures, and wild groups.
///
/// Regular cards occupy indices `0..suits * figures`; wild cards follow in
/// group order. All wild groups have the same count so that the wild range
/// splits into equal blocks, one per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckDefinition {
    name: String,
    suits: Vec<Suit>,
    figures: Vec<String>,
    wild_groups: Vec<WildGroup>,
}

impl DeckDefinition {
    /// Creates a definition.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no suits or no figures, if a wild group
    /// is empty, if the wild groups do not all have the same count, or if the
    /// total number of cards does not fit in a `usize`.
    pub fn new(
        name: impl Into<String>,
        suits: Vec<Suit>,
        figures: Vec<String>,
        wild_groups: Vec<WildGroup>,
    ) -> Result<Self, DefinitionError> {
        if suits.is_empty() {
            return Err(DefinitionError::NoSuits);
        }
        if figures.is_empty() {
            return Err(DefinitionError::NoFigures);
        }
        let regular = suits
            .len()
            .checked_mul(figures.len())
            .ok_or(DefinitionError::TooManyCards)?;
        check_wild_groups(regular, &wild_groups)?;

        Ok(Self {
            name: name.into(),
            suits,
            figures,
            wild_groups,
        })
    }

    /// Creates a definition from a style parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::SymbolCountMismatch`] if the style lists a
    /// different number of suit names and symbols, or any error from
    /// [`DeckDefinition::new`].
    pub fn from_style(style: &Style<'_>) -> Result<Self, DefinitionError> {
        if style.suits.len() != style.symbols.len() {
            return Err(DefinitionError::SymbolCountMismatch {
                names: style.suits.len(),
                symbols: style.symbols.len(),
            });
        }

        let suits = style
            .suits
            .iter()
            .zip(style.symbols)
            .map(|(name, symbol)| Suit::new(*name, *symbol))
            .collect();
        let figures = style.figures.iter().map(ToString::to_string).collect();
        let wild_groups = style
            .wild
            .iter()
            .map(|&(label, symbol, count)| WildGroup::new(label, symbol, count))
            .collect();

        Self::new(style.name, suits, figures, wild_groups)
    }

    /// Returns the style name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the suits, in index order.
    #[must_use]
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Returns the figure labels, in index order.
    #[must_use]
    pub fn figures(&self) -> &[String] {
        &self.figures
    }

    /// Returns the wild groups, in index order.
    #[must_use]
    pub fn wild_groups(&self) -> &[WildGroup] {
        &self.wild_groups
    }

    /// Returns the number of regular (suited) cards.
    #[must_use]
    pub fn regular_count(&self) -> usize {
        self.suits.len() * self.figures.len()
    }

    /// Returns the total number of wild cards.
    #[must_use]
    pub fn wild_count(&self) -> usize {
        self.wild_groups.iter().map(|group| group.count).sum()
    }

    /// Returns the number of distinct wild groups.
    #[must_use]
    pub fn wild_types(&self) -> usize {
        self.wild_groups.len()
    }

    /// Returns the total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.regular_count() + self.wild_count()
    }

    /// Maps an offset into the wild range to its group position.
    pub(crate) fn wild_group_index(&self, offset: usize) -> usize {
        match self.wild_groups.len() {
            0 | 1 => 0,
            groups => offset / (self.wild_count() / groups),
        }
    }
}

impl fmt::Display for DeckDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn check_wild_groups(regular: usize, groups: &[WildGroup]) -> Result<(), DefinitionError> {
    let Some(first) = groups.first() else {
        return Ok(());
    };

    let mut total = regular;
    for (index, group) in groups.iter().enumerate() {
        if group.count == 0 {
            return Err(DefinitionError::EmptyWildGroup { index });
        }
        if group.count != first.count {
            return Err(DefinitionError::UnevenWildGroups {
                index,
                count: group.count,
                expected: first.count,
            });
        }
        total = total
            .checked_add(group.count)
            .ok_or(DefinitionError::TooManyCards)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn groups(counts: &[usize]) -> Vec<WildGroup> {
        counts
            .iter()
            .map(|&count| WildGroup::new("Wild", "*", count))
            .collect()
    }

    #[test]
    fn wild_groups_must_be_equal_and_non_empty() {
        assert_eq!(check_wild_groups(0, &[]), Ok(()));
        assert_eq!(check_wild_groups(100, &groups(&[4, 4])), Ok(()));
        assert_eq!(
            check_wild_groups(0, &groups(&[0])),
            Err(DefinitionError::EmptyWildGroup { index: 0 })
        );
        assert_eq!(
            check_wild_groups(0, &groups(&[2, 6])),
            Err(DefinitionError::UnevenWildGroups {
                index: 1,
                count: 6,
                expected: 2,
            })
        );
    }

    #[test]
    fn card_total_must_fit_in_usize() {
        let half = usize::MAX / 2 + 1;
        assert_eq!(
            check_wild_groups(0, &groups(&[half, half])),
            Err(DefinitionError::TooManyCards)
        );
        assert_eq!(
            check_wild_groups(usize::MAX, &groups(&[1])),
            Err(DefinitionError::TooManyCards)
        );
        assert_eq!(check_wild_groups(usize::MAX - 2, &groups(&[1, 1])), Ok(()));
    }

    #[test]
    fn wild_offsets_split_into_equal_blocks() {
        let definition = DeckDefinition::new(
            "Test",
            vec![Suit::new("Red", "R")],
            vec!["1".to_string()],
            groups(&[3, 3, 3]),
        )
        .unwrap();

        let mapped: Vec<usize> = (0..9).map(|w| definition.wild_group_index(w)).collect();
        assert_eq!(mapped, [0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }
}
