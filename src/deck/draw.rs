use alloc::sync::Arc;

use log::{debug, trace};
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{MergeError, ProfileError};
use crate::profile::GameProfile;
use crate::source::CardSource;

use super::Deck;

impl Deck {
    /// Resolves a card index into a card valued under the current profile.
    ///
    /// Indices below `suits * figures` are regular cards, laid out suit by
    /// suit; the rest are wild cards in group order. Returns `None` if
    /// `index` is not below [`Deck::card_count`].
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<Card> {
        let definition = &*self.definition;
        let figures = definition.figures();
        let regular = definition.regular_count();

        if index < regular {
            let figure = index % figures.len();
            let suit = definition.suits().get(index / figures.len())?;
            let value = self
                .profile
                .as_ref()
                .and_then(|profile| profile.figure_value(figure))
                .unwrap_or_default();

            return Some(Card {
                index,
                figure: figures.get(figure)?.clone(),
                suit: suit.name.clone(),
                symbol: suit.symbol.clone(),
                value,
            });
        }

        if !self.is_wild_index(index) {
            return None;
        }

        let group = definition.wild_group_index(index - regular);
        let wild = definition.wild_groups().get(group)?;
        let value = self
            .profile
            .as_ref()
            .and_then(|profile| profile.wild_value(group))
            .unwrap_or_default();

        Some(Card {
            index,
            figure: wild.label.clone(),
            suit: wild.label.clone(),
            symbol: wild.symbol.clone(),
            value,
        })
    }

    /// Returns `true` if `index` falls in the wild card range.
    pub(crate) fn is_wild_index(&self, index: usize) -> bool {
        (self.definition.regular_count()..self.card_count()).contains(&index)
    }
}

impl CardSource for Deck {
    fn for_game(&mut self, profile: Arc<GameProfile>) -> Result<(), ProfileError> {
        self.bind_profile(profile)
    }

    fn shuffle(&mut self, iterations: u32) {
        let passes = iterations.max(1);
        let count = self.permutation.len();

        self.permutation.clear();
        self.permutation.extend(0..count);
        for _ in 0..passes {
            self.permutation.shuffle(&mut self.rng);
        }
        self.cursor = 0;

        debug!("{:#} shuffled {count} cards in {passes} passes", self);
    }

    fn draw(&mut self) -> Option<Card> {
        let Some(&index) = self.permutation.get(self.cursor) else {
            trace!("{:#} is empty", self);
            return None;
        };
        self.cursor += 1;

        let card = self.resolve(index);
        trace!("{:#} drew {index} ({} left)", self, self.cards_remaining());
        card
    }

    fn merge(&mut self, _other: &Self) -> Result<(), MergeError> {
        Err(MergeError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::card::{Suit, WildGroup};
    use crate::definition::DeckDefinition;
    use crate::profile::WildValue;

    fn two_by_three() -> Deck {
        let definition = DeckDefinition::new(
            "Tiny",
            vec![Suit::new("Red", "R"), Suit::new("Blue", "B")],
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
            vec![
                WildGroup::new("Wild", "W", 2),
                WildGroup::new("Wild+4", "W4", 2),
            ],
        )
        .unwrap();
        Deck::from_definition(definition, 3)
    }

    #[test]
    fn resolves_regular_cards_suit_by_suit() {
        let deck = two_by_three();

        let labels: Vec<_> = (0..6)
            .map(|index| {
                let card = deck.resolve(index).unwrap();
                (card.suit, card.figure)
            })
            .collect();

        assert_eq!(
            labels,
            [
                ("Red".to_string(), "1".to_string()),
                ("Red".to_string(), "2".to_string()),
                ("Red".to_string(), "3".to_string()),
                ("Blue".to_string(), "1".to_string()),
                ("Blue".to_string(), "2".to_string()),
                ("Blue".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn resolves_wild_cards_by_group_block() {
        let deck = two_by_three()
            .with_game(
                GameProfile::new("Test", vec![1.0, 2.0, 3.0])
                    .with_wild_value(WildValue::PerGroup(vec![20.0, 50.0])),
            )
            .unwrap();

        let wild: Vec<_> = (6..10)
            .map(|index| {
                let card = deck.resolve(index).unwrap();
                assert_eq!(card.figure, card.suit);
                (card.symbol, card.value)
            })
            .collect();

        assert_eq!(
            wild,
            [
                ("W".to_string(), 20.0),
                ("W".to_string(), 20.0),
                ("W4".to_string(), 50.0),
                ("W4".to_string(), 50.0),
            ]
        );
        assert!(deck.is_wild_index(6));
        assert!(!deck.is_wild_index(5));
        assert!(!deck.is_wild_index(10));
    }

    #[test]
    fn resolve_out_of_range_is_none() {
        let deck = two_by_three();
        assert_eq!(deck.card_count(), 10);
        assert!(deck.resolve(10).is_none());
    }

    #[test]
    fn zero_iterations_rebuilds_permutation_and_rewinds() {
        let mut deck = two_by_three();
        deck.draw();
        deck.draw();

        deck.shuffle(0);

        assert_eq!(deck.cards_drawn(), 0);
        let mut sorted = deck.permutation.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
