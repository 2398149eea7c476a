//! Prints every card of the built-in decks in shuffled order.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{CardSource, Deck, presets};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let (italian, french, uno) = match (presets::italian(), presets::french(), presets::uno()) {
        (Ok(italian), Ok(french), Ok(uno)) => (italian, french, uno),
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            println!("Definition error: {err}");
            return;
        }
    };

    let italian = match Deck::from_definition(italian, seed).with_game(presets::briscola()) {
        Ok(deck) => deck,
        Err(err) => {
            println!("Profile error: {err}");
            return;
        }
    };

    let decks = [
        italian,
        Deck::from_definition(french, seed),
        Deck::from_definition(uno, seed),
    ];

    for mut deck in decks {
        print_deck(&mut deck);
    }
}

fn print_deck(deck: &mut Deck) {
    println!("==========");
    println!("{deck:#}");
    println!();

    deck.shuffle(1);

    let mut points = 0.0;
    let mut idx = 0;
    while let Some(card) = deck.draw() {
        idx += 1;
        points += card.value;
        println!("{idx}) {card}");
    }

    if let Some(profile) = deck.profile() {
        println!();
        println!("{} points: {points}", profile.name);
    }

    println!();
    println!();
}
