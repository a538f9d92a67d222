use std::error::Error;

use itertools::Itertools;
use showdown_core::card::{ALL_RANKS, ALL_SUITS};
use showdown_core::deck::DeckSeed;
use showdown_core::hand::{Hand, WinState};
use showdown_core::table::Showdown;
use showdown_core::OrderNum;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, default_value)]
    seed: DeckSeed,
    #[structopt(long, help = "Also print all 52 cards in shuffle order")]
    show_deck: bool,
    #[structopt(
        long,
        default_value = "1",
        help = "Shuffle order of hand A's first card"
    )]
    start_a: OrderNum,
    #[structopt(
        long,
        default_value = "6",
        help = "Shuffle order of hand B's first card"
    )]
    start_b: OrderNum,
}

fn print_hand(name: &str, hand: &Hand) {
    println!("{}: {}", name, hand.cards().iter().join(" "));
    println!(
        "  rank counts: {}",
        ALL_RANKS
            .iter()
            .map(|&r| format!("{}:{}", r, hand.rank_counts()[r]))
            .join(" ")
    );
    println!(
        "  suit counts: {}",
        ALL_SUITS
            .iter()
            .map(|&s| format!("{}:{}", s, hand.suit_counts()[s]))
            .join(" ")
    );
    println!("  {}", hand.class());
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let showdown = Showdown::play(opt.seed, opt.start_a, opt.start_b)?;
    println!("DeckSeed: {}", showdown.seed());
    if opt.show_deck {
        println!("Deck: {}", showdown.deck().cards().iter().join(" "));
    }
    let [hand_a, hand_b] = showdown.hands();
    print_hand("Hand A", hand_a);
    print_hand("Hand B", hand_b);
    match showdown.outcome() {
        WinState::Win => println!("Hand A wins"),
        WinState::Lose => println!("Hand B wins"),
        WinState::Tie => println!("Tie: both hands make {}", hand_a.class()),
    }
    Ok(())
}
