//! Shared fixtures and logging for integration tests.

#![allow(dead_code)]

use commander_table::{Card, Decklist, PlayerSeat};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A decklist of `n` distinct single copies.
pub fn distinct_deck(prefix: &str, n: usize) -> Decklist {
    (0..n).fold(Decklist::default(), |deck, i| {
        deck.with_entry(
            1,
            Card::new(format!("{prefix}-{i}"), format!("{prefix} card {i}"))
                .with_type_line("Creature — Test")
                .with_power_toughness("1", "1"),
        )
    })
}

/// The default two-seat table with distinct decks of `n` cards each.
pub fn two_seats(n: usize) -> Vec<PlayerSeat> {
    vec![
        PlayerSeat::human(distinct_deck("p1", n)),
        PlayerSeat::ai(distinct_deck("ai", n)),
    ]
}
