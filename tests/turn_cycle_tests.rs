//! Turn structure tests.
//!
//! These walk whole games through the schedule and check the draw step,
//! the opening hand, and active player rotation.

mod common;

use commander_table::{
    Game, GameConfig, GameRng, Phase, PlayerId, PlayerSeat, Step, TurnSequencer,
    MAIN_PHASE_SENTINEL,
};
use common::{distinct_deck, init_logging, two_seats};

/// Two decks of 10 distinct cards: 7 in hand, 3 in library, and twelve
/// advances later the second seat is in its untap step.
#[test]
fn test_two_player_scenario() {
    init_logging();
    let mut game = Game::new(&two_seats(10), GameConfig::default(), GameRng::new(42)).unwrap();

    for (_, player) in game.players().iter() {
        assert_eq!(player.hand_size(), 7);
        assert_eq!(player.library_size(), 3);
    }
    assert_eq!(game.active_player(), PlayerId::new(0));

    for _ in 0..12 {
        game.advance();
    }

    assert_eq!(game.turn(), 2);
    assert_eq!(game.phase(), Phase::Beginning);
    assert_eq!(game.step(), Some(Step::Untap));
    assert_eq!(game.active_player(), PlayerId::new(1));
    assert_eq!(game.active_player_name(), "AI Opponent");
}

/// From before the first step, one full cycle visits every stop in order.
#[test]
fn test_phase_cycle_completeness() {
    let mut turns = TurnSequencer::new(2).unwrap();

    let expected = [
        (Phase::Beginning, Some(Step::Untap)),
        (Phase::Beginning, Some(Step::Upkeep)),
        (Phase::Beginning, Some(Step::Draw)),
        (Phase::PrecombatMain, None),
        (Phase::Combat, Some(Step::BeginningOfCombat)),
        (Phase::Combat, Some(Step::DeclareAttackers)),
        (Phase::Combat, Some(Step::DeclareBlockers)),
        (Phase::Combat, Some(Step::CombatDamage)),
        (Phase::Combat, Some(Step::EndOfCombat)),
        (Phase::PostcombatMain, None),
        (Phase::Ending, Some(Step::End)),
        (Phase::Ending, Some(Step::Cleanup)),
    ];

    for (phase, step) in expected {
        let t = turns.advance();
        assert_eq!((t.phase, t.step), (phase, step));
        assert_eq!(t.turn, 1);
        assert_eq!(t.active_player, PlayerId::new(0));
        assert!(!t.new_turn);
    }

    let wrap = turns.advance();
    assert_eq!((wrap.phase, wrap.step), (Phase::Beginning, Some(Step::Untap)));
    assert_eq!(wrap.turn, 2);
    assert_eq!(wrap.active_player, PlayerId::new(1));
    assert!(wrap.new_turn);
}

/// Every advance lands on a concrete step or a main phase, never between.
#[test]
fn test_advance_always_lands() {
    let mut turns = TurnSequencer::new(4).unwrap();
    for _ in 0..200 {
        let t = turns.advance();
        match t.step {
            Some(step) => assert!(t.phase.steps().contains(&step)),
            None => {
                assert!(t.phase.is_main());
                assert_eq!(turns.step_label(), MAIN_PHASE_SENTINEL);
            }
        }
        assert!(turns.phase_index() < 5);
    }
}

/// Active player rotates once per full cycle, and only on the wrap.
#[test]
fn test_rotation_once_per_cycle() {
    let mut turns = TurnSequencer::new(2).unwrap();
    let mut rotations = 0;
    let mut last = turns.active_player();

    for _ in 0..(12 * 6) {
        let t = turns.advance();
        if t.active_player != last {
            rotations += 1;
            assert!(t.new_turn);
            assert_eq!(t.step, Some(Step::Untap));
            last = t.active_player;
        }
    }

    // 72 advances from before-first-step: wraps on the 13th, 25th, ... 61st
    assert_eq!(rotations, 5);
    assert_eq!(turns.turn(), 6);
}

#[test]
fn test_turn_one_draw_skipped() {
    init_logging();
    let mut game = Game::new(&two_seats(40), GameConfig::default(), GameRng::new(5)).unwrap();

    game.advance(); // upkeep
    let t = game.advance();
    assert_eq!(t.step, Some(Step::Draw));
    assert_eq!(t.turn, 1);

    let active = game.player(PlayerId::new(0)).unwrap();
    assert_eq!(active.hand_size(), 7);
    assert_eq!(active.library_size(), 33);
}

#[test]
fn test_turn_two_draw_for_new_active_player() {
    let mut game = Game::new(&two_seats(40), GameConfig::default(), GameRng::new(5)).unwrap();

    // untap of turn 2 is 12 advances away, draw is 2 more
    for _ in 0..14 {
        game.advance();
    }
    assert_eq!(game.turn(), 2);
    assert_eq!(game.step(), Some(Step::Draw));

    assert_eq!(game.player(PlayerId::new(1)).unwrap().hand_size(), 8);
    assert_eq!(game.player(PlayerId::new(0)).unwrap().hand_size(), 7);

    // Turn 3 draw goes back to the first seat
    for _ in 0..12 {
        game.advance();
    }
    assert_eq!(game.turn(), 3);
    assert_eq!(game.player(PlayerId::new(0)).unwrap().hand_size(), 8);
}

#[test]
fn test_draw_step_with_empty_library() {
    // 8 cards: 7 in hand, 1 left for turn 2's draw, none after
    let mut game = Game::new(&two_seats(8), GameConfig::default(), GameRng::new(11)).unwrap();

    for _ in 0..(12 * 6) {
        game.advance();
    }

    for (_, player) in game.players().iter() {
        assert_eq!(player.hand_size(), 8);
        assert_eq!(player.library_size(), 0);
        assert_eq!(player.zones().total_cards(), 8);
    }
}

#[test]
fn test_first_draw_configurable() {
    let config = GameConfig::default().with_skip_first_draw(false);
    let mut game = Game::new(&two_seats(20), config, GameRng::new(5)).unwrap();

    game.advance();
    game.advance();
    assert_eq!(game.player(PlayerId::new(0)).unwrap().hand_size(), 8);
}

#[test]
fn test_three_player_table() {
    let seats = vec![
        PlayerSeat::new("Ann", distinct_deck("a", 20)),
        PlayerSeat::new("Ben", distinct_deck("b", 20)),
        PlayerSeat::new("Cal", distinct_deck("c", 20)),
    ];
    let mut game = Game::new(&seats, GameConfig::default(), GameRng::new(8)).unwrap();

    let mut actives = vec![game.active_player_name().to_string()];
    for _ in 0..3 {
        for _ in 0..12 {
            game.advance();
        }
        actives.push(game.active_player_name().to_string());
    }

    assert_eq!(actives, vec!["Ann", "Ben", "Cal", "Ann"]);
    // Ben and Cal drew on turns 2 and 3, Ann on turn 4 has not reached draw yet
    assert_eq!(game.player(PlayerId::new(0)).unwrap().hand_size(), 7);
    assert_eq!(game.player(PlayerId::new(1)).unwrap().hand_size(), 8);
    assert_eq!(game.player(PlayerId::new(2)).unwrap().hand_size(), 8);
}
