use blackjack_table::game::Outcome;
use blackjack_table::scoreboard::{Scoreboard, DEALER_KEY, PLAYER_KEY};

#[test]
fn new_board_starts_at_zero() {
    let board = Scoreboard::new();
    assert_eq!(board.player_wins(), 0);
    assert_eq!(board.dealer_wins(), 0);
}

#[test]
fn restore_requires_both_saved_values() {
    let board = Scoreboard::restore(Some("3"), Some("5"));
    assert_eq!(board.player_wins(), 3);
    assert_eq!(board.dealer_wins(), 5);

    assert_eq!(Scoreboard::restore(Some("3"), None), Scoreboard::new());
    assert_eq!(Scoreboard::restore(None, Some("5")), Scoreboard::new());
    assert_eq!(Scoreboard::restore(None, None), Scoreboard::new());
}

#[test]
fn unparsable_saved_counts_read_as_zero() {
    let board = Scoreboard::restore(Some("not a number"), Some("4"));
    assert_eq!(board.player_wins(), 0);
    assert_eq!(board.dealer_wins(), 4);
}

#[test]
fn record_increments_only_the_winning_side() {
    let mut board = Scoreboard::new();
    board.record(Outcome::PlayerWins);
    board.record(Outcome::PlayerWins);
    board.record(Outcome::DealerWins);
    assert_eq!(board.player_wins(), 2);
    assert_eq!(board.dealer_wins(), 1);
}

#[test]
fn ties_increment_neither_side() {
    let mut board = Scoreboard::restore(Some("2"), Some("2"));
    board.record(Outcome::Tie);
    assert_eq!(board.player_wins(), 2);
    assert_eq!(board.dealer_wins(), 2);
}

#[test]
fn entries_use_the_session_store_keys() {
    let mut board = Scoreboard::new();
    board.record(Outcome::PlayerWins);
    let [player, dealer] = board.entries();
    assert_eq!(player, (PLAYER_KEY, "1".to_string()));
    assert_eq!(dealer, (DEALER_KEY, "0".to_string()));
    assert_eq!(PLAYER_KEY, "User");
    assert_eq!(DEALER_KEY, "Dealer");
}

#[test]
fn persisted_entries_round_trip_into_the_next_session() {
    let mut board = Scoreboard::new();
    board.record(Outcome::PlayerWins);
    board.record(Outcome::DealerWins);
    board.record(Outcome::PlayerWins);

    let [(_, player), (_, dealer)] = board.entries();
    let restored = Scoreboard::restore(Some(&player), Some(&dealer));
    assert_eq!(restored, board);
}

#[test]
fn reset_zeroes_the_board_idempotently() {
    let mut board = Scoreboard::restore(Some("17"), Some("9"));
    board.reset();
    assert_eq!(board, Scoreboard::new());
    board.reset();
    assert_eq!(board, Scoreboard::new());
    let [(_, player), (_, dealer)] = board.entries();
    assert_eq!(player, "0");
    assert_eq!(dealer, "0");
}
