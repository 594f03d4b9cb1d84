//! End-to-end solve and validate scenarios on hand-built dictionaries.
//!
//! Every dictionary here is constructed so that each adjacent pair overlaps
//! by exactly the designed amount, and the tests assert exact step and
//! character counts.

use wordchain_solver::{
    ChainOptions, MoveRejection, SolveError, WordChain, fused_length, is_valid_move, solve,
};

fn options(min_overlap: usize, min_word_length: usize) -> ChainOptions {
    ChainOptions {
        min_overlap,
        min_word_length,
        ..ChainOptions::default()
    }
}

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

#[test]
fn cat_to_dog_through_designed_links() {
    let dictionary = ["CAT", "ATLAS", "LASSO", "SOLIDO", "DOG"];
    let s = solve("CAT", "DOG", dictionary, &options(2, 2)).unwrap();

    assert_eq!(
        s.words().collect::<Vec<_>>(),
        ["CAT", "ATLAS", "LASSO", "SOLIDO", "DOG"]
    );
    let overlaps: Vec<usize> = s.chain.iter().map(|l| l.overlap).collect();
    assert_eq!(overlaps, [0, 2, 3, 2, 2]);
    assert_eq!(s.steps, 4);
    assert_eq!(s.characters, 13);
    assert_eq!(s.fused(), "CATLASSOLIDOG");
}

#[test]
fn shortcut_wins_over_longer_chain() {
    let dictionary = ["CAT", "ATLAS", "LASSO", "SOLIDO", "DOG", "ATDO"];
    let s = solve("CAT", "DOG", dictionary, &options(2, 2)).unwrap();
    assert_eq!(s.words().collect::<Vec<_>>(), ["CAT", "ATDO", "DOG"]);
    assert_eq!(s.steps, 2);
    assert_eq!(s.characters, 6);
}

#[test]
fn same_word_is_a_zero_step_solution() {
    let s = solve("SAME", "SAME", ["SAME", "AMEN", "MENU"], &ChainOptions::default()).unwrap();
    assert_eq!(s.steps, 0);
    assert_eq!(s.characters, 4);
}

#[test]
fn disjoint_words_have_no_solution() {
    let result = solve("AAAA", "ZZZZ", ["AAAA", "ZZZZ"], &options(2, 3));
    assert_eq!(
        result,
        Err(SolveError::NoSolution {
            start: "AAAA".into(),
            end: "ZZZZ".into(),
        })
    );
}

#[test]
fn step_cap_fails_when_shortest_chain_is_longer() {
    let dictionary = ["START", "ARTSY", "SYEND", "END"];
    let capped = ChainOptions {
        max_steps: Some(1),
        ..ChainOptions::default()
    };
    assert!(matches!(
        solve("START", "END", dictionary, &capped),
        Err(SolveError::NoSolution { .. })
    ));

    let s = solve("START", "END", dictionary, &ChainOptions::default()).unwrap();
    assert_eq!(s.words().collect::<Vec<_>>(), ["START", "ARTSY", "SYEND", "END"]);
    assert_eq!(s.steps, 3);
    assert_eq!(s.characters, 10);
}

#[test]
fn endpoints_absent_from_dictionary_are_forced_in() {
    // Neither endpoint is listed; END is also dropped by min_word_length 4.
    let dictionary = ["ARTSY", "SYEND"];
    let s = solve("start", "end", dictionary, &options(2, 4)).unwrap();
    assert_eq!(s.words().collect::<Vec<_>>(), ["START", "ARTSY", "SYEND", "END"]);
    assert_eq!(fused_length(&s.chain), s.characters);
}

#[test]
fn invalid_input_is_distinct_from_no_solution() {
    let err = solve("---", "END", ["END"], &ChainOptions::default()).unwrap_err();
    assert!(matches!(err, SolveError::InvalidInput { .. }));
}

#[test]
fn reuse_flag_does_not_lengthen_shortest_chain() {
    let dictionary = ["ABAB", "BABA", "ABXY", "XYZ"];
    let reuse = ChainOptions {
        allow_reuse: true,
        ..ChainOptions::default()
    };
    let with = solve("ABAB", "XYZ", dictionary, &reuse).unwrap();
    let without = solve("ABAB", "XYZ", dictionary, &ChainOptions::default()).unwrap();
    assert_eq!(with, without);
    assert_eq!(with.steps, 2);
}

#[test]
fn reuse_without_step_cap_reports_unreachable_end() {
    let reuse = ChainOptions {
        allow_reuse: true,
        max_steps: None,
        ..ChainOptions::default()
    };
    let result = solve("ABAB", "ZZZ", ["ABAB", "BABA"], &reuse);
    assert_eq!(
        result,
        Err(SolveError::NoSolution {
            start: "ABAB".into(),
            end: "ZZZ".into(),
        })
    );
}

// ---------------------------------------------------------------------------
// is_valid_move
// ---------------------------------------------------------------------------

#[test]
fn valid_move_reports_overlap() {
    let v = is_valid_move("STONE", "ONEWAY", ["ONEWAY"], &options(2, 3));
    assert!(v.valid);
    assert_eq!(v.overlap, Some(3));
}

#[test]
fn unlinked_move_reports_reason() {
    let v = is_valid_move("CAT", "DOG", ["DOG"], &ChainOptions::default());
    assert!(!v.valid);
    assert_eq!(v.reason, Some(MoveRejection::DoesNotLink));
    assert_eq!(v.reason_text(), Some("Does not link"));
    assert_eq!(v.overlap, Some(0));
}

#[test]
fn move_reasons_are_checked_in_order() {
    let opts = ChainOptions::default();
    assert_eq!(
        is_valid_move("", "ZZZ", Vec::<&str>::new(), &opts).reason_text(),
        Some("Empty or invalid characters")
    );
    assert_eq!(
        is_valid_move("CAT", "ZZZ", Vec::<&str>::new(), &opts).reason_text(),
        Some("Word not in dictionary")
    );
}

// ---------------------------------------------------------------------------
// Handle and game
// ---------------------------------------------------------------------------

#[test]
fn player_chain_compared_with_engine() {
    let handle = WordChain::new(["START", "ARTSY", "SYEND", "TARTS", "TSEND", "END"]);
    let best = handle.solve("START", "END").unwrap();

    let mut game = handle.new_game("START", "END").unwrap();
    assert!(game.submit("ARTSY").valid);
    assert!(game.submit("SYEND").valid);
    assert!(game.submit("END").valid);
    let played = game.into_solution().unwrap();

    assert_eq!(played.steps, best.steps);
    assert!(played.characters >= best.characters);
}
