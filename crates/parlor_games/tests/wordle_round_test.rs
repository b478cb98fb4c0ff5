//! Tests for the word-guess round, scorer, and hints.

use parlor_wordle::{
    score, GuessError, Lexicon, LetterStatus, Phase, Round, Word,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use LetterStatus::{Absent, Correct, Present};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_apple_paper_fixed_regression() {
    let statuses = score(&word("APPLE"), &word("PAPER")).unwrap();
    assert_eq!(statuses, vec![Present, Present, Correct, Present, Absent]);
}

#[test]
fn test_scoring_the_target_is_all_correct() {
    let lexicon = Lexicon::built_in();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..8 {
        let target = lexicon.draw(&mut rng);
        let statuses = score(&target, &target).unwrap();
        assert!(statuses.iter().all(|s| *s == Correct));
    }
}

#[test]
fn test_round_win_path() {
    let mut round = Round::new(word("WATER"), 6);
    round.submit(word("GHOST")).unwrap();
    round.submit(word("TRAIN")).unwrap();
    let scored = round.submit(word("WATER")).unwrap();

    assert!(scored.is_winning());
    assert_eq!(*round.phase(), Phase::Won { row: 2 });
    assert!(round.submit(word("GHOST")).is_err());
}

#[test]
fn test_round_loss_reveals_target() {
    let mut round = Round::new(word("WATER"), 6);
    for _ in 0..6 {
        round.submit(word("GHOST")).unwrap();
    }

    match round.phase() {
        Phase::Lost { target } => assert_eq!(target, &word("WATER")),
        other => panic!("expected a lost round, got {:?}", other),
    }
}

#[test]
fn test_incomplete_guess_rejected_without_state_change() {
    let mut round = Round::new(word("WATER"), 6);
    let err = round.submit(word("WAT")).unwrap_err();

    assert!(matches!(err, GuessError::Score(_)));
    assert_eq!(*round.phase(), Phase::Playing { row: 0 });
    assert!(round.rows().is_empty());
}

#[test]
fn test_hints_never_downgrade_across_guesses() {
    let mut round = Round::new(word("WATER"), 6);

    // E correct in position 4...
    round.submit(word("OTTER")).unwrap();
    assert_eq!(round.hints().hint('E'), Some(Correct));

    // ...then merely present, then absent: the hint holds at Correct.
    round.submit(word("EVENT")).unwrap();
    assert_eq!(round.hints().hint('E'), Some(Correct));
}

#[test]
fn test_reset_draws_a_fresh_round() {
    let lexicon = Lexicon::built_in();
    let mut rng = StdRng::seed_from_u64(11);

    let mut round = Round::new(lexicon.draw(&mut rng), 6);
    round.submit(word("GHOST")).unwrap();
    round.submit(word("PLANT")).unwrap();

    round.reset(lexicon.draw(&mut rng));
    assert_eq!(*round.phase(), Phase::Playing { row: 0 });
    assert!(round.rows().is_empty());
    for letter in 'A'..='Z' {
        assert_eq!(round.hints().hint(letter), None);
    }
}

#[test]
fn test_seeded_rounds_reproduce() {
    let lexicon = Lexicon::built_in();
    let a = Round::new(lexicon.draw(&mut StdRng::seed_from_u64(5)), 6);
    let b = Round::new(lexicon.draw(&mut StdRng::seed_from_u64(5)), 6);
    assert_eq!(a.target(), b.target());
}

#[test]
fn test_credited_count_bounded_by_target_occurrences() {
    let target = word("SPEED");
    let guess = word("EEEEE");
    let statuses = score(&target, &guess).unwrap();

    let credited = statuses.iter().filter(|s| **s != Absent).count();
    assert_eq!(credited, 2); // SPEED holds exactly two Es

    // The exact-position Es win the credit; the rest are absent.
    assert_eq!(statuses, vec![Absent, Absent, Correct, Correct, Absent]);
}
