//! Tests for the rule table and round resolver.

use roshambo::{Choice, Outcome, Winner, resolve};

#[test]
fn test_rule_table_matches_the_classic_cycle() {
    assert_eq!(Choice::Rock.beats(), Choice::Scissors);
    assert_eq!(Choice::Scissors.beats(), Choice::Paper);
    assert_eq!(Choice::Paper.beats(), Choice::Rock);
}

#[test]
fn test_rule_table_is_a_single_three_cycle() {
    for choice in Choice::ALL {
        // No choice beats itself.
        assert_ne!(choice.beats(), choice, "{choice} should not beat itself");
        // Following the table three times returns to the start.
        assert_eq!(choice.beats().beats().beats(), choice);
    }
}

#[test]
fn test_equal_choices_always_draw() {
    for choice in Choice::ALL {
        assert_eq!(resolve(choice, choice), Outcome::Draw);
    }
}

#[test]
fn test_exactly_one_outcome_holds_for_every_pair() {
    for player in Choice::ALL {
        for computer in Choice::ALL {
            let expected = if player == computer {
                Outcome::Draw
            } else if player.beats() == computer {
                Outcome::PlayerWin
            } else {
                Outcome::ComputerWin
            };
            assert_eq!(
                resolve(player, computer),
                expected,
                "wrong outcome for {player} vs {computer}"
            );
        }
    }
}

#[test]
fn test_player_wins_iff_rule_table_matches() {
    for player in Choice::ALL {
        for computer in Choice::ALL {
            let won = resolve(player, computer) == Outcome::PlayerWin;
            assert_eq!(won, player.beats() == computer);
        }
    }
}

#[test]
fn test_outcome_winner_mapping() {
    assert_eq!(Outcome::Draw.winner(), None);
    assert_eq!(Outcome::PlayerWin.winner(), Some(Winner::Player));
    assert_eq!(Outcome::ComputerWin.winner(), Some(Winner::Computer));
}

#[test]
fn test_outcome_labels() {
    assert_eq!(Outcome::PlayerWin.label(), "YOU WON");
    assert_eq!(Outcome::ComputerWin.label(), "YOU LOST");
    assert_eq!(Outcome::Draw.label(), "DRAW");
}

#[test]
fn test_choice_parses_canonical_labels() {
    assert_eq!("rock".parse::<Choice>().unwrap(), Choice::Rock);
    assert_eq!("Paper".parse::<Choice>().unwrap(), Choice::Paper);
    assert_eq!("  SCISSORS  ".parse::<Choice>().unwrap(), Choice::Scissors);
}

#[test]
fn test_choice_rejects_unknown_labels() {
    let err = "lizard".parse::<Choice>().unwrap_err();
    assert_eq!(err.value, "lizard");
    assert!(err.to_string().contains("lizard"));
}

#[test]
fn test_choice_displays_lowercase() {
    assert_eq!(Choice::Rock.to_string(), "rock");
    assert_eq!(Choice::Paper.to_string(), "paper");
    assert_eq!(Choice::Scissors.to_string(), "scissors");
}
