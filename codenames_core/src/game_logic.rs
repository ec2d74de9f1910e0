use log::{debug, info};
use thiserror::Error;

use crate::{
    action::Action,
    affiliation::{Affiliation, Team},
    card::Card,
    clue::{Clue, ClueRejection},
    event::{Event, EventEntry, TurnEnd, Victory},
    game_state::{Game, Phase},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("no hidden card matches that selection")]
    NotFound,
    #[error("card {0} has already been revealed")]
    AlreadyRevealed(usize),
    #[error("cards can only be revealed while guessing")]
    WrongPhase,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("clue rejected: {0}")]
    Clue(#[from] ClueRejection),
    #[error(transparent)]
    Reveal(#[from] RevealError),
    #[error("that is not possible during the current phase")]
    WrongPhase,
    #[error("the game is over")]
    GameOver,
}

impl Game {
    /// Applies one action and returns the events it produced.
    ///
    /// A rejected action leaves the game untouched, log included.
    pub fn handle_action(&mut self, action: &Action) -> Result<Vec<Event>, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let first_new = self.log.len();
        match action {
            Action::GiveClue(text) => {
                self.submit_clue(text)?;
            }
            Action::RevealCard(index) => {
                self.reveal_card(*index)?;
            }
            Action::RevealWord(word) => {
                self.reveal_by_word(word)?;
            }
            Action::EndGuessing => self.end_guessing()?,
        }
        Ok(self.log[first_new..]
            .iter()
            .map(|e| e.event.clone())
            .collect())
    }

    /// Validates `text` and, if accepted, opens the guessing phase for it.
    pub fn submit_clue(&mut self, text: &str) -> Result<Clue, GameError> {
        match self.phase {
            Phase::Clue => {}
            Phase::Guess { .. } => return Err(GameError::WrongPhase),
            Phase::Finished { .. } => return Err(GameError::GameOver),
        }
        let clue = self.validate_clue(text).map_err(|rejection| {
            debug!("{} clue {:?} rejected: {}", self.current_team, text, rejection);
            rejection
        })?;

        info!("{} team clue: {}", self.current_team, clue);
        self.phase = Phase::Guess {
            clue: clue.clone(),
            guesses_made: 0,
        };
        self.record(Event::ClueGiven {
            team: self.current_team,
            clue: clue.clone(),
        });
        Ok(clue)
    }

    /// Reveals the first hidden card whose word is exactly `word`.
    pub fn reveal_by_word(&mut self, word: &str) -> Result<Card, RevealError> {
        self.ensure_guessing()?;
        let index = self
            .board
            .find_unrevealed(word)
            .ok_or(RevealError::NotFound)?;
        self.reveal_at(index)
    }

    /// Reveals the card at grid position `index`.
    pub fn reveal_card(&mut self, index: usize) -> Result<Card, RevealError> {
        self.ensure_guessing()?;
        let card = self.board.card(index).ok_or(RevealError::NotFound)?;
        if card.revealed() {
            return Err(RevealError::AlreadyRevealed(index));
        }
        self.reveal_at(index)
    }

    /// The operatives stop guessing and hand the turn over.
    pub fn end_guessing(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Guess { .. } => {
                self.switch_turn(TurnEnd::Passed);
                Ok(())
            }
            Phase::Clue => Err(GameError::WrongPhase),
            Phase::Finished { .. } => Err(GameError::GameOver),
        }
    }

    fn ensure_guessing(&self) -> Result<(), RevealError> {
        match self.phase {
            Phase::Guess { .. } => Ok(()),
            _ => Err(RevealError::WrongPhase),
        }
    }

    fn reveal_at(&mut self, index: usize) -> Result<Card, RevealError> {
        let card = self
            .board
            .reveal(index)
            .cloned()
            .ok_or(RevealError::AlreadyRevealed(index))?;

        info!(
            "{} team revealed {} ({})",
            self.current_team,
            card.word(),
            card.affiliation()
        );
        self.record(Event::CardRevealed {
            team: self.current_team,
            index,
            word: card.word().to_string(),
            affiliation: card.affiliation(),
        });
        self.resolve(card.affiliation());
        Ok(card)
    }

    fn resolve(&mut self, affiliation: Affiliation) {
        let team = self.current_team;
        match affiliation {
            Affiliation::Assassin => self.finish(team.other(), Victory::Assassin),
            Affiliation::Neutral => self.switch_turn(TurnEnd::Bystander),
            Affiliation::Red | Affiliation::Blue if affiliation != team.affiliation() => {
                *self.score_mut(team.other()) += 1;
                self.switch_turn(TurnEnd::OpponentAgent);
            }
            Affiliation::Red | Affiliation::Blue => {
                *self.score_mut(team) += 1;
                if let Phase::Guess { guesses_made, .. } = &mut self.phase {
                    *guesses_made += 1;
                }
                if let Some(winner) = self.team_with_all_agents() {
                    self.finish(winner, Victory::AllAgentsContacted);
                } else if self.guesses_made() >= self.allowed_guesses() {
                    self.switch_turn(TurnEnd::GuessesUsed);
                }
            }
        }
    }

    fn switch_turn(&mut self, reason: TurnEnd) {
        let ending = self.current_team;
        self.current_team = ending.other();
        self.phase = Phase::Clue;
        info!("{} turn over, {}; {} to give a clue", ending, reason, self.current_team);
        self.record(Event::TurnEnded {
            team: ending,
            reason,
        });
    }

    fn finish(&mut self, winner: Team, reason: Victory) {
        info!("{} team wins: {}", winner, reason);
        self.phase = Phase::Finished { winner, reason };
        self.record(Event::GameWon { winner, reason });
    }

    fn record(&mut self, event: Event) {
        self.log.push(EventEntry::public(event));
    }
}

/// Pure form of [`Game::handle_action`]: consumes a game and returns its successor.
pub fn reduce(mut game: Game, action: &Action) -> (Game, Result<Vec<Event>, GameError>) {
    let result = game.handle_action(action);
    (game, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::BOARD_SIZE, player::Role};

    fn game() -> Game {
        let words: Vec<String> = (0..25).map(|i| format!("word{i}")).collect();
        Game::with_seed(&words, 2024).unwrap()
    }

    fn hidden(game: &Game, affiliation: Affiliation) -> usize {
        game.board()
            .cards()
            .iter()
            .position(|c| c.affiliation() == affiliation && !c.revealed())
            .unwrap()
    }

    fn guessing(team: Team, allowed: usize) -> Game {
        let mut game = game();
        if team == Team::Blue {
            game.submit_clue("opening:0").unwrap();
            game.end_guessing().unwrap();
        }
        game.submit_clue(&format!("hint:{allowed}")).unwrap();
        game
    }

    #[test]
    fn submit_clue_should_open_guessing() {
        let mut game = game();
        let clue = game.submit_clue("ocean:2").unwrap();

        assert_eq!(clue.to_string(), "ocean:2");
        assert_eq!(game.current_clue(), Some(&clue));
        assert_eq!(game.allowed_guesses(), 2);
        assert_eq!(game.guesses_made(), 0);
        assert_eq!(game.acting_role(), Some(Role::Operative));
        assert_eq!(
            game.log().last().map(|e| &e.event),
            Some(&Event::ClueGiven {
                team: Team::Red,
                clue
            })
        );
    }

    #[test]
    fn rejected_clue_should_change_nothing() {
        let mut game = game();
        let log_len = game.log().len();
        let codename = game.board().cards()[0].word().to_uppercase();

        assert!(game.submit_clue("no colon").is_err());
        assert!(game.submit_clue(&format!("{codename}:1")).is_err());
        assert!(game.submit_clue("x:10").is_err());
        assert_eq!(game.phase(), &Phase::Clue);
        assert_eq!(game.log().len(), log_len);
    }

    #[test]
    fn padded_clue_should_be_refused() {
        let mut game = game();
        assert_eq!(
            game.submit_clue(" ocean:2"),
            Err(GameError::Clue(ClueRejection::InvalidWord))
        );
        assert_eq!(
            game.submit_clue("ocean:2 "),
            Err(GameError::Clue(ClueRejection::InvalidNumber("2 ".to_string())))
        );
        assert_eq!(game.phase(), &Phase::Clue);
    }

    #[test]
    fn second_clue_in_a_turn_should_be_refused() {
        let mut game = guessing(Team::Red, 2);
        assert_eq!(game.submit_clue("again:1"), Err(GameError::WrongPhase));
        assert_eq!(game.allowed_guesses(), 2);
    }

    #[test]
    fn red_at_seven_may_ask_for_two_but_not_three() {
        let mut game = game();
        game.red_score = 7;
        assert!(matches!(
            game.submit_clue("x:3"),
            Err(GameError::Clue(ClueRejection::TooManyGuesses { .. }))
        ));
        assert_eq!(game.submit_clue("x:2").map(|c| c.number()), Ok(2));
    }

    #[test]
    fn reveal_before_a_clue_should_be_refused() {
        let mut game = game();
        assert_eq!(game.reveal_card(0), Err(RevealError::WrongPhase));
        assert_eq!(game.reveal_by_word("word0"), Err(RevealError::WrongPhase));
        assert!(game.board().cards().iter().all(|c| !c.revealed()));
    }

    #[test]
    fn correct_guesses_should_score_until_the_clue_is_used_up() {
        let mut game = guessing(Team::Red, 2);

        game.reveal_card(hidden(&game, Affiliation::Red)).unwrap();
        assert_eq!(game.red_score(), 1);
        assert_eq!(game.guesses_made(), 1);
        assert_eq!(game.current_team(), Team::Red);
        assert!(matches!(game.phase(), Phase::Guess { .. }));

        game.reveal_card(hidden(&game, Affiliation::Red)).unwrap();
        assert_eq!(game.red_score(), 2);
        assert_eq!(game.current_team(), Team::Blue);
        assert_eq!(game.phase(), &Phase::Clue);
        assert_eq!(game.current_clue(), None);
        assert_eq!(game.allowed_guesses(), 0);
        assert_eq!(game.guesses_made(), 0);
    }

    #[test]
    fn bystander_should_end_the_turn_without_scoring() {
        let mut game = guessing(Team::Red, 3);
        let card = game.reveal_card(hidden(&game, Affiliation::Neutral)).unwrap();

        assert_eq!(card.affiliation(), Affiliation::Neutral);
        assert!(card.revealed());
        assert_eq!((game.red_score(), game.blue_score()), (0, 0));
        assert_eq!(game.current_team(), Team::Blue);
        assert_eq!(
            game.log().last().map(|e| &e.event),
            Some(&Event::TurnEnded {
                team: Team::Red,
                reason: TurnEnd::Bystander
            })
        );
    }

    #[test]
    fn opposing_agent_should_score_for_the_opponent_and_end_the_turn() {
        let mut game = guessing(Team::Red, 3);
        game.reveal_card(hidden(&game, Affiliation::Blue)).unwrap();

        assert_eq!((game.red_score(), game.blue_score()), (0, 1));
        assert_eq!(game.current_team(), Team::Blue);
        assert_eq!(game.phase(), &Phase::Clue);
    }

    #[test]
    fn opposing_agent_should_only_pass_the_turn_even_at_their_threshold() {
        let mut game = guessing(Team::Red, 3);
        game.blue_score = 7;
        game.reveal_card(hidden(&game, Affiliation::Blue)).unwrap();

        assert_eq!(game.blue_score(), 8);
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_team(), Team::Blue);
        assert_eq!(game.phase(), &Phase::Clue);
        assert_eq!(
            game.log().last().map(|e| &e.event),
            Some(&Event::TurnEnded {
                team: Team::Red,
                reason: TurnEnd::OpponentAgent
            })
        );
    }

    #[test]
    fn assassin_should_hand_the_win_to_the_other_team() {
        for team in [Team::Red, Team::Blue] {
            let mut game = guessing(team, 1);
            let scores = (game.red_score(), game.blue_score());
            game.reveal_card(hidden(&game, Affiliation::Assassin)).unwrap();

            assert_eq!(game.winner(), Some(team.other()));
            assert_eq!((game.red_score(), game.blue_score()), scores);
            assert_eq!(game.guesses_made(), 0);
            assert_eq!(game.acting_role(), None);
        }
    }

    #[test]
    fn reaching_nine_should_win_before_the_turn_switches() {
        let mut game = guessing(Team::Red, 1);
        game.red_score = 8;
        game.reveal_card(hidden(&game, Affiliation::Red)).unwrap();

        assert_eq!(game.red_score(), 9);
        assert_eq!(game.winner(), Some(Team::Red));
        assert_eq!(game.current_team(), Team::Red);
    }

    #[test]
    fn blue_should_win_at_eight() {
        let mut game = guessing(Team::Blue, 1);
        game.blue_score = 7;
        game.reveal_card(hidden(&game, Affiliation::Blue)).unwrap();

        assert_eq!(game.winner(), Some(Team::Blue));
    }

    #[test]
    fn reveal_by_word_should_ignore_missing_and_revealed_words() {
        let mut game = guessing(Team::Red, 2);
        let index = hidden(&game, Affiliation::Red);
        let word = game.board().cards()[index].word().to_string();

        assert_eq!(game.reveal_by_word("absent"), Err(RevealError::NotFound));
        assert_eq!(
            game.reveal_by_word(&word.to_uppercase()),
            Err(RevealError::NotFound)
        );
        assert_eq!(game.reveal_by_word(&word).map(|c| c.word().to_string()), Ok(word.clone()));

        let log_len = game.log().len();
        let scores = (game.red_score(), game.blue_score());
        assert_eq!(game.reveal_by_word(&word), Err(RevealError::NotFound));
        assert_eq!(game.log().len(), log_len);
        assert_eq!((game.red_score(), game.blue_score()), scores);
        assert_eq!(game.guesses_made(), 1);
    }

    #[test]
    fn reveal_card_should_refuse_revealed_and_out_of_range_positions() {
        let mut game = guessing(Team::Red, 3);
        let index = hidden(&game, Affiliation::Red);
        game.reveal_card(index).unwrap();

        assert_eq!(game.reveal_card(index), Err(RevealError::AlreadyRevealed(index)));
        assert_eq!(game.reveal_card(BOARD_SIZE), Err(RevealError::NotFound));
        assert_eq!(game.red_score(), 1);
    }

    #[test]
    fn end_guessing_should_only_work_while_guessing() {
        let mut game = game();
        assert_eq!(game.end_guessing(), Err(GameError::WrongPhase));

        game.submit_clue("hint:1").unwrap();
        game.end_guessing().unwrap();
        assert_eq!(game.current_team(), Team::Blue);
        assert_eq!(game.acting_role(), Some(Role::Spymaster));
    }

    #[test]
    fn finished_game_should_refuse_every_action() {
        let mut game = guessing(Team::Red, 1);
        game.reveal_card(hidden(&game, Affiliation::Assassin)).unwrap();
        let log_len = game.log().len();

        for action in [
            Action::GiveClue("late:1".to_string()),
            Action::RevealCard(0),
            Action::RevealWord("word1".to_string()),
            Action::EndGuessing,
        ] {
            assert_eq!(game.handle_action(&action), Err(GameError::GameOver));
        }
        assert_eq!(game.reveal_card(0), Err(RevealError::WrongPhase));
        assert_eq!(game.log().len(), log_len);
    }

    #[test]
    fn handle_action_should_return_the_new_events() {
        let mut game = game();
        let neutral = hidden(&game, Affiliation::Neutral);
        let word = game.board().cards()[neutral].word().to_string();

        let events = game
            .handle_action(&Action::GiveClue("hint:2".to_string()))
            .unwrap();
        assert!(matches!(events.as_slice(), [Event::ClueGiven { team: Team::Red, .. }]));

        let events = game.handle_action(&Action::RevealWord(word.clone())).unwrap();
        assert_eq!(
            events,
            vec![
                Event::CardRevealed {
                    team: Team::Red,
                    index: neutral,
                    word,
                    affiliation: Affiliation::Neutral
                },
                Event::TurnEnded {
                    team: Team::Red,
                    reason: TurnEnd::Bystander
                },
            ]
        );
    }

    #[test]
    fn handle_action_should_surface_rejections() {
        let mut game = game();
        assert_eq!(
            game.handle_action(&Action::GiveClue("tree".to_string())),
            Err(GameError::Clue(ClueRejection::MissingSeparator))
        );
        assert_eq!(
            game.handle_action(&Action::RevealCard(0)),
            Err(GameError::Reveal(RevealError::WrongPhase))
        );
    }

    #[test]
    fn reduce_should_thread_the_game_through() {
        let (game, result) = reduce(game(), &Action::GiveClue("hint:1".to_string()));
        assert!(result.is_ok());
        assert_eq!(game.allowed_guesses(), 1);

        let (game, result) = reduce(game, &Action::GiveClue("hint:1".to_string()));
        assert_eq!(result, Err(GameError::WrongPhase));
        assert_eq!(game.allowed_guesses(), 1);
    }

    #[test]
    fn zero_clue_should_switch_after_the_first_correct_guess() {
        let mut game = guessing(Team::Red, 0);
        game.reveal_card(hidden(&game, Affiliation::Red)).unwrap();
        assert_eq!(game.current_team(), Team::Blue);
    }
}
