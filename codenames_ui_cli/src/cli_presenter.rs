use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use itertools::Itertools;

use codenames_core::{
    action::Action,
    affiliation::Affiliation,
    board::BOARD_COLUMNS,
    event::Event,
    presenter::Presenter,
    view::{CardView, GameView, PhaseName},
    GameError,
};
use strum::IntoEnumIterator;

static RULES: &str = "
*** Codenames ***
Two teams, red and blue, race to contact all of their secret agents hidden among 25 codenames.
Each team has a spymaster, who knows which codename belongs to whom, and operatives, who do not.
On their turn the spymaster gives a clue of the form word:number, for example ocean:2. The word
must be a single word and may not be one of the codenames still hidden on the board; the number
says how many codenames relate to it and may not exceed the agents the team still has to find.
The operatives then reveal codenames one at a time. Finding one of their own agents scores a
point and lets them continue until the number of guesses is used up. A bystander or an agent of
the other team ends the turn, and the other team's agent scores for them. Whoever reveals the
assassin loses at once. Red starts and has 9 agents, blue has 8.";

#[derive(Debug, PartialEq)]
enum CliAction {
    Quit,
    Rules,
    CardKey,
    Json,
    Pass,
    Input(String),
}

#[derive(Debug, PartialEq, Eq)]
struct ParseActionError;

impl CliAction {
    fn info(&self) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Rules => "display rules".to_string(),
            CliAction::CardKey => "display what each kind of card does".to_string(),
            CliAction::Json => "print the current state as json".to_string(),
            CliAction::Pass => "stop guessing and end the turn".to_string(),
            CliAction::Input(s) => s.clone(),
        }
    }

    fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Rules => "r".to_string(),
            CliAction::CardKey => "c".to_string(),
            CliAction::Json => "j".to_string(),
            CliAction::Pass => "p".to_string(),
            CliAction::Input(s) => s.clone(),
        }
    }

    /// Turns free input into a game action for the given phase.
    fn into_action(self, phase: PhaseName) -> Option<Action> {
        match self {
            CliAction::Pass => Some(Action::EndGuessing),
            CliAction::Input(text) => match phase {
                PhaseName::Guess => match text.parse::<usize>() {
                    Ok(n) if n >= 1 => Some(Action::RevealCard(n - 1)),
                    _ => Some(Action::RevealWord(text)),
                },
                _ => Some(Action::GiveClue(text)),
            },
            _ => None,
        }
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ParseActionError),
            "q" => Ok(CliAction::Quit),
            "r" => Ok(CliAction::Rules),
            "c" => Ok(CliAction::CardKey),
            "j" => Ok(CliAction::Json),
            "p" => Ok(CliAction::Pass),
            other => Ok(CliAction::Input(other.to_string())),
        }
    }
}

fn card_label(index: usize, card: &CardView) -> String {
    let tag = match (card.revealed, card.affiliation) {
        (true, Some(a)) => format!("[{}]", a.to_string().to_uppercase()),
        (false, Some(a)) => format!("({})", a.to_string().to_lowercase()),
        _ => String::new(),
    };
    format!("{:>2} {:<14}{:<11}", index + 1, card.word, tag)
}

pub fn render_board(view: &GameView) -> String {
    view.cards
        .iter()
        .enumerate()
        .chunks(BOARD_COLUMNS)
        .into_iter()
        .map(|row| row.map(|(i, c)| card_label(i, c)).join(" | "))
        .join("\n")
}

pub fn render_status(view: &GameView) -> String {
    let turn = match view.winner {
        Some(winner) => format!("Game over, {} team won", winner),
        None => format!("Turn: {} {} ({})", view.current_team, view.perspective, view.phase),
    };
    let clue = view
        .clue
        .as_ref()
        .map(|c| {
            format!(
                "\nClue: {} ({} of {} guesses made)",
                c, view.guesses_made, view.allowed_guesses
            )
        })
        .unwrap_or_default();
    format!(
        "{}\nScore: Red {} - Blue {} (still to find: red {}, blue {}){}",
        turn, view.red_score, view.blue_score, view.red_remaining, view.blue_remaining, clue
    )
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::BoardDealt {
            words,
            key: Some(key),
        } => Affiliation::iter()
            .filter(|a| a.team().is_some())
            .map(|a| {
                let agents = words
                    .iter()
                    .zip(key)
                    .filter(|(_, k)| **k == a)
                    .map(|(w, _)| w)
                    .join(", ");
                format!("~ {} agents: {}", a, agents)
            })
            .join("\n"),
        Event::BoardDealt { words, key: None } => {
            format!("~ Board dealt with {} codenames", words.len())
        }
        Event::ClueGiven { team, clue } => format!("~ Clue: {} spymaster says {}", team, clue),
        Event::CardRevealed {
            team,
            word,
            affiliation,
            ..
        } => format!("~ Reveal: {} team contacted {} ({})", team, word, affiliation),
        Event::TurnEnded { team, reason } => format!("~ Turn over for {}: {}", team, reason),
        Event::GameWon { winner, reason } => {
            format!("*** {} team wins, {} ***", winner, reason)
        }
    }
}

pub struct CliPresenter<R: BufRead> {
    input: R,
}

impl<R: BufRead> CliPresenter<R> {
    pub fn new(input: R) -> Self {
        CliPresenter { input }
    }

    fn query_user(&mut self, cmds: &[CliAction], prompt: &str) -> Option<CliAction> {
        print!("\n{}\n", prompt);
        loop {
            for cmd in cmds {
                println!("- [{}]: {}", cmd.cmd_str(), cmd.info());
            }
            print!(">");
            io::stdout().flush().ok();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {
                    if let Ok(action) = CliAction::from_str(&line) {
                        return Some(action);
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Presenter for CliPresenter<R> {
    fn notify(&mut self, view: &GameView, events: &[Event]) {
        println!("================================================");
        for event in events {
            println!("{}", describe_event(event));
        }
        if view.winner.is_some() {
            println!("\n{}\n\n{}", render_board(view), render_status(view));
        }
    }

    fn obtain_action(&mut self, view: &GameView) -> Option<Action> {
        println!("\n{}\n\n{}", render_board(view), render_status(view));

        let (prompt, mut cmds) = match view.phase {
            PhaseName::Guess => (
                "Operatives, enter a card number or codename to reveal:",
                vec![CliAction::Pass],
            ),
            _ => ("Spymaster, enter a clue as word:number:", vec![]),
        };
        cmds.extend([
            CliAction::Quit,
            CliAction::Rules,
            CliAction::CardKey,
            CliAction::Json,
        ]);

        loop {
            match self.query_user(&cmds, prompt)? {
                CliAction::Quit => return None,
                CliAction::Rules => println!("{}", RULES),
                CliAction::CardKey => {
                    println!("{}", Affiliation::iter().map(|a| a.rule()).join("\n"))
                }
                CliAction::Json => match serde_json::to_string_pretty(view) {
                    Ok(json) => println!("{}", json),
                    Err(e) => println!("! could not serialize the game: {}", e),
                },
                other => return other.into_action(view.phase),
            }
        }
    }

    fn reject(&mut self, error: &GameError) {
        println!("! {}, please try again", error);
    }
}
