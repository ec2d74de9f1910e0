use crate::{action::Action, event::Event, game_logic::GameError, view::GameView};

/// The seat a front end takes at the table: it shows the game and supplies actions.
pub trait Presenter {
    /// Called after every accepted action with the events it produced.
    fn notify(&mut self, view: &GameView, events: &[Event]);

    /// Asks for the next action of whoever `view.perspective` names. `None` quits.
    fn obtain_action(&mut self, view: &GameView) -> Option<Action>;

    /// Called when an action was refused; the next `obtain_action` re-prompts.
    fn reject(&mut self, error: &GameError);
}
