use log::{debug, info};

use crate::{
    affiliation::Team,
    event::filter_events,
    game_state::Game,
    player::Role,
    presenter::Presenter,
    view::GameView,
};

/// Drives one game: render, obtain an action, apply it, repeat.
pub struct Session<P: Presenter> {
    game: Game,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    pub fn new(game: Game, presenter: P) -> Self {
        Session { game, presenter }
    }

    pub fn into_parts(self) -> (Game, P) {
        (self.game, self.presenter)
    }

    /// Plays until someone wins or the presenter quits. Returns the winner, if any.
    pub fn play(&mut self) -> Option<Team> {
        let opening = filter_events(self.game.log(), Role::Spymaster);
        self.presenter
            .notify(&GameView::new(&self.game, Role::Spymaster), &opening);

        while let Some(role) = self.game.acting_role() {
            let view = GameView::new(&self.game, role);
            let Some(action) = self.presenter.obtain_action(&view) else {
                if let Some(player) = self.game.acting_player() {
                    info!("{} left the game", player.name);
                }
                return None;
            };

            match self.game.handle_action(&action) {
                Ok(events) => {
                    // once the game is over everyone may see the key
                    let role = self.game.acting_role().unwrap_or(Role::Spymaster);
                    self.presenter
                        .notify(&GameView::new(&self.game, role), &events);
                }
                Err(error) => {
                    debug!("{:?} refused: {}", action, error);
                    self.presenter.reject(&error);
                }
            }
        }
        self.game.winner()
    }
}
