use std::io::{self, BufRead};
use std::rc::Rc;

use anyhow::{Context, anyhow};
use checkers_core::{GameSession, InteractionAdapter, Rules};
use log::warn;

use crate::command::UserCommand;
use crate::feedback::{AnnouncingObserver, ConsoleFeedback};
use crate::picker::FlatBoardPicker;
use crate::scene::Scene;
use crate::tui;


pub struct ConsoleGame {
    adapter: InteractionAdapter<FlatBoardPicker, ConsoleFeedback, AnnouncingObserver>,
}

impl ConsoleGame {
    pub fn new(rules: Rules) -> anyhow::Result<Self> {
        let session = GameSession::new(rules)
            .map_err(|err| anyhow!("Invalid starting position: {err:?}"))?;
        let scene = Scene::from_board(session.board()).into_shared();
        let adapter = InteractionAdapter::new(
            session,
            FlatBoardPicker::new(Rc::clone(&scene)),
            ConsoleFeedback::new(scene),
            AnnouncingObserver {},
        );
        Ok(ConsoleGame { adapter })
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession { self.adapter.session() }
    #[cfg(test)]
    pub fn feedback(&self) -> &ConsoleFeedback { self.adapter.feedback() }

    // Returns false if the game should stop.
    pub fn execute(&mut self, command: UserCommand) -> bool {
        match command {
            UserCommand::Click { x, y } => self.adapter.on_click(x, y),
            UserCommand::Hover { x, y } => self.adapter.on_pointer_move(x, y),
            UserCommand::Board => {}
            UserCommand::Quit => return false,
        }
        // Animations are instant, so every move is over by the time the command is processed.
        if let Some(completion) = self.adapter.feedback_mut().take_completion() {
            self.adapter.on_move_animation_complete(completion);
        }
        true
    }

    pub fn render(&self) -> String {
        let session = self.adapter.session();
        tui::render_game(session.board(), self.adapter.feedback(), session.active_force())
    }
}

pub fn run(rules: Rules) -> anyhow::Result<()> {
    let mut game = ConsoleGame::new(rules)?;
    println!("{}", game.render());
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin.")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<UserCommand>() {
            Ok(command) => command,
            Err(err) => {
                warn!("{err:#}");
                continue;
            }
        };
        if !game.execute(command) {
            break;
        }
        println!("{}", game.render());
    }
    Ok(())
}
