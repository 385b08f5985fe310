//! Interactive session driver.
//!
//! Owns the read-eval-print loop: asks for a character name, then feeds each
//! input line to the [`CommandProcessor`] until the game is won, lost, or the
//! player quits. End of input counts as quitting.
//!
//! Generic over `BufRead`/`Write` so the binary wires it to stdin/stdout and
//! tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::castle::commands::{describe_room, CommandProcessor};
use crate::castle::state::{GameState, GameStatus};
use crate::config::GameConfig;
use crate::logutil::escape_log;
use crate::validation::validate_player_name;

const NAME_PROMPT: &str = "Enter your character's name: ";
const COMMAND_PROMPT: &str = "\nWhat would you like to do? ";

pub struct Session<R, W> {
    input: R,
    output: W,
    /// Repeat each input line after its prompt (for piped, non-TTY input).
    echo: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            echo: false,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Consume the session and hand back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one game to completion and return the final state.
    ///
    /// `preset_name` skips the name prompt when it passes validation.
    pub fn run(&mut self, config: &GameConfig, preset_name: Option<&str>) -> Result<GameState> {
        let rule = "=".repeat(50);
        writeln!(self.output, "\n{}\nCASTLE ESCAPE\n{}", rule, rule)?;

        let name = match preset_name.map(validate_player_name) {
            Some(Ok(name)) => Some(name),
            Some(Err(e)) => {
                warn!("ignoring preset name: {}", e);
                self.ask_name()?
            }
            None => self.ask_name()?,
        };

        let Some(name) = name else {
            let mut state = GameState::new("");
            state.status = GameStatus::Quit;
            writeln!(self.output, "\nGame interrupted. Thanks for playing!")?;
            return Ok(state);
        };

        info!("new game: player={}", escape_log(&name));
        let mut state = GameState::new(&name);
        let mut processor = CommandProcessor::new(config);

        writeln!(
            self.output,
            "\nWelcome, {}! You find yourself at the entrance of an abandoned castle.\n\
Your goal: Find the Golden Crown and escape!\n\
Type 'help' at any time for commands.\n",
            state.player.name
        )?;
        writeln!(self.output, "{}", describe_room(&state))?;

        while !state.status.is_over() {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                state.status = GameStatus::Quit;
                writeln!(self.output, "\nThanks for playing!")?;
                break;
            };
            let response = processor.process(&mut state, &line);
            if !response.is_empty() {
                writeln!(self.output, "{}", response)?;
            }
        }

        match state.status {
            GameStatus::Won => writeln!(self.output, "\nThanks for playing Castle Escape!")?,
            _ => writeln!(self.output, "\nGame Over. Better luck next time!")?,
        }
        self.output.flush().context("Failed to flush output")?;
        info!(
            "game finished: player={} status={:?} turns={}",
            escape_log(&state.player.name),
            state.status,
            state.player.turns
        );
        Ok(state)
    }

    /// Keep asking until a valid name arrives. `None` on end of input.
    fn ask_name(&mut self) -> Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(NAME_PROMPT)? else {
                return Ok(None);
            };
            match validate_player_name(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Print a prompt and read one line without its terminator.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush prompt")?;

        // Raw bytes: a line that isn't UTF-8 is just another unknown command.
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read player input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(&['\r', '\n'][..])
            .to_string();
        if self.echo {
            writeln!(self.output, "{}", line)?;
        }
        Ok(Some(line))
    }
}
