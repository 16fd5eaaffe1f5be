//! Interaction surface: prompts for player choices and the narrative sink.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use combat::GameEvent;
use crossterm::style::{StyledContent, Stylize};
use error::GameError;

/// The player's decision for one encounter round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Run,
    Fight,
}

/// Everything the game core needs from the outside world besides randomness.
///
/// Prompts block until a valid answer is available; `emit` is fire-and-forget.
pub trait Interaction {
    fn prompt_name(&mut self) -> anyhow::Result<String>;

    fn prompt_run_or_fight(&mut self) -> anyhow::Result<Choice>;

    fn prompt_drink_unknown_potion(&mut self, player_name: &str) -> anyhow::Result<bool>;

    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()>;
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn prompt_name(&mut self) -> anyhow::Result<String> {
        (**self).prompt_name()
    }

    fn prompt_run_or_fight(&mut self) -> anyhow::Result<Choice> {
        (**self).prompt_run_or_fight()
    }

    fn prompt_drink_unknown_potion(&mut self, player_name: &str) -> anyhow::Result<bool> {
        (**self).prompt_drink_unknown_potion(player_name)
    }

    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        (**self).emit(event)
    }
}

/// Line-oriented console implementation reading whitespace separated tokens.
pub struct ConsoleInteraction<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    colored: bool,
}

impl ConsoleInteraction<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout, colored when stdout is a terminal
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let colored = stdout.is_terminal();
        Self {
            input: io::stdin().lock(),
            output: stdout,
            pending: VecDeque::new(),
            colored,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    /// Console without styling, used for pipes and tests
    pub fn plain(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            colored: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace separated token; end of input is an error
    fn next_token(&mut self) -> Result<String, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        if self.colored {
            write!(self.output, "{}", text.bold())?;
        } else {
            write!(self.output, "{}", text)?;
        }
        self.output.flush().context("Failed to flush prompt")
    }

    fn style(&self, event: &GameEvent) -> StyledContent<String> {
        let line = event.to_string();
        if !self.colored {
            return line.stylize();
        }
        match event {
            GameEvent::Attacked { .. } | GameEvent::FailedToFlee { .. } => line.red(),
            GameEvent::LevelUp { .. } | GameEvent::Won { .. } => line.green().bold(),
            GameEvent::FoundGold { .. } => line.yellow(),
            GameEvent::DrankPotion { .. } => line.magenta(),
            GameEvent::Died { .. } | GameEvent::GoldLeftBehind => line.dark_red().bold(),
            GameEvent::Encountered { .. } => line.cyan(),
            _ => line.stylize(),
        }
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn prompt_name(&mut self) -> anyhow::Result<String> {
        self.prompt("Enter a name for your character: ")?;
        Ok(self.next_token()?)
    }

    fn prompt_run_or_fight(&mut self) -> anyhow::Result<Choice> {
        loop {
            self.prompt("(R)un or (F)ight: ")?;
            let token = self.next_token()?;
            match token.chars().next() {
                Some('R' | 'r') => return Ok(Choice::Run),
                Some('F' | 'f') => return Ok(Choice::Fight),
                _ => continue,
            }
        }
    }

    fn prompt_drink_unknown_potion(&mut self, player_name: &str) -> anyhow::Result<bool> {
        loop {
            self.prompt(&format!(
                "{} found a mysterious potion! Drink it? [y/n]: ",
                player_name
            ))?;
            let token = self.next_token()?;
            match token.chars().next() {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => continue,
            }
        }
    }

    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        let styled = self.style(event);
        writeln!(self.output, "{}", styled).context("Failed to write narrative line")
    }
}
