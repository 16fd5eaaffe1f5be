//! Scripted fixtures for driving encounters and whole games deterministically.

#![allow(dead_code)]

use std::collections::VecDeque;

use combat::{GameEvent, RandomSource};
use terminal_gauntlet::input::{Choice, Interaction};

/// Random source replaying a fixed sequence of draws
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
    pub draws: Vec<(i32, i32)>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.draws.push((low, high));
        self.values
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted draw left for [{low}, {high}]"))
    }
}

/// Interaction replaying scripted answers and recording every event
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    name: String,
    choices: VecDeque<Choice>,
    drinks: VecDeque<bool>,
    pub events: Vec<GameEvent>,
    pub drink_prompts: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            name: "Alex".to_string(),
            choices: choices.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_drinks(mut self, drinks: impl IntoIterator<Item = bool>) -> Self {
        self.drinks = drinks.into_iter().collect();
        self
    }

    /// Rendered narrative lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_name(&mut self) -> anyhow::Result<String> {
        Ok(self.name.clone())
    }

    fn prompt_run_or_fight(&mut self) -> anyhow::Result<Choice> {
        self.choices
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted run/fight choice left"))
    }

    fn prompt_drink_unknown_potion(&mut self, player_name: &str) -> anyhow::Result<bool> {
        self.drink_prompts.push(player_name.to_string());
        self.drinks
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted drink answer left"))
    }

    fn emit(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
