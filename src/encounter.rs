//! One player-versus-monster meeting, resolved round by round.

use combat::{Combat, Combatant, GameEvent, Monster, RandomSource};
use error::GameError;
use hero::Player;

use crate::input::{Choice, Interaction};

mod constants {
    /// Flee roll is drawn from [0, FLEE_ROLL_MAX]; anything but zero escapes.
    pub const FLEE_ROLL_MAX: i32 = 1;
}

/// Encounter state machine; everything but `InProgress` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    InProgress,
    PlayerFled,
    PlayerDied,
    MonsterDied,
}

impl EncounterState {
    pub fn is_over(self) -> bool {
        self != EncounterState::InProgress
    }
}

#[derive(Debug, Clone)]
pub struct Encounter {
    monster: Monster,
    state: EncounterState,
}

impl Encounter {
    pub fn new(monster: Monster) -> Self {
        Self {
            monster,
            state: EncounterState::InProgress,
        }
    }

    /// Start an encounter against a uniformly chosen monster
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Ok(Self::new(Monster::random(rng)?))
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn into_monster(self) -> Monster {
        self.monster
    }

    /// Play one round for the given choice and return what happened.
    ///
    /// Calling this on a finished encounter is a no-op.
    pub fn play_round<R: RandomSource + ?Sized>(
        &mut self,
        player: &mut Player,
        choice: Choice,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        if self.state.is_over() {
            return Vec::new();
        }

        match choice {
            Choice::Run => self.try_running(player, rng),
            Choice::Fight => {
                let result = Combat::engage(player, &mut self.monster);
                if result.defeated {
                    self.state = EncounterState::MonsterDied;
                } else if result.attacker_died {
                    self.state = EncounterState::PlayerDied;
                }
                result.logs
            }
        }
    }

    fn try_running<R: RandomSource + ?Sized>(
        &mut self,
        player: &mut Player,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let player_name = player.name().to_string();

        if rng.uniform_int(0, constants::FLEE_ROLL_MAX) != 0 {
            self.state = EncounterState::PlayerFled;
            return vec![GameEvent::Fled {
                player: player_name,
            }];
        }

        let hit = self.monster.attack(player);
        if player.is_dead() {
            self.state = EncounterState::PlayerDied;
        }
        vec![
            GameEvent::FailedToFlee {
                player: player_name,
            },
            hit,
        ]
    }

    /// Keep asking for choices until the encounter reaches a terminal state
    pub fn resolve<R, I>(
        &mut self,
        player: &mut Player,
        rng: &mut R,
        ui: &mut I,
    ) -> anyhow::Result<EncounterState>
    where
        R: RandomSource + ?Sized,
        I: Interaction + ?Sized,
    {
        while !self.state.is_over() {
            let choice = ui.prompt_run_or_fight()?;
            for event in self.play_round(player, choice, rng) {
                ui.emit(&event)?;
            }
        }
        Ok(self.state)
    }
}
