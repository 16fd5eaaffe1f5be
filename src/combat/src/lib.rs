// src/combat/src/lib.rs

pub mod combatant;
pub mod events;
pub mod monster;
pub mod rng;

pub use crate::combatant::{Combatant, Creature};
pub use crate::events::GameEvent;
pub use crate::monster::{MONSTER_TABLE, Monster, MonsterCatalog, MonsterStats, MonsterType};
pub use crate::rng::{GameRng, RandomSource, pick_variant};

/// Handles combat interactions between entities
pub struct Combat;

impl Combat {
    /// Resolve one fight exchange: the attacker strikes first and the defender
    /// only hits back if it survived.
    pub fn engage<T: Combatant, U: Combatant>(attacker: &mut T, defender: &mut U) -> CombatResult {
        let mut result = CombatResult::new();

        result.log(attacker.attack(defender));
        if defender.is_dead() {
            result.defeated = true;
            return result;
        }

        result.log(defender.attack(attacker));
        result.attacker_died = attacker.is_dead();

        result
    }
}

/// Combat result with narrative logs
#[derive(Debug, Clone, Default)]
pub struct CombatResult {
    pub logs: Vec<GameEvent>, // Combat messages for UI
    pub defeated: bool,       // Whether the defender was defeated
    pub attacker_died: bool,  // Whether the counterattack killed the attacker
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, event: GameEvent) {
        self.logs.push(event);
    }
}
