//! Post-kill sequence: level up, collect gold, maybe find a potion.

use combat::{Combatant, GameEvent, Monster, RandomSource, pick_variant};
use error::GameError;
use hero::Player;
use items::{Potion, PotionSize, PotionType};

use crate::input::Interaction;

pub mod constants {
    /// Discovery roll is drawn from [0, DISCOVERY_ROLL_MAX].
    pub const DISCOVERY_ROLL_MAX: i32 = 9;
    /// Rolls strictly below this find a potion (3 in 10).
    pub const DISCOVERY_THRESHOLD: i32 = 3;
}

/// Draw a uniformly random potion type and size from the catalog
pub fn random_potion<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Potion, GameError> {
    let potion_type = pick_variant::<PotionType, R>(rng, "potion type")?;
    let size = pick_variant::<PotionSize, R>(rng, "potion size")?;
    Ok(Potion::lookup(potion_type, size))
}

/// Roll for a mysterious potion and let the player decide whether to drink it.
///
/// Returns the potion that was drunk, if any. Its identity is only announced
/// after it has taken effect.
pub fn find_potion<R, I>(player: &mut Player, rng: &mut R, ui: &mut I) -> anyhow::Result<Option<Potion>>
where
    R: RandomSource + ?Sized,
    I: Interaction + ?Sized,
{
    let roll = rng.uniform_int(0, constants::DISCOVERY_ROLL_MAX);
    if roll >= constants::DISCOVERY_THRESHOLD {
        return Ok(None);
    }
    if !ui.prompt_drink_unknown_potion(player.name())? {
        return Ok(None);
    }

    let potion = random_potion(rng)?;
    player.drink(&potion);
    ui.emit(&GameEvent::DrankPotion {
        player: player.name().to_string(),
        potion,
    })?;
    Ok(Some(potion))
}

/// Everything that happens after the player kills a monster, in order.
pub fn handle_monster_death<R, I>(
    player: &mut Player,
    monster: &Monster,
    rng: &mut R,
    ui: &mut I,
) -> anyhow::Result<Option<Potion>>
where
    R: RandomSource + ?Sized,
    I: Interaction + ?Sized,
{
    ui.emit(&GameEvent::Killed {
        player: player.name().to_string(),
        monster: monster.name().to_string(),
    })?;

    let level_up = player.level_up();
    ui.emit(&level_up)?;

    player.add_gold(monster.gold());
    ui.emit(&GameEvent::FoundGold {
        player: player.name().to_string(),
        gold: monster.gold(),
    })?;

    find_potion(player, rng, ui)
}
