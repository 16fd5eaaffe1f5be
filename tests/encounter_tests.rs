// tests/encounter_tests.rs
//! Round-by-round behaviour of a single encounter

mod helpers;

use combat::{Combatant, Monster, MonsterType};
use helpers::{ScriptedInteraction, ScriptedRandom};
use hero::Player;
use items::{Potion, PotionSize, PotionType};
use pretty_assertions::assert_eq;
use terminal_gauntlet::encounter::{Encounter, EncounterState};
use terminal_gauntlet::input::Choice;

#[test]
fn test_slime_dies_before_it_can_retaliate() {
    let mut player = Player::new("Alex");
    let mut encounter = Encounter::new(Monster::new(MonsterType::Slime));
    let mut rng = ScriptedRandom::default();

    let events = encounter.play_round(&mut player, Choice::Fight, &mut rng);

    assert_eq!(encounter.state(), EncounterState::MonsterDied);
    assert_eq!(encounter.monster().health(), 0);
    assert_eq!(player.health(), 10);
    let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Alex hit slime for 1 damage.".to_string()]);
    assert!(rng.draws.is_empty());
}

#[test]
fn test_failed_flee_lets_the_dragon_attack() {
    let mut player = Player::new("Alex");
    let mut encounter = Encounter::new(Monster::new(MonsterType::Dragon));
    let mut rng = ScriptedRandom::new([0]);

    let events = encounter.play_round(&mut player, Choice::Run, &mut rng);

    assert_eq!(encounter.state(), EncounterState::InProgress);
    assert_eq!(player.health(), 6);
    assert_eq!(encounter.monster().health(), 20);
    assert_eq!(rng.draws, vec![(0, 1)]);
    let lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Alex failed to flee!".to_string(),
            "dragon hit Alex for 4 damage.".to_string(),
        ]
    );
}

#[test]
fn test_successful_flee_exchanges_no_damage() {
    let mut player = Player::new("Alex");
    let mut encounter = Encounter::new(Monster::new(MonsterType::Orc));
    let mut rng = ScriptedRandom::new([1]);

    let events = encounter.play_round(&mut player, Choice::Run, &mut rng);

    assert_eq!(encounter.state(), EncounterState::PlayerFled);
    assert_eq!(player.health(), 10);
    assert_eq!(encounter.monster().health(), 4);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].to_string(), "Alex successfully fled.");
}

#[test]
fn test_failed_flee_can_kill_the_player() {
    let mut player = Player::new("Alex");
    player.reduce_health(7);
    let mut encounter = Encounter::new(Monster::new(MonsterType::Dragon));
    let mut rng = ScriptedRandom::new([0]);

    encounter.play_round(&mut player, Choice::Run, &mut rng);

    assert_eq!(encounter.state(), EncounterState::PlayerDied);
    assert_eq!(player.health(), -1);
}

#[test]
fn test_monster_counterattack_can_kill_the_player() {
    let mut player = Player::new("Alex");
    player.reduce_health(6);
    let mut encounter = Encounter::new(Monster::new(MonsterType::Dragon));
    let mut rng = ScriptedRandom::default();

    encounter.play_round(&mut player, Choice::Fight, &mut rng);

    assert_eq!(encounter.state(), EncounterState::PlayerDied);
    assert_eq!(player.health(), 0);
    assert_eq!(encounter.monster().health(), 19);
}

#[test]
fn test_resolve_fights_until_the_orc_falls() {
    let mut player = Player::new("Alex");
    let mut encounter = Encounter::new(Monster::new(MonsterType::Orc));
    let mut rng = ScriptedRandom::default();
    let mut ui = ScriptedInteraction::new([Choice::Fight; 4]);

    let state = encounter.resolve(&mut player, &mut rng, &mut ui).unwrap();

    assert_eq!(state, EncounterState::MonsterDied);
    assert_eq!(player.health(), 4);
    assert_eq!(
        ui.lines(),
        vec![
            "Alex hit orc for 1 damage.",
            "orc hit Alex for 2 damage.",
            "Alex hit orc for 1 damage.",
            "orc hit Alex for 2 damage.",
            "Alex hit orc for 1 damage.",
            "orc hit Alex for 2 damage.",
            "Alex hit orc for 1 damage.",
        ]
    );
}

#[test]
fn test_resolve_mixes_running_and_fighting() {
    let mut player = Player::new("Alex");
    let mut encounter = Encounter::new(Monster::new(MonsterType::Orc));
    let mut rng = ScriptedRandom::new([0, 1]);
    let mut ui = ScriptedInteraction::new([Choice::Run, Choice::Fight, Choice::Run]);

    let state = encounter.resolve(&mut player, &mut rng, &mut ui).unwrap();

    assert_eq!(state, EncounterState::PlayerFled);
    // 逃跑失败挨一下，战斗回合再挨一下
    assert_eq!(player.health(), 6);
    assert_eq!(encounter.monster().health(), 3);
    assert!(rng.is_exhausted());
}

#[test]
fn test_negative_damage_heals_the_monster() {
    // 攻击力没有下限：负数攻击会给怪物回血
    let mut player = Player::new("Alex");
    player.drink(&Potion::lookup(PotionType::Weakness, PotionSize::Large));
    assert_eq!(player.damage(), -1);

    let mut encounter = Encounter::new(Monster::new(MonsterType::Slime));
    let mut rng = ScriptedRandom::default();
    let events = encounter.play_round(&mut player, Choice::Fight, &mut rng);

    assert_eq!(encounter.state(), EncounterState::InProgress);
    assert_eq!(encounter.monster().health(), 2);
    assert_eq!(player.health(), 9);
    assert_eq!(events[0].to_string(), "Alex hit slime for -1 damage.");
}
