//! 游戏循环：一次只进行一场遭遇，直到玩家死亡或获胜。
//!
//! 每场遭遇的流程：
//! - 随机生成怪物并宣布遭遇
//! - 逐回合询问逃跑或战斗，直到遭遇结束
//! - 怪物死亡时执行战利品流程（升级、金币、药水）
//! - 报告剩余生命并检查胜负

use anyhow::Context;
use combat::{Combatant, GameEvent, GameRng, RandomSource};
use hero::Player;

use crate::config::GameConfig;
use crate::encounter::{Encounter, EncounterState};
use crate::input::Interaction;
use crate::loot;

/// 玩家所处的整体状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Alive,
    Won,
    Dead,
}

impl GameState {
    /// 死亡优先于胜利
    pub fn of(player: &Player) -> Self {
        if player.is_dead() {
            GameState::Dead
        } else if player.has_won() {
            GameState::Won
        } else {
            GameState::Alive
        }
    }
}

/// 一局游戏的最终结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Dead,
}

/// 结算信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub level: u32,
    pub gold: u32,
    pub encounters: u32,
    pub kills: u32,
}

/// 主游戏循环
pub struct GameLoop<R: RandomSource, I: Interaction> {
    player: Player,
    rng: R,
    ui: I,
    encounters: u32,
    kills: u32,
}

impl<R: RandomSource, I: Interaction> GameLoop<R, I> {
    pub fn new(player: Player, rng: R, ui: I) -> Self {
        Self {
            player,
            rng,
            ui,
            encounters: 0,
            kills: 0,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ui(&self) -> &I {
        &self.ui
    }

    pub fn state(&self) -> GameState {
        GameState::of(&self.player)
    }

    /// 进行一场完整的遭遇（包括战利品流程）
    pub fn play_encounter(&mut self) -> anyhow::Result<EncounterState> {
        let mut encounter = Encounter::spawn(&mut self.rng)?;
        self.encounters += 1;

        self.ui.emit(&GameEvent::Encountered {
            player: self.player.name().to_string(),
            monster: encounter.monster().name().to_string(),
            symbol: encounter.monster().symbol(),
        })?;

        let state = encounter.resolve(&mut self.player, &mut self.rng, &mut self.ui)?;
        if state == EncounterState::MonsterDied {
            self.kills += 1;
            let monster = encounter.into_monster();
            loot::handle_monster_death(&mut self.player, &monster, &mut self.rng, &mut self.ui)?;
        }

        self.ui.emit(&GameEvent::Hitpoints {
            player: self.player.name().to_string(),
            health: self.player.health(),
        })?;

        Ok(state)
    }

    /// 运行到游戏结束，并输出结算信息
    pub fn run(&mut self) -> anyhow::Result<GameReport> {
        let outcome = loop {
            self.play_encounter()?;
            match self.state() {
                GameState::Alive => continue,
                GameState::Won => break GameOutcome::Won,
                GameState::Dead => break GameOutcome::Dead,
            }
        };

        let player = self.player.name().to_string();
        match outcome {
            GameOutcome::Won => self.ui.emit(&GameEvent::Won {
                player,
                gold: self.player.gold(),
            })?,
            GameOutcome::Dead => {
                self.ui.emit(&GameEvent::Died {
                    player,
                    level: self.player.level(),
                    gold: self.player.gold(),
                })?;
                if self.player.gold() > 0 {
                    self.ui.emit(&GameEvent::GoldLeftBehind)?;
                }
            }
        }

        Ok(GameReport {
            outcome,
            level: self.player.level(),
            gold: self.player.gold(),
            encounters: self.encounters,
            kills: self.kills,
        })
    }
}

/// 按配置开始一局新游戏
pub fn play<I: Interaction>(config: &GameConfig, mut ui: I) -> anyhow::Result<GameReport> {
    let seed = config.resolve_seed();
    ui.emit(&GameEvent::Seed { seed })?;

    let name = match &config.name {
        Some(name) => name.clone(),
        None => ui.prompt_name().context("Failed to read the player's name")?,
    };
    ui.emit(&GameEvent::Welcome {
        player: name.clone(),
    })?;

    let mut game = GameLoop::new(Player::new(name), GameRng::new(seed), ui);
    game.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_prefers_death_over_victory() {
        let mut player = Player::new("Alex");
        assert_eq!(GameState::of(&player), GameState::Alive);

        for _ in 0..19 {
            player.level_up();
        }
        assert_eq!(GameState::of(&player), GameState::Won);

        player.reduce_health(10);
        assert_eq!(GameState::of(&player), GameState::Dead);
    }
}
