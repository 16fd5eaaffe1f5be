// src/combat/src/events.rs
use std::fmt;

use items::Potion;

/// 游戏叙述事件
/// 由核心逻辑产生，交给交互层显示，核心不会再读回它们
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// 本局使用的随机种子
    Seed { seed: u64 },

    /// 欢迎玩家
    Welcome { player: String },

    /// 遭遇怪物
    Encountered {
        player: String,
        monster: String,
        symbol: char,
    },

    /// 一次攻击
    Attacked {
        attacker: String,
        target: String,
        damage: i32,
    },

    /// 逃跑成功
    Fled { player: String },

    /// 逃跑失败
    FailedToFlee { player: String },

    /// 击杀怪物
    Killed { player: String, monster: String },

    /// 等级提升
    LevelUp { player: String, level: u32 },

    /// 获得金币
    FoundGold { player: String, gold: u32 },

    /// 喝下药水（喝完才揭晓是什么药水）
    DrankPotion { player: String, potion: Potion },

    /// 遭遇结束后的剩余生命
    Hitpoints { player: String, health: i32 },

    /// 胜利
    Won { player: String, gold: u32 },

    /// 死亡
    Died {
        player: String,
        level: u32,
        gold: u32,
    },

    /// 死亡时身上还有金币
    GoldLeftBehind,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Seed { seed } => write!(f, "Adventure seed: {}.", seed),
            GameEvent::Welcome { player } => write!(f, "Welcome, {}.", player),
            GameEvent::Encountered {
                player,
                monster,
                symbol,
            } => write!(f, "{} has encountered a {} ({}).", player, monster, symbol),
            GameEvent::Attacked {
                attacker,
                target,
                damage,
            } => write!(f, "{} hit {} for {} damage.", attacker, target, damage),
            GameEvent::Fled { player } => write!(f, "{} successfully fled.", player),
            GameEvent::FailedToFlee { player } => write!(f, "{} failed to flee!", player),
            GameEvent::Killed { player, monster } => write!(f, "{} killed the {}.", player, monster),
            GameEvent::LevelUp { player, level } => write!(f, "{} is now level {}.", player, level),
            GameEvent::FoundGold { player, gold } => write!(f, "{} found {} gold.", player, gold),
            GameEvent::DrankPotion { player, potion } => write!(f, "{} drank a {}.", player, potion),
            GameEvent::Hitpoints { player, health } => {
                write!(f, "{} has {} hitpoints.", player, health)
            }
            GameEvent::Won { player, gold } => {
                write!(f, "Congrats! {} got away with {} gold.", player, gold)
            }
            GameEvent::Died {
                player,
                level,
                gold,
            } => write!(f, "{} died at level {} with {} gold.", player, level, gold),
            GameEvent::GoldLeftBehind => write!(f, "Too bad you can't take it with you!"),
        }
    }
}
