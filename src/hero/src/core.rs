// src/hero/core.rs
use combat::{Combatant, Creature, GameEvent};

/// 英雄平衡常量
pub mod constants {
    pub const SYMBOL: char = '@';
    pub const START_HEALTH: i32 = 10;
    pub const START_DAMAGE: i32 = 1;
    pub const START_GOLD: u32 = 0;
    pub const START_LEVEL: u32 = 1;
    /// 达到该等级即获胜
    pub const WIN_LEVEL: u32 = 20;
}

/// 玩家：在生物数据之上增加等级
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    creature: Creature,
    level: u32,
}

impl Player {
    /// 创建新玩家（固定初始属性）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            creature: Creature::new(
                name,
                constants::SYMBOL,
                constants::START_HEALTH,
                constants::START_DAMAGE,
                constants::START_GOLD,
            ),
            level: constants::START_LEVEL,
        }
    }

    /// 获取当前等级
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn has_won(&self) -> bool {
        self.level >= constants::WIN_LEVEL
    }

    /// 升级：等级和攻击力各加1
    pub fn level_up(&mut self) -> GameEvent {
        self.level += 1;
        self.creature.damage += 1;
        GameEvent::LevelUp {
            player: self.creature.name.clone(),
            level: self.level,
        }
    }
}

impl Combatant for Player {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}
