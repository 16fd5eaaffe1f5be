// src/combat/src/combatant.rs

use items::Potion;

use crate::events::GameEvent;

/// 生物的共享数据（玩家和怪物都由它组合而成）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub symbol: char,
    pub health: i32, // 可以降到0以下，<=0 即死亡
    pub damage: i32, // 不设下限，虚弱药水可以把它降到0或负数
    pub gold: u32,
}

impl Creature {
    pub fn new(name: impl Into<String>, symbol: char, health: i32, damage: i32, gold: u32) -> Self {
        Self {
            name: name.into(),
            symbol,
            health,
            damage,
            gold,
        }
    }
}

/// 表示可以参加战斗的活体
///
/// 只需要提供 `creature` / `creature_mut`，其余战斗行为都由默认实现给出。
pub trait Combatant {
    fn creature(&self) -> &Creature;

    fn creature_mut(&mut self) -> &mut Creature;

    /// 获取名称
    fn name(&self) -> &str {
        &self.creature().name
    }

    /// 获取显示字符
    fn symbol(&self) -> char {
        self.creature().symbol
    }

    /// 获取当前生命值
    fn health(&self) -> i32 {
        self.creature().health
    }

    /// 获取当前攻击力
    fn damage(&self) -> i32 {
        self.creature().damage
    }

    /// 获取金币数
    fn gold(&self) -> u32 {
        self.creature().gold
    }

    /// 是否死亡
    fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    /// 扣除生命值（负数伤害会反过来加血）
    fn reduce_health(&mut self, amount: i32) {
        self.creature_mut().health -= amount;
    }

    /// 添加金币
    fn add_gold(&mut self, amount: u32) {
        self.creature_mut().gold += amount;
    }

    /// 饮用药水（不做任何上下限修正）
    fn drink(&mut self, potion: &Potion) {
        let creature = self.creature_mut();
        creature.health += potion.health_delta();
        creature.damage += potion.damage_delta();
    }

    /// 用当前攻击力攻击目标，返回战斗叙述事件
    fn attack<T: Combatant + ?Sized>(&self, target: &mut T) -> GameEvent {
        let damage = self.damage();
        let event = GameEvent::Attacked {
            attacker: self.name().to_string(),
            target: target.name().to_string(),
            damage,
        };
        target.reduce_health(damage);
        event
    }
}

impl Combatant for Creature {
    fn creature(&self) -> &Creature {
        self
    }

    fn creature_mut(&mut self) -> &mut Creature {
        self
    }
}
