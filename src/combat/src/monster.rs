// src/combat/src/monster.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use error::GameError;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::combatant::{Combatant, Creature};
use crate::rng::{RandomSource, pick_variant};

/// 怪物种类
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, EnumIter, EnumCount, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MonsterType {
    Dragon,
    Orc,
    Slime,
}

/// 怪物的基础属性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterStats {
    pub name: &'static str,
    pub symbol: char,
    pub health: i32,
    pub damage: i32,
    pub gold: u32,
}

/// 怪物数据表
pub const MONSTER_TABLE: [(MonsterType, MonsterStats); 3] = [
    (
        MonsterType::Dragon,
        MonsterStats {
            name: "dragon",
            symbol: 'D',
            health: 20,
            damage: 4,
            gold: 100,
        },
    ),
    (
        MonsterType::Orc,
        MonsterStats {
            name: "orc",
            symbol: 'o',
            health: 4,
            damage: 2,
            gold: 25,
        },
    ),
    (
        MonsterType::Slime,
        MonsterStats {
            name: "slime",
            symbol: 's',
            health: 1,
            damage: 1,
            gold: 10,
        },
    ),
];

static MONSTERS: LazyLock<MonsterCatalog> = LazyLock::new(|| {
    MonsterCatalog::from_table(&MONSTER_TABLE)
        .unwrap_or_else(|e| panic!("monster catalog is invalid: {e}"))
});

/// 怪物查表：每种怪物恰好一条基础属性
#[derive(Debug)]
pub struct MonsterCatalog {
    entries: HashMap<MonsterType, MonsterStats>,
}

impl MonsterCatalog {
    /// 进程内唯一的怪物表
    pub fn global() -> &'static MonsterCatalog {
        &MONSTERS
    }

    pub fn from_table(table: &[(MonsterType, MonsterStats)]) -> Result<Self, GameError> {
        let mut entries = HashMap::with_capacity(MonsterType::COUNT);

        for &(kind, stats) in table {
            if entries.insert(kind, stats).is_some() {
                return Err(GameError::DuplicateCatalogEntry(kind.to_string()));
            }
        }

        if let Some(missing) = MonsterType::iter().find(|kind| !entries.contains_key(kind)) {
            return Err(GameError::MissingCatalogEntry(missing.to_string()));
        }

        Ok(Self { entries })
    }

    pub fn lookup(&self, kind: MonsterType) -> &MonsterStats {
        &self.entries[&kind]
    }
}

/// 怪物实体，每次遭遇时从查表复制一份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    kind: MonsterType,
    creature: Creature,
}

impl Monster {
    pub fn new(kind: MonsterType) -> Self {
        let stats = MonsterCatalog::global().lookup(kind);
        Self {
            kind,
            creature: Creature::new(
                stats.name,
                stats.symbol,
                stats.health,
                stats.damage,
                stats.gold,
            ),
        }
    }

    /// 均匀随机选择一种怪物
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let kind = pick_variant::<MonsterType, R>(rng, "monster type")?;
        Ok(Self::new(kind))
    }

    pub fn kind(&self) -> MonsterType {
        self.kind
    }
}

impl Combatant for Monster {
    fn creature(&self) -> &Creature {
        &self.creature
    }

    fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }
}
