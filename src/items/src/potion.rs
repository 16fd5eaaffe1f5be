//src/items/src/potion.rs
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use error::GameError;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// 药水大小
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, EnumIter, EnumCount, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PotionSize {
    Small,
    Medium,
    Large,
}

/// 药水类型
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, EnumIter, EnumCount, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PotionType {
    Health,   // 治疗
    Strength, // 力量
    Poison,   // 毒药
    Weakness, // 虚弱
}

/// 药水（不可变值，只能从药水表中取得）
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Potion {
    potion_type: PotionType,
    size: PotionSize,
    health_delta: i32,
    damage_delta: i32,
}

impl Potion {
    /// 从全局药水表中查找药水
    pub fn lookup(potion_type: PotionType, size: PotionSize) -> Potion {
        *PotionCatalog::global().lookup(potion_type, size)
    }

    pub fn potion_type(&self) -> PotionType {
        self.potion_type
    }

    pub fn size(&self) -> PotionSize {
        self.size
    }

    /// 饮用后生命值变化
    pub fn health_delta(&self) -> i32 {
        self.health_delta
    }

    /// 饮用后攻击力变化
    pub fn damage_delta(&self) -> i32 {
        self.damage_delta
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} potion", self.size, self.potion_type)
    }
}

/// 药水数据表：(类型, 大小, 生命变化, 攻击变化)
pub const POTION_TABLE: [(PotionType, PotionSize, i32, i32); 12] = [
    (PotionType::Health, PotionSize::Small, 2, 0),
    (PotionType::Health, PotionSize::Medium, 3, 0),
    (PotionType::Health, PotionSize::Large, 5, 0),
    (PotionType::Strength, PotionSize::Small, 0, 1),
    (PotionType::Strength, PotionSize::Medium, 0, 2),
    (PotionType::Strength, PotionSize::Large, 0, 3),
    (PotionType::Poison, PotionSize::Small, -1, 0),
    (PotionType::Poison, PotionSize::Medium, -2, 0),
    (PotionType::Poison, PotionSize::Large, -3, 0),
    (PotionType::Weakness, PotionSize::Small, 0, -1),
    (PotionType::Weakness, PotionSize::Medium, 0, -1),
    (PotionType::Weakness, PotionSize::Large, 0, -2),
];

static POTIONS: LazyLock<PotionCatalog> = LazyLock::new(|| {
    PotionCatalog::from_table(&POTION_TABLE)
        .unwrap_or_else(|e| panic!("potion catalog is invalid: {e}"))
});

/// 药水查表：每个 (类型, 大小) 恰好对应一种药水
#[derive(Debug)]
pub struct PotionCatalog {
    entries: HashMap<(PotionType, PotionSize), Potion>,
}

impl PotionCatalog {
    /// 进程内唯一的药水表（首次访问时构建并校验）
    pub fn global() -> &'static PotionCatalog {
        &POTIONS
    }

    /// 从数据表构建药水表，要求每个组合恰好出现一次
    pub fn from_table(table: &[(PotionType, PotionSize, i32, i32)]) -> Result<Self, GameError> {
        let mut entries = HashMap::with_capacity(PotionType::COUNT * PotionSize::COUNT);

        for &(potion_type, size, health_delta, damage_delta) in table {
            let potion = Potion {
                potion_type,
                size,
                health_delta,
                damage_delta,
            };
            if entries.insert((potion_type, size), potion).is_some() {
                return Err(GameError::DuplicateCatalogEntry(potion.to_string()));
            }
        }

        for potion_type in PotionType::iter() {
            for size in PotionSize::iter() {
                if !entries.contains_key(&(potion_type, size)) {
                    return Err(GameError::MissingCatalogEntry(format!(
                        "{} {} potion",
                        size, potion_type
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// 查找药水（全域有定义）
    pub fn lookup(&self, potion_type: PotionType, size: PotionSize) -> &Potion {
        &self.entries[&(potion_type, size)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
