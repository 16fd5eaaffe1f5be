//src/items/src/lib.rs
//! 物品系统：目前只有药水。

pub mod potion;

pub use crate::potion::{Potion, PotionCatalog, PotionSize, PotionType, POTION_TABLE};
