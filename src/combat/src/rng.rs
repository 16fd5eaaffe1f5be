// src/combat/src/rng.rs
use error::GameError;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use strum::{EnumCount, IntoEnumIterator};

/// 随机数来源
///
/// 游戏核心只通过它取随机数，测试时可以换成脚本化的实现。
pub trait RandomSource {
    /// 生成 [low, high] 闭区间内的均匀随机整数
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).uniform_int(low, high)
    }
}

/// 确定性RNG（同一种子产生同一局游戏）
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Pcg32,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// 获取当前种子值
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 重置RNG状态（使用当前种子）
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// 使用新种子重置RNG
    pub fn reseed(&mut self, new_seed: u64) {
        self.seed = new_seed;
        self.reset();
    }
}

impl RandomSource for GameRng {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }
}

/// 在枚举的全部取值中均匀选一个
///
/// 随机数落在枚举范围之外时返回 `CatalogOutOfRange`。
pub fn pick_variant<E, R>(rng: &mut R, catalog: &'static str) -> Result<E, GameError>
where
    E: IntoEnumIterator + EnumCount,
    R: RandomSource + ?Sized,
{
    let high = E::COUNT as i32 - 1;
    let roll = rng.uniform_int(0, high);
    usize::try_from(roll)
        .ok()
        .and_then(|index| E::iter().nth(index))
        .ok_or_else(|| GameError::out_of_range(catalog, i64::from(roll), E::COUNT))
}
