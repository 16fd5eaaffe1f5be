//! Command line configuration.

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "terminal_gauntlet")]
#[command(version, about = "Fight your way to level 20, one monster at a time", long_about = None)]
pub struct GameConfig {
    /// Seed for the game's random number generator (replays a run)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Player name (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,
}

impl GameConfig {
    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
