use clap::Parser;
use error::{GameError, handle_error};

use terminal_gauntlet::{config::GameConfig, game_loop, input::ConsoleInteraction};

fn main() -> anyhow::Result<()> {
    let config = GameConfig::parse();
    let ui = ConsoleInteraction::stdio();

    // 胜利和死亡都是正常结束，只有错误才返回非零
    if let Err(err) = game_loop::play(&config, ui) {
        if let Some(game_err) = err.downcast_ref::<GameError>() {
            eprintln!("{}", handle_error(game_err));
        }
        return Err(err.context("Game crashed"));
    }

    Ok(())
}
