//! Tic-tac-toe demo binary
//!
//! Replays a list of moves given on the command line through a store:
//!
//! ```text
//! tictactoe 4 0 8 jump:1 2
//! ```
//!
//! A bare number plays that square; `jump:N` views snapshot `N`. With no
//! arguments a short game with one time-travel branch is played. The rules are
//! read from `TICTACTOE_*` environment variables (see `config`).

use anyhow::Context;
use statecraft_runtime::{Store, StoreConfig};
use tictactoe::{Board, GameAction, GameConfig, GameReducer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_action(arg: &str) -> anyhow::Result<GameAction> {
    if let Some(target) = arg.strip_prefix("jump:") {
        let target = target
            .parse()
            .with_context(|| format!("invalid jump target `{target}`"))?;
        return Ok(GameAction::JumpTo(target));
    }
    let position = arg
        .parse()
        .with_context(|| format!("invalid square `{arg}` (expected 0-8 or jump:N)"))?;
    Ok(GameAction::Play(position))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tictactoe=debug,statecraft_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GameConfig::from_env()?;
    let actions = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            vec![
                GameAction::Play(4),
                GameAction::Play(0),
                GameAction::Play(8),
                GameAction::JumpTo(1),
                GameAction::Play(2),
                GameAction::Play(6),
            ]
        } else {
            args.iter().map(|arg| parse_action(arg)).collect::<anyhow::Result<_>>()?
        }
    };

    let store = Store::with_config(GameReducer::new(config), StoreConfig::new("tictactoe"));
    println!("{}\n", serde_json::to_string(store.get_state().config())?);

    let view = store.downgrade();
    let subscription = store.subscribe(move || {
        let Some(store) = view.upgrade() else { return };
        let game = store.get_state();
        println!("{}", Board(&game.current().squares));
        println!("{}", game.status_line());
        for (index, description) in game.move_descriptions().iter().enumerate() {
            let marker = if index == game.cursor() { ">" } else { " " };
            println!("  {marker} {description}");
        }
        println!();
    });

    for action in actions {
        println!(">>> {}", serde_json::to_string(&action)?);
        store.dispatch(action);
    }
    subscription.unsubscribe();

    let game = store.get_state();
    println!("{}", serde_json::to_string_pretty(game.current())?);
    Ok(())
}
