//! The game engine, its read-only view, and the driver layer

pub mod actors;
pub mod engine;
pub mod game_loop;
pub mod logger;
pub mod text_view;
pub mod view;

pub use actors::{Action, InteractiveActor, PlayerActor, StrategyActor};
pub use engine::{GameEngine, StatusListener};
pub use game_loop::{GameEndReason, GameLoop, GameResult};
pub use logger::{GameLogger, VerbosityLevel};
pub use view::GameView;
