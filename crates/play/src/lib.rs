//! Terminal front end for the pseudo-legal chess engine
//!
//! - Interactive play against the random opponent
//! - Random self-play
//! - Settings from a TOML file
//!
//! # Usage
//!
//! ```bash
//! # Play White against the random opponent
//! cargo run -p chess_play
//!
//! # Watch 100 plies of random self-play with a fixed seed
//! cargo run -p chess_play -- --self-play --max-plies 100 --seed 7
//! ```

pub mod command;
pub mod config;
pub mod render;
pub mod self_play;
pub mod session;

pub use command::*;
pub use config::*;
pub use render::*;
pub use self_play::*;
pub use session::*;
