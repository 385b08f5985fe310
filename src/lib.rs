//! # Castle Escape - a terminal text adventure
//!
//! The player names a character, explores ten rooms of an abandoned castle,
//! carries up to four items, and wins by claiming the Golden Crown from the
//! Throne Room. Dark rooms need a light to enter; locked doors need a key.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use castle_escape::castle::Session;
//! use castle_escape::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("castle.toml")?;
//!     let stdin = std::io::stdin();
//!     let mut session = Session::new(stdin.lock(), std::io::stdout());
//!     let outcome = session.run(&config.game, None)?;
//!     println!("Final status: {:?}", outcome.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`castle`] - Rooms, items, the bag, command parsing and the session loop
//! - [`config`] - Optional TOML configuration
//! - [`validation`] - Player name validation
//! - [`logutil`] - Log-safe escaping of player input

pub mod castle;
pub mod config;
pub mod logutil;
pub mod validation;
