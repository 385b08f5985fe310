//! Test utilities & fixtures shared by the integration tests.

use std::io::Cursor;

use castle_escape::castle::{GameState, Session};
use castle_escape::config::GameConfig;

/// Deterministic config with ambient messages switched off.
#[allow(dead_code)]
pub fn quiet_config() -> GameConfig {
    GameConfig {
        ambient_interval: 0,
        seed: Some(11),
        ..GameConfig::default()
    }
}

/// Play a scripted game. The script holds one command per line and the
/// character name is preset, so no name line is needed.
#[allow(dead_code)]
pub fn play(script: &str) -> (GameState, String) {
    play_with(&quiet_config(), script)
}

#[allow(dead_code)]
pub fn play_with(config: &GameConfig, script: &str) -> (GameState, String) {
    play_bytes_with(config, script.as_bytes())
}

/// Like [`play`], but the script may hold arbitrary bytes.
#[allow(dead_code)]
pub fn play_bytes(script: &[u8]) -> (GameState, String) {
    play_bytes_with(&quiet_config(), script)
}

fn play_bytes_with(config: &GameConfig, script: &[u8]) -> (GameState, String) {
    let mut session = Session::new(Cursor::new(script.to_vec()), Vec::new());
    let state = session.run(config, Some("Tester")).expect("session runs");
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (state, output)
}
