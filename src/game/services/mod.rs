//! Command handlers backed by the game repository.

mod disable;

pub use disable::{
    DISABLE_GAME_PATTERN, DisableGameHandler, MissingGamePolicy, SUCCESS_REPLY,
};
