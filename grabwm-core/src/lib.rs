//! Core of grabwm: turns modifier-chorded key presses and mouse drags into raise, move and
//! resize requests for whatever display server drives it.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
pub mod bindings;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod intent;
pub mod models;
pub mod state;
pub mod utils;

pub use bindings::Bindings;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use intent::Intent;
pub use models::Manager;
pub use state::State;
pub use utils::child_process;
