mod display_event_handler;
mod drag_handler;

use super::config::Config;
use super::display_servers::DisplayServer;
use super::models::{Handle, Manager};
