use super::{Config, DisplayServer, Handle, Manager};
use crate::intent::Intent;
use crate::utils::child_process::{exec_shell, Children};
use crate::DisplayEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Classifies one event and applies it. Display actions are queued on the state.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) {
        let Some(intent) = Intent::classify(event, &self.bindings) else {
            return;
        };
        match intent {
            Intent::RaiseOnKey(window) | Intent::RaiseOnButton(window) => self.state.raise(window),
            Intent::QuitRequest => {
                tracing::info!("Quit requested");
                self.quit();
            }
            Intent::LaunchRequest(command) => launch(&mut self.children, &command),
            Intent::DragStart {
                window,
                mode,
                pointer,
            } => self.drag_start_handler(window, mode, pointer),
            Intent::DragUpdate(pointer) => self.state.drag_update(pointer),
            Intent::DragEnd => self.state.drag_end(),
        }
    }
}

fn launch(children: &mut Children, command: &str) {
    match exec_shell(command, children) {
        Ok(pid) => tracing::debug!("Launched {:?} as {}", command, pid),
        Err(err) => tracing::error!("Unable to launch {:?}: {}", command, err),
    }
}
