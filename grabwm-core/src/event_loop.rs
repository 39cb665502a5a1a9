use crate::config::Config;
use crate::errors::Result;
use crate::models::{Handle, Manager};
use crate::DisplayServer;
use std::sync::atomic::Ordering;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Runs until a quit is requested.
    ///
    /// # Errors
    ///
    /// Currently never errors; the result leaves room for fatal display failures.
    pub fn start_event_loop(mut self) -> Result<()> {
        tracing::info!("Event loop started");
        while self.process_next_events() {}
        tracing::info!("Event loop stopped");
        Ok(())
    }

    /// Pulls one batch of events and handles them in order. Each event runs to completion,
    /// including the display actions it queued, before the next is looked at.
    ///
    /// Returns `false` once a quit has been requested; the rest of the batch is dropped.
    fn process_next_events(&mut self) -> bool {
        self.display_server.flush();

        for event in self.display_server.get_next_events() {
            self.display_event_handler(event);
            self.execute_actions();
            if self.quit_requested {
                self.display_server.flush();
                return false;
            }
        }

        if self.reap_requested.swap(false, Ordering::SeqCst) {
            self.children.remove_finished_children();
        }
        true
    }

    fn execute_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            self.display_server.execute_action(act);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{DragState, Manager, Rect, WindowHandle};
    use crate::utils::modmask_lookup::{Button, ModMask};
    use crate::{DisplayAction, DisplayEvent};
    use x11_dl::keysym;

    fn quit() -> DisplayEvent<i32> {
        DisplayEvent::KeyPress(ModMask::Alt, keysym::XK_q, None)
    }

    fn press(button: Button, window: i32, x: i32, y: i32) -> DisplayEvent<i32> {
        DisplayEvent::ButtonPress(ModMask::Alt, button, Some(WindowHandle(window)), x, y)
    }

    #[test]
    fn loop_stops_on_quit() {
        let mut manager = Manager::new_test();
        manager.display_server.push_batch(vec![]);
        manager.display_server.push_batch(vec![quit()]);
        assert!(manager.start_event_loop().is_ok());
    }

    #[test]
    fn events_after_quit_in_the_same_batch_are_dropped() {
        let mut manager = Manager::new_test();
        manager.display_server.push_batch(vec![quit(), press(Button::Button2, 1, 0, 0)]);
        assert!(!manager.process_next_events());
        assert!(manager.display_server.actions.is_empty());
    }

    #[test]
    fn drag_is_driven_through_the_display_server() {
        let mut manager = Manager::new_test();
        manager
            .display_server
            .set_geometry(WindowHandle(1), Rect::new(10, 10, 100, 50));
        manager.display_server.push_batch(vec![
            press(Button::Button1, 1, 500, 500),
            DisplayEvent::Motion(510, 520),
        ]);
        manager.display_server.push_batch(vec![
            DisplayEvent::Motion(505, 515),
            DisplayEvent::ButtonRelease(ModMask::Alt, Button::Button1),
            DisplayEvent::Motion(900, 900),
            press(Button::Button2, 1, 0, 0),
        ]);
        manager.display_server.push_batch(vec![quit()]);

        while manager.process_next_events() {}

        assert_eq!(manager.state.drag, DragState::Idle);
        assert!(manager.state.actions.is_empty());
        assert_eq!(
            manager.display_server.actions,
            vec![
                DisplayAction::MoveResize(WindowHandle(1), Rect::new(20, 30, 100, 50)),
                DisplayAction::MoveResize(WindowHandle(1), Rect::new(15, 25, 100, 50)),
                DisplayAction::Raise(WindowHandle(1)),
            ]
        );
    }
}
