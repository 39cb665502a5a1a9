// allow casting types
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod error;
mod event_translate;
mod xwrap;

pub use error::DisplayError;
pub use xwrap::XWrap;

use event_translate::XEvent;
use grabwm_core::config::Config;
use grabwm_core::errors::Result;
use grabwm_core::models::{Handle, Rect, WindowHandle};
use grabwm_core::{Bindings, DisplayAction, DisplayEvent, DisplayServer};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use x11_dl::xlib;

/// How long to wait for the X connection before handing control back to the event loop.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(pub xlib::Window);
impl Handle for XlibWindowHandle {}

pub struct XlibDisplayServer {
    xw: XWrap,
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn new(config: &impl Config) -> Result<Self> {
        let mut xw = XWrap::new()?;
        xw.init(&Bindings::new(config));
        Ok(Self { xw })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<XlibWindowHandle>> {
        if self.xw.queue_len() == 0 {
            self.xw.wait_readable(POLL_TIMEOUT);
        }

        let mut events = vec![];
        let events_in_queue = self.xw.queue_len();
        for _ in 0..events_in_queue {
            let xlib_event = self.xw.get_next_event();
            let event = XEvent(&self.xw, xlib_event).into();
            if let Some(e) = event {
                tracing::trace!("DisplayEvent: {:?}", e);
                events.push(e);
            }
        }

        coalesce_motion(events)
    }

    fn window_geometry(&self, handle: &WindowHandle<XlibWindowHandle>) -> Option<Rect> {
        let WindowHandle(XlibWindowHandle(window)) = handle;
        match self.xw.get_window_rect(*window) {
            Ok(rect) => Some(rect),
            Err(err) => {
                tracing::debug!("No geometry for {:?}: {}", window, err);
                None
            }
        }
    }

    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) {
        tracing::trace!("DisplayAction: {:?}", act);
        let xw = &mut self.xw;
        match act {
            DisplayAction::Raise(h) => from_raise(xw, h),
            DisplayAction::MoveResize(h, rect) => from_move_resize(xw, h, rect),
        }
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

fn from_raise(xw: &mut XWrap, handle: WindowHandle<XlibWindowHandle>) {
    xw.move_to_top(&handle);
}

fn from_move_resize(xw: &mut XWrap, handle: WindowHandle<XlibWindowHandle>, rect: Rect) {
    let WindowHandle(XlibWindowHandle(window)) = handle;
    xw.move_resize_window(window, rect.x(), rect.y(), rect.w(), rect.h());
}

/// Keeps only the last of every run of consecutive motion events.
fn coalesce_motion<H: Handle>(events: Vec<DisplayEvent<H>>) -> Vec<DisplayEvent<H>> {
    let mut out: Vec<DisplayEvent<H>> = Vec::with_capacity(events.len());
    for event in events {
        if let (DisplayEvent::Motion(..), Some(DisplayEvent::Motion(..))) = (&event, out.last()) {
            out.pop();
        }
        out.push(event);
    }
    out
}
