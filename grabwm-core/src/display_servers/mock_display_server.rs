use super::Config;
use super::DisplayAction;
use super::DisplayEvent;
use super::DisplayServer;
use crate::errors::Result;
use crate::models::{Handle, Rect, WindowHandle};
use std::cell::Cell;
use std::collections::VecDeque;

/// Plays back scripted event batches and records what it was asked to do.
#[derive(Debug, Default)]
pub struct MockDisplayServer<H: Handle> {
    pub batches: VecDeque<Vec<DisplayEvent<H>>>,
    pub geometries: Vec<(WindowHandle<H>, Rect)>,
    pub geometry_queries: Cell<usize>,
    pub actions: Vec<DisplayAction<H>>,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn push_batch(&mut self, events: Vec<DisplayEvent<H>>) {
        self.batches.push_back(events);
    }

    pub fn set_geometry(&mut self, handle: WindowHandle<H>, rect: Rect) {
        self.geometries.retain(|(h, _)| *h != handle);
        self.geometries.push((handle, rect));
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        Ok(Self {
            batches: VecDeque::new(),
            geometries: vec![],
            geometry_queries: Cell::new(0),
            actions: vec![],
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.batches
            .pop_front()
            .expect("mock display server ran out of scripted events")
    }

    fn window_geometry(&self, handle: &WindowHandle<H>) -> Option<Rect> {
        self.geometry_queries.set(self.geometry_queries.get() + 1);
        self.geometries
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, rect)| *rect)
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        self.actions.push(act);
    }

    fn flush(&self) {}
}
