use crate::bindings::Bindings;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::Handle;
use crate::state::State;
use crate::utils::child_process::Children;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,

    pub(crate) bindings: Bindings,
    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: bool,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Connects the display server and builds the binding tables from `config`.
    ///
    /// # Errors
    ///
    /// Will error if the display server cannot be started.
    pub fn new(config: C) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        let bindings = Bindings::new(&config);

        Ok(Self {
            state: State::default(),
            config,
            display_server,
            bindings,
            children: Children::default(),
            reap_requested: Arc::default(),
            quit_requested: false,
        })
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Stop the event loop after the event currently being handled.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
impl
    Manager<
        crate::models::MockHandle,
        crate::config::TestConfig,
        crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
    >
{
    pub fn new_test() -> Self {
        Self::new(crate::config::TestConfig::default())
            .expect("the mock display server always starts")
    }
}
