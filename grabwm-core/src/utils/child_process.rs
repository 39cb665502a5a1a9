//! Launches external programs without blocking the event loop, and reaps them once they exit.
use std::collections::HashMap;
use std::io;
use std::iter::FromIterator;
use std::process::{Child, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

pub type ChildID = u32;

/// A struct managing children processes.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Insert a `Child` in the `Children`.
    ///
    /// # Returns
    /// - `true` if `child` is a new child-process
    /// - `false` if `child` is already known
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Remove all children processes which finished
    pub fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(|child| (child.id(), child)).collect(),
        }
    }
}

/// Register the `SIGCHLD` signal handler. Once the signal is received,
/// the flag will be set true. User needs to manually clear the flag.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Sends command to shell for execution and returns without waiting for it.
/// Assumes STDIN/STDERR/STDOUT unwanted.
///
/// # Errors
///
/// Will error if the shell cannot be spawned.
pub fn exec_shell(command: &str, children: &mut Children) -> io::Result<ChildID> {
    let child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    children.insert(child);
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn exec_shell_does_not_wait_for_the_command() {
        let mut children = Children::new();
        let started = Instant::now();
        let pid = exec_shell("sleep 5", &mut children).unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(children.len(), 1);
        assert!(pid > 0);
        for child in children.inner.values_mut() {
            child.kill().unwrap();
            child.wait().unwrap();
        }
    }

    #[test]
    fn finished_children_are_removed() {
        let mut children = Children::new();
        exec_shell("true", &mut children).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !children.is_empty() && Instant::now() < deadline {
            children.remove_finished_children();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(children.is_empty());
    }

    #[test]
    fn running_children_are_kept() {
        let mut children: Children = std::iter::once(
            Command::new("sleep").arg("5").spawn().unwrap(),
        )
        .collect();
        children.remove_finished_children();
        assert_eq!(children.len(), 1);
        for child in children.inner.values_mut() {
            child.kill().unwrap();
            child.wait().unwrap();
        }
    }
}
