//! Action and bookmark descriptors handed to the breadcrumb.

use std::fmt;
use std::sync::Arc;

use crate::commands::SharedCommands;
use crate::models::ExperimentStatus;

/// The breadcrumb's action menu: current status plus delete and stop.
#[derive(Clone)]
pub struct ActionDescriptor {
    pub last_status: ExperimentStatus,
    commands: SharedCommands,
}

impl ActionDescriptor {
    pub fn new(last_status: ExperimentStatus, commands: SharedCommands) -> Self {
        Self { last_status, commands }
    }

    /// Stop is only offered while the experiment has not finished.
    pub fn can_stop(&self) -> bool {
        !self.last_status.is_done()
    }

    pub fn delete(&self) {
        self.commands.delete();
    }

    pub fn stop(&self) {
        self.commands.stop();
    }
}

impl PartialEq for ActionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.last_status == other.last_status && Arc::ptr_eq(&self.commands, &other.commands)
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("last_status", &self.last_status)
            .finish_non_exhaustive()
    }
}

/// The breadcrumb's bookmark star.
#[derive(Clone)]
pub struct BookmarkDescriptor {
    pub active: bool,
    commands: SharedCommands,
}

impl BookmarkDescriptor {
    pub fn new(active: bool, commands: SharedCommands) -> Self {
        Self { active, commands }
    }

    /// Unbookmark when bookmarked, bookmark otherwise.
    pub fn toggle(&self) {
        if self.active {
            self.commands.unbookmark();
        } else {
            self.commands.bookmark();
        }
    }

    pub fn bookmark(&self) {
        self.commands.bookmark();
    }

    pub fn unbookmark(&self) {
        self.commands.unbookmark();
    }
}

impl PartialEq for BookmarkDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active && Arc::ptr_eq(&self.commands, &other.commands)
    }
}

impl fmt::Debug for BookmarkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkDescriptor")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ExperimentCommands, UpdateDict};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Calls(Mutex<Vec<&'static str>>);

    impl Calls {
        fn push(&self, name: &'static str) {
            self.0.lock().unwrap().push(name);
        }
        fn taken(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl ExperimentCommands for Calls {
        fn delete(&self) {
            self.push("delete");
        }
        fn stop(&self) {
            self.push("stop");
        }
        fn update(&self, _changes: UpdateDict) {
            self.push("update");
        }
        fn fetch_data(&self) {
            self.push("fetch_data");
        }
        fn bookmark(&self) {
            self.push("bookmark");
        }
        fn unbookmark(&self) {
            self.push("unbookmark");
        }
        fn fetch_code_reference(&self) {
            self.push("fetch_code_reference");
        }
    }

    #[test]
    fn test_actions_forward_to_commands() {
        let calls = Arc::new(Calls::default());
        let actions = ActionDescriptor::new(ExperimentStatus::Running, calls.clone());
        assert!(actions.can_stop());
        actions.stop();
        actions.delete();
        assert_eq!(calls.taken(), vec!["stop", "delete"]);
    }

    #[test]
    fn test_finished_experiment_cannot_stop() {
        let actions = ActionDescriptor::new(ExperimentStatus::Succeeded, Arc::new(Calls::default()));
        assert!(!actions.can_stop());
    }

    #[test]
    fn test_bookmark_toggle() {
        let calls = Arc::new(Calls::default());
        BookmarkDescriptor::new(false, calls.clone()).toggle();
        BookmarkDescriptor::new(true, calls.clone()).toggle();
        assert_eq!(calls.taken(), vec!["bookmark", "unbookmark"]);
    }

    #[test]
    fn test_equality_uses_command_identity() {
        let a: SharedCommands = Arc::new(Calls::default());
        let b: SharedCommands = Arc::new(Calls::default());
        assert_eq!(BookmarkDescriptor::new(true, a.clone()), BookmarkDescriptor::new(true, a.clone()));
        assert_ne!(BookmarkDescriptor::new(true, a.clone()), BookmarkDescriptor::new(true, b));
        assert_ne!(BookmarkDescriptor::new(true, a.clone()), BookmarkDescriptor::new(false, a));
    }
}
