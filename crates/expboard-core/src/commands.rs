//! The command interface a detail page is driven through.

use std::sync::Arc;

/// Field changes sent with an update, e.g. `{"description": "..."}`.
pub type UpdateDict = serde_json::Map<String, serde_json::Value>;

/// Everything the experiment detail page can ask the outside world to do.
///
/// Commands are fire-and-forget: results come back as a new experiment value
/// pushed in by whoever owns the state.
pub trait ExperimentCommands: Send + Sync {
    fn delete(&self);
    fn stop(&self);
    fn update(&self, changes: UpdateDict);
    fn fetch_data(&self);
    fn bookmark(&self);
    fn unbookmark(&self);
    fn fetch_code_reference(&self);
}

pub type SharedCommands = Arc<dyn ExperimentCommands>;

/// Commands that do nothing. Useful for read-only renders such as the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCommands;

impl ExperimentCommands for NoopCommands {
    fn delete(&self) {}
    fn stop(&self) {}
    fn update(&self, _changes: UpdateDict) {}
    fn fetch_data(&self) {}
    fn bookmark(&self) {}
    fn unbookmark(&self) {}
    fn fetch_code_reference(&self) {}
}
