//! Example of deriving a detail page directly from Rust.

use std::sync::Arc;

use expboard_core::{AppRoutes, DetailController, DetailView, Experiment, NoopCommands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. An experiment as the tracking API would return it
    let experiment: Experiment = serde_json::from_str(
        r#"{"id": 42, "user": "alice", "project": "alice.proj1", "experiment_group": "alice.proj1.7"}"#,
    )?;

    // 2. A controller with commands that do nothing
    let controller = DetailController::new(AppRoutes::default(), Arc::new(NoopCommands));

    // 3. Render and print the page structure
    match controller.render(Some(&experiment))? {
        DetailView::Empty(empty) => println!("{}", empty.title()),
        DetailView::Page(page) => {
            for link in &page.breadcrumb {
                println!("{:<16} {}", link.name, link.value.as_deref().unwrap_or("-"));
            }
            println!();
            for tab in &page.tabs {
                println!("{:<14} {}", tab.title, expboard_core::urls::join(&page.experiment_url, tab.rel_url));
            }
        }
    }

    Ok(())
}
