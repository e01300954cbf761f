//! Page logic for the experiment detail view.
//!
//! The view layer calls [`DetailController::mount`] once when the page is
//! attached and [`DetailController::render`] whenever the experiment changes.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::breadcrumb::{breadcrumb_links, BreadcrumbIcon, BreadcrumbLink};
use crate::commands::SharedCommands;
use crate::descriptors::{ActionDescriptor, BookmarkDescriptor};
use crate::error::Result;
use crate::ids::{GroupName, ProjectName};
use crate::models::Experiment;
use crate::tabs::{build_tabs, Tab};
use crate::urls::AppRoutes;

/// Placeholder shown while there is no experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub entity: &'static str,
    pub entity_name: &'static str,
}

impl EmptyState {
    pub fn new(entity: &'static str, entity_name: &'static str) -> Self {
        Self {
            entity,
            entity_name,
        }
    }

    pub fn title(&self) -> String {
        format!("No {} found.", self.entity_name)
    }
}

/// Everything the page layout needs for one experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub icon: BreadcrumbIcon,
    pub breadcrumb: Vec<BreadcrumbLink>,
    pub experiment_url: String,
    pub project_url: String,
    pub group_url: Option<String>,
    pub actions: ActionDescriptor,
    pub bookmark: BookmarkDescriptor,
    pub tabs: Vec<Tab>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Empty(EmptyState),
    Page(Box<DetailPage>),
}

pub struct DetailController {
    routes: AppRoutes,
    commands: SharedCommands,
    mounted: AtomicBool,
}

impl DetailController {
    pub fn new(routes: AppRoutes, commands: SharedCommands) -> Self {
        Self {
            routes,
            commands,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn commands(&self) -> &SharedCommands {
        &self.commands
    }

    pub fn routes(&self) -> &AppRoutes {
        &self.routes
    }

    /// Ask for fresh data. Only the first call reaches `fetch_data`.
    pub fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        debug!("detail page mounted, fetching experiment");
        self.commands.fetch_data();
        true
    }

    /// Derive the page for the current experiment.
    ///
    /// Malformed project or group names are returned as errors.
    pub fn render(&self, experiment: Option<&Experiment>) -> Result<DetailView> {
        let Some(experiment) = experiment else {
            return Ok(DetailView::Empty(EmptyState::new("experiment", "experiment")));
        };

        let project = ProjectName::parse(&experiment.project)?;
        let group = experiment
            .experiment_group
            .as_deref()
            .map(GroupName::parse)
            .transpose()?
            .map(|g| g.group);
        debug!(experiment = experiment.id, ?group, "rendering experiment detail");

        let experiment_url = self
            .routes
            .experiment_url(&project.user, &project.project, experiment.id);
        let project_url = self.routes.project_url(&project.user, &project.project);
        let group_url = group.map(|g| self.routes.group_url(&project.user, &project.project, g));

        Ok(DetailView::Page(Box::new(DetailPage {
            icon: BreadcrumbIcon::Cube,
            breadcrumb: breadcrumb_links(&self.routes, &project, group, experiment.id),
            experiment_url,
            project_url,
            group_url,
            actions: ActionDescriptor::new(experiment.last_status, self.commands.clone()),
            bookmark: BookmarkDescriptor::new(experiment.bookmarked, self.commands.clone()),
            tabs: build_tabs(experiment),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NoopCommands;
    use std::sync::Arc;

    fn controller() -> DetailController {
        DetailController::new(AppRoutes::default(), Arc::new(NoopCommands))
    }

    #[test]
    fn test_empty_state_labels() {
        let view = controller().render(None).unwrap();
        let DetailView::Empty(empty) = view else {
            panic!("expected empty state");
        };
        assert_eq!(empty.entity, "experiment");
        assert_eq!(empty.entity_name, "experiment");
        assert_eq!(empty.title(), "No experiment found.");
    }

    #[test]
    fn test_group_url_only_with_group() {
        let mut exp = Experiment {
            id: 3,
            user: "bob".into(),
            project: "bob.mnist".into(),
            ..Default::default()
        };
        let DetailView::Page(page) = controller().render(Some(&exp)).unwrap() else {
            panic!("expected page");
        };
        assert_eq!(page.group_url, None);
        assert_eq!(page.experiment_url, "/app/bob/mnist/experiments/3");

        exp.experiment_group = Some("bob.mnist.12".into());
        let DetailView::Page(page) = controller().render(Some(&exp)).unwrap() else {
            panic!("expected page");
        };
        assert_eq!(page.group_url.as_deref(), Some("/app/bob/mnist/groups/12"));
    }

    #[test]
    fn test_malformed_project_is_an_error() {
        let exp = Experiment {
            project: "nodots".into(),
            ..Default::default()
        };
        assert!(controller().render(Some(&exp)).is_err());
    }
}
