//! Canonical dashboard URLs and API endpoints.

use crate::models::EXPERIMENTS_RESOURCE;

/// Join a relative suffix onto a base URL. An empty suffix is the base itself.
pub fn join(base: &str, rel: &str) -> String {
    if rel.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), rel)
    }
}

/// Fragment link to a section of a page.
pub fn anchor(url: &str, section: &str) -> String {
    format!("{}#{}", url, section)
}

/// The experiment a dashboard path points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExperimentRef {
    pub user: String,
    pub project: String,
    pub id: u64,
}

impl ExperimentRef {
    /// Compound project identifier, `user.project`.
    pub fn project_unique_name(&self) -> String {
        format!("{}.{}", self.user, self.project)
    }
}

/// Front-end page URLs, rooted at the application prefix (e.g. `/app`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRoutes {
    prefix: String,
}

impl Default for AppRoutes {
    fn default() -> Self {
        Self::new("/app")
    }
}

impl AppRoutes {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn user_url(&self, user: &str) -> String {
        format!("{}/{}", self.prefix, user)
    }

    pub fn project_url(&self, user: &str, project: &str) -> String {
        format!("{}/{}", self.user_url(user), project)
    }

    pub fn experiment_url(&self, user: &str, project: &str, id: u64) -> String {
        format!("{}/{}/{}", self.project_url(user, project), EXPERIMENTS_RESOURCE, id)
    }

    pub fn group_url(&self, user: &str, project: &str, group: u64) -> String {
        format!("{}/groups/{}", self.project_url(user, project), group)
    }

    /// Match `{prefix}/{user}/{project}/experiments/{id}[/{rel}]`, returning the
    /// experiment and the relative tab suffix (empty for the page itself).
    pub fn parse_experiment_path(&self, pathname: &str) -> Option<(ExperimentRef, String)> {
        let rest = pathname.strip_prefix(self.prefix.as_str())?;
        if !rest.starts_with('/') {
            return None;
        }
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [user, project, resource, id, tail @ ..] if *resource == EXPERIMENTS_RESOURCE => {
                let id = id.parse().ok()?;
                let target = ExperimentRef {
                    user: user.to_string(),
                    project: project.to_string(),
                    id,
                };
                Some((target, tail.join("/")))
            }
            _ => None,
        }
    }
}

/// REST endpoints of the tracking API, rooted at its base URL (e.g. `/api/v1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new("/api/v1")
    }
}

impl ApiRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// An entity of a project, e.g. `{base}/alice/proj1/experiments/42`.
    pub fn entity(&self, user: &str, project: &str, resource: &str, id: u64) -> String {
        format!("{}/{}/{}/{}/{}", self.base, user, project, resource, id)
    }

    /// A sub-resource or action of an entity, e.g. `.../experiments/42/logs`.
    pub fn entity_action(
        &self,
        user: &str,
        project: &str,
        resource: &str,
        id: u64,
        action: &str,
    ) -> String {
        join(&self.entity(user, project, resource, id), action)
    }

    pub fn experiment(&self, user: &str, project: &str, id: u64) -> String {
        self.entity(user, project, EXPERIMENTS_RESOURCE, id)
    }

    pub fn experiment_action(&self, user: &str, project: &str, id: u64, action: &str) -> String {
        self.entity_action(user, project, EXPERIMENTS_RESOURCE, id, action)
    }

    /// Builds are addressed by their unique name, `user.project.builds.id`.
    pub fn build(&self, build_name: &str) -> String {
        let parts: Vec<&str> = build_name.split('.').collect();
        match parts.as_slice() {
            [user, project, _, id] => format!("{}/{}/{}/builds/{}", self.base, user, project, id),
            _ => format!("{}/builds/{}", self.base, build_name),
        }
    }
}
