//! Breadcrumb derivation for the experiment detail page.

use serde::Serialize;

use crate::ids::ProjectName;
use crate::urls::{anchor, AppRoutes};

/// One breadcrumb entry. Entries without a URL are not navigable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbLink {
    pub name: String,
    pub value: Option<String>,
}

impl BreadcrumbLink {
    pub fn link(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.value.is_some()
    }
}

/// Icon shown in front of the breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreadcrumbIcon {
    Cube,
}

/// Build the breadcrumb for an experiment:
/// owner, project, then either group and its experiments anchor or the
/// project's experiments anchor, then the experiment leaf.
pub fn breadcrumb_links(
    routes: &AppRoutes,
    project: &ProjectName,
    group: Option<u64>,
    experiment_id: u64,
) -> Vec<BreadcrumbLink> {
    let user = project.user.as_str();
    let project_url = routes.project_url(user, &project.project);

    let mut links = vec![
        BreadcrumbLink::link(user, routes.user_url(user)),
        BreadcrumbLink::link(project.project.as_str(), project_url.as_str()),
    ];
    match group {
        Some(group) => {
            let group_url = routes.group_url(user, &project.project, group);
            links.push(BreadcrumbLink::link(format!("Group {}", group), group_url.as_str()));
            links.push(BreadcrumbLink::link("Experiments", anchor(&group_url, "experiments")));
        }
        None => {
            links.push(BreadcrumbLink::link("Experiments", anchor(&project_url, "experiments")));
        }
    }
    links.push(BreadcrumbLink::leaf(format!("Experiment {}", experiment_id)));
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> ProjectName {
        ProjectName::parse("alice.proj1").unwrap()
    }

    #[test]
    fn test_breadcrumb_without_group() {
        let links = breadcrumb_links(&AppRoutes::default(), &alice(), None, 42);
        assert_eq!(
            links,
            vec![
                BreadcrumbLink::link("alice", "/app/alice"),
                BreadcrumbLink::link("proj1", "/app/alice/proj1"),
                BreadcrumbLink::link("Experiments", "/app/alice/proj1#experiments"),
                BreadcrumbLink::leaf("Experiment 42"),
            ]
        );
    }

    #[test]
    fn test_breadcrumb_with_group() {
        let links = breadcrumb_links(&AppRoutes::default(), &alice(), Some(7), 42);
        assert_eq!(links.len(), 5);
        assert_eq!(links[2], BreadcrumbLink::link("Group 7", "/app/alice/proj1/groups/7"));
        assert_eq!(
            links[3],
            BreadcrumbLink::link("Experiments", "/app/alice/proj1/groups/7#experiments")
        );
        assert_eq!(links[4], BreadcrumbLink::leaf("Experiment 42"));
    }

    #[test]
    fn test_only_leaf_is_not_navigable() {
        for group in [None, Some(3)] {
            let links = breadcrumb_links(&AppRoutes::default(), &alice(), group, 1);
            let (leaf, rest) = links.split_last().unwrap();
            assert!(!leaf.is_navigable());
            assert!(rest.iter().all(BreadcrumbLink::is_navigable));
        }
    }
}
