//! Tab table for the experiment detail page.
//!
//! Every tab is one row of [`TAB_TABLE`]: a title, a URL suffix relative to the
//! experiment's page, and a [`TabKind`] that slices the fields its panel needs
//! out of the experiment.

use std::collections::BTreeMap;

use crate::models::{ChartKind, Experiment, RunEnv, EXPERIMENTS_RESOURCE};
use crate::urls::join;

/// Which panel a tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabKind {
    Overview,
    Logs,
    Jobs,
    CodeRef,
    RunEnv,
    Build,
    Statuses,
    Metrics,
    Config,
    Instructions,
}

/// A row of the tab table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDef {
    pub title: &'static str,
    pub rel_url: &'static str,
    pub kind: TabKind,
}

/// The detail page tabs, in display order. RunEnv and Build share the
/// `build` suffix; see [`duplicate_suffixes`].
pub const TAB_TABLE: [TabDef; 10] = [
    TabDef { title: "Overview", rel_url: "", kind: TabKind::Overview },
    TabDef { title: "Logs", rel_url: "logs", kind: TabKind::Logs },
    TabDef { title: "Jobs", rel_url: "jobs", kind: TabKind::Jobs },
    TabDef { title: "CodeRef", rel_url: "codeRef", kind: TabKind::CodeRef },
    TabDef { title: "RunEnv", rel_url: "build", kind: TabKind::RunEnv },
    TabDef { title: "Build", rel_url: "build", kind: TabKind::Build },
    TabDef { title: "Statuses", rel_url: "statuses", kind: TabKind::Statuses },
    TabDef { title: "Metrics", rel_url: "metrics", kind: TabKind::Metrics },
    TabDef { title: "Config", rel_url: "config", kind: TabKind::Config },
    TabDef { title: "Instructions", rel_url: "instructions", kind: TabKind::Instructions },
];

/// Chart kinds requested from the metrics panel.
pub const METRIC_CHART_KINDS: [ChartKind; 2] = [ChartKind::Line, ChartKind::Bar];

/// The props handed to a tab's panel.
///
/// Callbacks are not part of the props: the Overview panel receives the
/// update command and the CodeRef panel the code-reference fetch command from
/// the page's [`crate::ExperimentCommands`].
#[derive(Debug, Clone, PartialEq)]
pub enum TabPanel {
    Overview {
        experiment: Experiment,
    },
    Logs {
        user: String,
        project: String,
        resource: &'static str,
        id: u64,
    },
    Jobs {
        user: String,
        experiment: Experiment,
    },
    CodeRef {
        code_reference_id: Option<u64>,
    },
    RunEnv {
        run_env: Option<RunEnv>,
    },
    Build {
        build_name: Option<String>,
    },
    Statuses {
        project: String,
        resource: &'static str,
        id: u64,
    },
    Metrics {
        project: String,
        resource: &'static str,
        id: u64,
        experiment: Experiment,
        chart_types: Vec<ChartKind>,
    },
    Config {
        title: &'static str,
        config: Option<serde_json::Value>,
    },
    Instructions {
        id: u64,
    },
}

impl TabKind {
    /// Build this tab's panel props from the experiment.
    pub fn panel(self, experiment: &Experiment) -> TabPanel {
        match self {
            TabKind::Overview => TabPanel::Overview {
                experiment: experiment.clone(),
            },
            TabKind::Logs => TabPanel::Logs {
                user: experiment.user.clone(),
                project: experiment.project.clone(),
                resource: EXPERIMENTS_RESOURCE,
                id: experiment.id,
            },
            TabKind::Jobs => TabPanel::Jobs {
                user: experiment.user.clone(),
                experiment: experiment.clone(),
            },
            TabKind::CodeRef => TabPanel::CodeRef {
                code_reference_id: experiment.code_reference,
            },
            TabKind::RunEnv => TabPanel::RunEnv {
                run_env: experiment.run_env.clone(),
            },
            TabKind::Build => TabPanel::Build {
                build_name: experiment.build_job.clone(),
            },
            TabKind::Statuses => TabPanel::Statuses {
                project: experiment.project.clone(),
                resource: EXPERIMENTS_RESOURCE,
                id: experiment.id,
            },
            TabKind::Metrics => TabPanel::Metrics {
                project: experiment.project.clone(),
                resource: EXPERIMENTS_RESOURCE,
                id: experiment.id,
                experiment: experiment.clone(),
                chart_types: METRIC_CHART_KINDS.to_vec(),
            },
            TabKind::Config => TabPanel::Config {
                title: "Config",
                config: experiment.config.clone(),
            },
            TabKind::Instructions => TabPanel::Instructions { id: experiment.id },
        }
    }
}

/// A tab ready to hand to the tab router.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub title: &'static str,
    pub rel_url: &'static str,
    pub panel: TabPanel,
}

/// Map the tab table over an experiment.
pub fn build_tabs(experiment: &Experiment) -> Vec<Tab> {
    TAB_TABLE
        .iter()
        .map(|def| Tab {
            title: def.title,
            rel_url: def.rel_url,
            panel: def.kind.panel(experiment),
        })
        .collect()
}

/// Suffixes used by more than one tab, with the indices of those tabs.
pub fn duplicate_suffixes(defs: &[TabDef]) -> Vec<(&'static str, Vec<usize>)> {
    let mut by_suffix: BTreeMap<&'static str, Vec<usize>> = BTreeMap::new();
    for (i, def) in defs.iter().enumerate() {
        by_suffix.entry(def.rel_url).or_default().push(i);
    }
    by_suffix.into_iter().filter(|(_, idx)| idx.len() > 1).collect()
}

fn path_matches(base_url: &str, rel_url: &str, pathname: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    join(base_url.trim_end_matches('/'), rel_url) == path
}

/// Pick the selected tab for a location.
///
/// The current selection wins while its URL still matches the path, so tabs
/// sharing a suffix stay selectable by click. Otherwise the first matching tab
/// is selected, falling back to the first tab.
pub fn resolve_tab(tabs: &[Tab], base_url: &str, pathname: &str, current: Option<usize>) -> usize {
    if let Some(i) = current {
        if tabs.get(i).is_some_and(|t| path_matches(base_url, t.rel_url, pathname)) {
            return i;
        }
    }
    tabs.iter()
        .position(|t| path_matches(base_url, t.rel_url, pathname))
        .unwrap_or(0)
}
