//! One component per tab of the experiment page.

mod build;
mod code_reference;
mod instructions;
mod jobs;
mod logs;
mod metrics;
mod overview;
mod run_env;
mod statuses;
mod yaml_text;

pub use build::EntityBuild;
pub use code_reference::CodeReferencePanel;
pub use instructions::ExperimentInstructions;
pub use jobs::ExperimentJobs;
pub use logs::Logs;
pub use metrics::{Metrics, PlotlyChart};
pub use overview::ExperimentOverview;
pub use run_env::RunEnvPanel;
pub use statuses::Statuses;
pub use yaml_text::YamlText;

use expboard_core::{DashboardConfig, ProjectName, SharedCommands, TabPanel};
use leptos::prelude::*;

/// Dashboard settings provided by the page, or defaults outside of one.
pub(crate) fn dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_default()
}

/// API URL of a sub-resource of `resource/id` in the compound `project`.
pub(crate) fn entity_url(
    config: &DashboardConfig,
    project: &str,
    resource: &str,
    id: u64,
    action: &str,
) -> Result<String, String> {
    let name = ProjectName::parse(project).map_err(|e| e.to_string())?;
    Ok(config
        .api_routes()
        .entity_action(&name.user, &name.project, resource, id, action))
}

pub(crate) fn loading(what: &'static str) -> impl IntoView {
    view! { <div class="p-4 text-slate-500 text-sm animate-pulse">"Loading " {what} "..."</div> }
}

pub(crate) fn placeholder(message: &'static str) -> impl IntoView {
    view! { <div class="p-8 text-center text-slate-500 text-sm">{message}</div> }
}

/// Render the panel a tab was built with.
#[component]
pub fn TabContent(panel: TabPanel, commands: SharedCommands) -> impl IntoView {
    match panel {
        TabPanel::Overview { experiment } => {
            view! { <ExperimentOverview experiment=experiment commands=commands /> }.into_any()
        }
        TabPanel::Logs {
            user,
            project,
            resource,
            id,
        } => view! { <Logs user=user project=project resource=resource id=id /> }.into_any(),
        TabPanel::Jobs { user, experiment } => {
            view! { <ExperimentJobs user=user experiment=experiment /> }.into_any()
        }
        TabPanel::CodeRef { code_reference_id } => view! {
            <CodeReferencePanel code_reference_id=code_reference_id commands=commands />
        }
        .into_any(),
        TabPanel::RunEnv { run_env } => view! { <RunEnvPanel run_env=run_env /> }.into_any(),
        TabPanel::Build { build_name } => view! { <EntityBuild build_name=build_name /> }.into_any(),
        TabPanel::Statuses {
            project,
            resource,
            id,
        } => view! { <Statuses project=project resource=resource id=id /> }.into_any(),
        TabPanel::Metrics {
            project,
            resource,
            id,
            experiment,
            chart_types,
        } => view! {
            <Metrics
                project=project
                resource=resource
                id=id
                experiment=experiment
                chart_types=chart_types
            />
        }
        .into_any(),
        TabPanel::Config { title, config } => {
            view! { <YamlText title=title config=config /> }.into_any()
        }
        TabPanel::Instructions { id } => view! { <ExperimentInstructions id=id /> }.into_any(),
    }
}
