use expboard_core::models::{ExperimentJob, Page, EXPERIMENTS_RESOURCE};
use expboard_core::Experiment;
use leptos::prelude::*;

use super::{dashboard_config, entity_url, loading, placeholder};
use crate::api::get_json;
use crate::components::ErrorBox;
use crate::util::{format_optional_date, status_badge_class};

#[component]
pub fn ExperimentJobs(user: String, experiment: Experiment) -> impl IntoView {
    let config = dashboard_config();
    let url = match entity_url(
        &config,
        &experiment.project,
        EXPERIMENTS_RESOURCE,
        experiment.id,
        "jobs",
    ) {
        Ok(url) => url,
        Err(message) => return view! { <ErrorBox message=message /> }.into_any(),
    };

    let jobs = LocalResource::new(move || {
        let url = url.clone();
        async move { get_json::<Page<ExperimentJob>>(&url).await }
    });

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
            <div class="px-6 py-3 border-b border-slate-800 text-xs text-slate-500">
                {format!("{} jobs, started by {}", experiment.num_jobs, user)}
            </div>
            <Suspense fallback=|| loading("jobs")>
                {move || Suspend::new(async move {
                    match jobs.get() {
                        Some(Ok(page)) if page.results.is_empty() => placeholder("No jobs found.").into_any(),
                        Some(Ok(page)) => view! {
                            <table class="w-full text-left text-sm">
                                <thead class="bg-slate-900/50 text-slate-500 text-xs uppercase">
                                    <tr>
                                        <th class="px-6 py-3">"Id"</th>
                                        <th class="px-6 py-3">"Role"</th>
                                        <th class="px-6 py-3">"Status"</th>
                                        <th class="px-6 py-3">"Node"</th>
                                        <th class="px-6 py-3">"Started"</th>
                                        <th class="px-6 py-3">"Finished"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-800">
                                    {page.results.into_iter().map(|job| view! {
                                        <tr class="hover:bg-slate-800/30 transition-colors">
                                            <td class="px-6 py-3 font-mono text-slate-300">{job.id}</td>
                                            <td class="px-6 py-3 text-slate-400">{job.role.unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="px-6 py-3">
                                                <span class=format!("px-2 py-0.5 rounded-md text-xs border {}", status_badge_class(job.last_status))>
                                                    {job.last_status.as_str()}
                                                </span>
                                            </td>
                                            <td class="px-6 py-3 text-slate-400">{job.node_scheduled.unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="px-6 py-3 text-slate-400">{format_optional_date(job.started_at.as_ref())}</td>
                                            <td class="px-6 py-3 text-slate-400">{format_optional_date(job.finished_at.as_ref())}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any(),
                        Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                        None => loading("jobs").into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
    .into_any()
}
