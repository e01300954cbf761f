use expboard_core::{Experiment, SharedCommands, UpdateDict};
use leptos::prelude::*;
use lucide_leptos::LayoutDashboard;

use crate::util::{format_duration, format_optional_date, parse_tags, status_badge_class};

fn info_row(label: impl Into<String>, value: String) -> impl IntoView {
    let label = label.into();
    view! {
        <div class="flex justify-between py-2 text-sm">
            <span class="text-slate-500">{label}</span>
            <span class="text-slate-200 font-mono">{value}</span>
        </div>
    }
}

#[component]
pub fn ExperimentOverview(experiment: Experiment, commands: SharedCommands) -> impl IntoView {
    let (show_edit, set_show_edit) = signal(false);
    let (edit_desc, set_edit_desc) = signal(experiment.description.clone().unwrap_or_default());
    let (edit_tags, set_edit_tags) = signal(experiment.tags.join(", "));

    let save_metadata = move |_| {
        let mut changes = UpdateDict::new();
        changes.insert("description".to_string(), edit_desc.get().into());
        changes.insert("tags".to_string(), parse_tags(&edit_tags.get()).into());
        commands.update(changes);
        set_show_edit.set(false);
    };

    let status = experiment.last_status;
    let duration = experiment
        .duration_secs()
        .map(format_duration)
        .unwrap_or_else(|| "-".to_string());
    let declarations = experiment.declarations.clone().unwrap_or_default();
    let last_metric = experiment.last_metric.clone().unwrap_or_default();

    view! {
        <div class="space-y-6">
            <div class="flex items-start justify-between">
                <div class="space-y-2 max-w-2xl">
                    <p class="text-slate-400 text-sm leading-relaxed">
                        {experiment.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                    </p>
                    <div class="flex flex-wrap gap-2 pt-2">
                        <div class=format!("px-2 py-0.5 rounded-md text-xs border {}", status_badge_class(status))>
                            {status.as_str()}
                        </div>
                        <div class="px-2 py-0.5 bg-blue-500/10 text-blue-400 rounded-md text-xs border border-blue-500/20 flex items-center space-x-1">
                            <LayoutDashboard size=12 />
                            <span>{experiment.num_jobs} " Jobs"</span>
                        </div>
                        {experiment.tags.iter().map(|tag| view! {
                            <div class="px-2 py-0.5 bg-slate-800 text-slate-400 rounded-md text-xs border border-slate-700">
                                {tag.clone()}
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <button
                    on:click=move |_| set_show_edit.set(true)
                    class="px-4 py-2 bg-slate-800 hover:bg-slate-700 rounded-lg text-sm transition-colors border border-slate-700"
                >
                    "Edit Metadata"
                </button>
            </div>

            <div class=move || if show_edit.get() { "bg-slate-900 border border-slate-800 rounded-xl p-6 space-y-4" } else { "hidden" }>
                <div>
                    <label class="block text-xs font-semibold text-slate-500 uppercase mb-1">"Description"</label>
                    <textarea
                        on:input=move |ev| set_edit_desc.set(event_target_value(&ev))
                        prop:value=edit_desc
                        class="w-full bg-slate-950 border border-slate-800 rounded-lg px-4 py-2 text-white h-32 focus:border-blue-500 outline-none"
                        placeholder="Provide a detailed description..."
                    ></textarea>
                </div>
                <div>
                    <label class="block text-xs font-semibold text-slate-500 uppercase mb-1">"Tags (comma separated)"</label>
                    <input
                        type="text"
                        on:input=move |ev| set_edit_tags.set(event_target_value(&ev))
                        prop:value=edit_tags
                        class="w-full bg-slate-950 border border-slate-800 rounded-lg px-4 py-2 text-white focus:border-blue-500 outline-none"
                        placeholder="research, mnist, baseline"
                    />
                </div>
                <div class="flex justify-end space-x-3 pt-4">
                    <button on:click=move |_| set_show_edit.set(false) class="px-4 py-2 text-slate-400 hover:text-white transition-colors">"Cancel"</button>
                    <button on:click=save_metadata class="px-6 py-2 bg-blue-600 hover:bg-blue-500 text-white rounded-lg font-medium transition-colors">"Save Changes"</button>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-slate-900 border border-slate-800 rounded-xl p-6 divide-y divide-slate-800">
                    {info_row("Owner", experiment.user.clone())}
                    {info_row("Group", experiment.experiment_group.clone().unwrap_or_else(|| "-".to_string()))}
                    {info_row("Created", format_optional_date(experiment.created_at.as_ref()))}
                    {info_row("Updated", format_optional_date(experiment.updated_at.as_ref()))}
                    {info_row("Started", format_optional_date(experiment.started_at.as_ref()))}
                    {info_row("Finished", format_optional_date(experiment.finished_at.as_ref()))}
                    {info_row("Duration", duration)}
                </div>
                <div class="space-y-6">
                    <div class="bg-slate-900 border border-slate-800 rounded-xl p-6">
                        <h3 class="text-sm font-semibold text-slate-300 mb-2">"Declarations"</h3>
                        {if declarations.is_empty() {
                            view! { <p class="text-sm text-slate-500">"No declarations."</p> }.into_any()
                        } else {
                            view! {
                                <div class="divide-y divide-slate-800">
                                    {declarations.into_iter().map(|(k, v)| info_row(k, v.to_string())).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    </div>
                    <div class="bg-slate-900 border border-slate-800 rounded-xl p-6">
                        <h3 class="text-sm font-semibold text-slate-300 mb-2">"Last metrics"</h3>
                        {if last_metric.is_empty() {
                            view! { <p class="text-sm text-slate-500">"No metrics reported."</p> }.into_any()
                        } else {
                            view! {
                                <div class="divide-y divide-slate-800">
                                    {last_metric.into_iter().map(|(k, v)| info_row(k, format!("{:.4}", v))).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
