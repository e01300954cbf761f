use expboard_core::instructions::experiment_instructions;
use leptos::prelude::*;

use super::dashboard_config;

/// CLI commands for working with this experiment from a terminal.
#[component]
pub fn ExperimentInstructions(id: u64) -> impl IntoView {
    let cli = dashboard_config().cli_name;

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl divide-y divide-slate-800">
            {experiment_instructions(&cli, id).into_iter().map(|instruction| view! {
                <div class="p-4 space-y-2">
                    <h3 class="text-sm font-semibold text-slate-300">{instruction.title}</h3>
                    <pre class="bg-slate-950 border border-slate-800 rounded-lg px-4 py-2 text-xs text-blue-300 font-mono overflow-auto">{instruction.command}</pre>
                </div>
            }).collect_view()}
        </div>
    }
}
