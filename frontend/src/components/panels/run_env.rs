use expboard_core::models::RunEnv;
use leptos::prelude::*;

use super::placeholder;

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn RunEnvPanel(run_env: Option<RunEnv>) -> impl IntoView {
    let Some(run_env) = run_env.filter(|env| !env.is_empty()) else {
        return placeholder("No run environment reported.").into_any();
    };

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
            <table class="w-full text-left text-sm">
                <tbody class="divide-y divide-slate-800">
                    {run_env.iter().map(|(key, value)| view! {
                        <tr>
                            <td class="px-6 py-3 text-slate-500 w-1/3">{key.clone()}</td>
                            <td class="px-6 py-3 text-slate-200 font-mono break-all">{display_value(value)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
