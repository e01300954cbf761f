use expboard_core::models::yaml_text;
use leptos::prelude::*;

use super::placeholder;
use crate::components::ErrorBox;

/// A JSON document shown as YAML.
#[component]
pub fn YamlText(title: &'static str, config: Option<serde_json::Value>) -> impl IntoView {
    let Some(config) = config else {
        return placeholder("No configuration.").into_any();
    };

    match yaml_text(&config) {
        Ok(text) => view! {
            <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
                <div class="px-4 py-2 border-b border-slate-800 text-xs text-slate-500">{title}</div>
                <pre class="p-4 text-xs text-slate-300 font-mono whitespace-pre-wrap overflow-auto">{text}</pre>
            </div>
        }
        .into_any(),
        Err(e) => view! { <ErrorBox message=e.to_string() /> }.into_any(),
    }
}
