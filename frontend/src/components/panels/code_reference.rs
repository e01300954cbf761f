use expboard_core::SharedCommands;
use leptos::prelude::*;

use super::{loading, placeholder};
use crate::api::CodeReferenceStore;
use crate::components::ErrorBox;

fn field(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="flex justify-between py-2 text-sm">
            <span class="text-slate-500">{label}</span>
            <span class="text-slate-200 font-mono break-all">{value.unwrap_or_else(|| "-".to_string())}</span>
        </div>
    }
}

/// Git snapshot of the experiment, fetched when the panel is first shown.
#[component]
pub fn CodeReferencePanel(
    code_reference_id: Option<u64>,
    commands: SharedCommands,
) -> impl IntoView {
    if code_reference_id.is_none() {
        return placeholder("No code reference for this experiment.").into_any();
    }
    let Some(CodeReferenceStore(store)) = use_context::<CodeReferenceStore>() else {
        return placeholder("No code reference for this experiment.").into_any();
    };
    commands.fetch_code_reference();

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl p-6 divide-y divide-slate-800">
            {move || match store.get() {
                None => loading("code reference").into_any(),
                Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                Some(Ok(code_ref)) => view! {
                    {field("Commit", code_ref.commit)}
                    {field("Branch", code_ref.branch)}
                    {field("Head", code_ref.head)}
                    {field("Repository", code_ref.git_url)}
                    {field("Uncommitted changes", code_ref.is_dirty.map(|d| if d { "yes" } else { "no" }.to_string()))}
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}
