use expboard_core::models::{Page, StatusEntry};
use leptos::prelude::*;

use super::{dashboard_config, entity_url, loading, placeholder};
use crate::api::get_json;
use crate::components::ErrorBox;
use crate::util::{format_date, status_badge_class};

/// Status history of an entity, newest first.
#[component]
pub fn Statuses(project: String, resource: &'static str, id: u64) -> impl IntoView {
    let url = match entity_url(&dashboard_config(), &project, resource, id, "statuses") {
        Ok(url) => url,
        Err(message) => return view! { <ErrorBox message=message /> }.into_any(),
    };

    let statuses = LocalResource::new(move || {
        let url = url.clone();
        async move { get_json::<Page<StatusEntry>>(&url).await }
    });

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
            <Suspense fallback=|| loading("statuses")>
                {move || Suspend::new(async move {
                    match statuses.get() {
                        Some(Ok(page)) if page.results.is_empty() => placeholder("No statuses recorded.").into_any(),
                        Some(Ok(page)) => {
                            let mut entries = page.results;
                            entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                            view! {
                                <table class="w-full text-left text-sm">
                                    <thead class="bg-slate-900/50 text-slate-500 text-xs uppercase">
                                        <tr>
                                            <th class="px-6 py-3">"Status"</th>
                                            <th class="px-6 py-3">"Message"</th>
                                            <th class="px-6 py-3">"Date"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-800">
                                        {entries.into_iter().map(|entry| view! {
                                            <tr>
                                                <td class="px-6 py-3">
                                                    <span class=format!("px-2 py-0.5 rounded-md text-xs border {}", status_badge_class(entry.status))>
                                                        {entry.status.as_str()}
                                                    </span>
                                                </td>
                                                <td class="px-6 py-3 text-slate-400">{entry.message.unwrap_or_default()}</td>
                                                <td class="px-6 py-3 text-slate-400">{format_date(&entry.created_at)}</td>
                                            </tr>
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            }.into_any()
                        }
                        Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                        None => loading("statuses").into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
    .into_any()
}
