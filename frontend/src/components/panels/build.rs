use expboard_core::models::BuildJob;
use leptos::prelude::*;

use super::{dashboard_config, loading, placeholder};
use crate::api::get_json;
use crate::components::ErrorBox;
use crate::util::{format_optional_date, status_badge_class};

/// The image build an entity ran on, looked up by the build's unique name.
#[component]
pub fn EntityBuild(build_name: Option<String>) -> impl IntoView {
    let Some(build_name) = build_name else {
        return placeholder("This experiment has no build.").into_any();
    };
    let url = dashboard_config().api_routes().build(&build_name);

    let build = LocalResource::new(move || {
        let url = url.clone();
        async move { get_json::<BuildJob>(&url).await }
    });

    view! {
        <Suspense fallback=|| loading("build")>
            {move || Suspend::new(async move {
                match build.get() {
                    Some(Ok(build)) => view! {
                        <div class="space-y-6">
                            <div class="bg-slate-900 border border-slate-800 rounded-xl p-6 divide-y divide-slate-800">
                                <div class="flex justify-between py-2 text-sm">
                                    <span class="text-slate-500">"Build"</span>
                                    <span class="text-slate-200 font-mono">{build.unique_name.clone()}</span>
                                </div>
                                <div class="flex justify-between py-2 text-sm">
                                    <span class="text-slate-500">"Status"</span>
                                    <span class=format!("px-2 py-0.5 rounded-md text-xs border {}", status_badge_class(build.last_status))>
                                        {build.last_status.as_str()}
                                    </span>
                                </div>
                                <div class="flex justify-between py-2 text-sm">
                                    <span class="text-slate-500">"Started"</span>
                                    <span class="text-slate-200">{format_optional_date(build.started_at.as_ref())}</span>
                                </div>
                                <div class="flex justify-between py-2 text-sm">
                                    <span class="text-slate-500">"Finished"</span>
                                    <span class="text-slate-200">{format_optional_date(build.finished_at.as_ref())}</span>
                                </div>
                            </div>
                            {build.dockerfile.map(|dockerfile| view! {
                                <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
                                    <div class="px-4 py-2 border-b border-slate-800 text-xs text-slate-500">"Dockerfile"</div>
                                    <pre class="p-4 text-xs text-slate-300 font-mono whitespace-pre-wrap">{dockerfile}</pre>
                                </div>
                            })}
                        </div>
                    }.into_any(),
                    Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                    None => loading("build").into_any(),
                }
            })}
        </Suspense>
    }
    .into_any()
}
