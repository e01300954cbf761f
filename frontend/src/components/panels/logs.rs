use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{dashboard_config, entity_url, loading};
use crate::api::get_text;
use crate::components::ErrorBox;

/// Streams the log text of an entity, polling at the configured interval
/// for as long as the panel is mounted.
#[component]
pub fn Logs(user: String, project: String, resource: &'static str, id: u64) -> impl IntoView {
    let config = dashboard_config();
    let url = match entity_url(&config, &project, resource, id, "logs") {
        Ok(url) => url,
        Err(message) => return view! { <ErrorBox message=message /> }.into_any(),
    };

    let logs = LocalResource::new(move || {
        let url = url.clone();
        async move { get_text(&url).await }
    });

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });
    let interval_ms = u32::try_from(config.refresh_interval_secs.saturating_mul(1000))
        .unwrap_or(u32::MAX);
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            logs.refetch();
        }
    });

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl overflow-hidden">
            <div class="flex items-center justify-between px-4 py-2 border-b border-slate-800 bg-slate-900/50">
                <span class="text-xs text-slate-500 font-mono">{format!("{} {} by {}", resource, id, user)}</span>
                <button
                    on:click=move |_| logs.refetch()
                    class="text-xs text-slate-400 hover:text-white transition-colors"
                >
                    "Refresh"
                </button>
            </div>
            <Suspense fallback=|| loading("logs")>
                {move || Suspend::new(async move {
                    match logs.get() {
                        Some(Ok(text)) if text.trim().is_empty() => view! {
                            <div class="p-8 text-center text-slate-500 text-sm">"No logs yet."</div>
                        }.into_any(),
                        Some(Ok(text)) => view! {
                            <pre class="p-4 text-xs text-slate-300 font-mono whitespace-pre-wrap overflow-auto max-h-[60vh]">{text}</pre>
                        }.into_any(),
                        Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                        None => loading("logs").into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
    .into_any()
}
