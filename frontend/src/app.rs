use std::sync::Arc;

use expboard_core::{DashboardConfig, ExperimentRef, SharedCommands};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use lucide_leptos::{FlaskConical, Package};

use crate::api::{self, ApiCommands, ExperimentSignals};
use crate::components::ExperimentDetail;

/// Dashboard settings, `None` until `/api/config` has answered.
#[derive(Clone, Copy)]
pub struct ConfigContext(pub RwSignal<Option<DashboardConfig>>);

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(None::<DashboardConfig>);
    provide_context(ConfigContext(config));

    spawn_local(async move {
        let loaded = api::fetch_dashboard_config().await;
        log::debug!("Dashboard config: {:?}", loaded);
        config.set(Some(loaded));
    });

    view! {
        <Router>
            <div class="flex h-screen bg-slate-950 text-slate-100 font-sans">
                // Sidebar
                <nav class="w-64 border-r border-slate-800 flex flex-col p-4 bg-slate-900/50">
                    <div class="flex items-center space-x-3 px-2 py-6 mb-6">
                        <div class="p-2 bg-blue-600 rounded-lg shadow-lg shadow-blue-900/20">
                            <Package size=24 />
                        </div>
                        <span class="text-2xl font-bold tracking-tight text-white">"ExpBoard"</span>
                    </div>

                    <div class="space-y-1">
                        {move || config.get().map(|c| view! {
                            <a href=c.app_prefix.clone() rel="external" class="flex items-center space-x-3 px-4 py-3 rounded-xl hover:bg-slate-800 transition-all duration-200 text-slate-400 hover:text-white group">
                                <div class="group-hover:text-blue-400 transition-colors">
                                    <FlaskConical size=20 />
                                </div>
                                <span class="font-medium">"Experiments"</span>
                            </a>
                        })}
                    </div>
                </nav>

                // Main Content
                <main class="flex-grow overflow-auto p-8">
                    <Shell />
                </main>
            </div>
        </Router>
    }
    .into_any()
}

/// The experiment page `pathname` points at, if it is one this app serves.
///
/// Only experiment detail pages are served here. Every other dashboard page
/// is reached with a full navigation and rendered by whoever hosts it.
pub fn route_target(config: &DashboardConfig, pathname: &str) -> Option<ExperimentRef> {
    config
        .app_routes()
        .parse_experiment_path(pathname)
        .map(|(target, _)| target)
}

/// Picks the page for the current location. The prefix comes from the
/// dashboard config, so routes are matched here rather than with static
/// route paths.
#[component]
fn Shell() -> impl IntoView {
    let ConfigContext(config) = expect_context::<ConfigContext>();
    let location = use_location();

    let target = Memo::new(move |_| {
        let pathname = location.pathname.get();
        config.with(|c| c.as_ref().map(|c| route_target(c, &pathname)))
    });

    move || match target.get() {
        None => view! { <div class="p-8 text-center text-slate-500 animate-pulse">"Loading..."</div> }.into_any(),
        Some(None) => view! { <NotFound /> }.into_any(),
        Some(Some(target)) => {
            let config = config.get_untracked().unwrap_or_default();
            view! { <ExperimentDetailPage config=config target=target /> }.into_any()
        }
    }
}

/// Owns the experiment state for one page and wires the API-backed commands
/// into [`ExperimentDetail`].
#[component]
fn ExperimentDetailPage(config: DashboardConfig, target: ExperimentRef) -> impl IntoView {
    let signals = ExperimentSignals::new();
    provide_context(config.clone());
    provide_context(signals.code_reference);

    let routes = config.app_routes();
    let project_url = routes.project_url(&target.user, &target.project);
    log::info!(
        "Opening experiment {} of {}",
        target.id,
        target.project_unique_name()
    );

    let commands: SharedCommands = Arc::new(ApiCommands::new(config.api_routes(), target, signals));

    let deleted = signals.deleted;
    Effect::new(move |_| {
        if deleted.get() {
            log::info!("Experiment deleted, returning to {}", project_url);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&project_url) {
                    log::error!("Failed to leave deleted experiment: {:?}", e);
                }
            }
        }
    });

    view! { <ExperimentDetail experiment=signals.experiment routes=routes commands=commands /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-full space-y-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-slate-400">"Page not found"</p>
        </div>
    }
    .into_any()
}
