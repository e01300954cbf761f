use expboard_core::{AppRoutes, DetailController, DetailPage, DetailView, Experiment, SharedCommands};
use leptos::prelude::*;

use super::{Breadcrumb, EmptyList, ErrorBox, LinkedTab};

/// The experiment detail page: breadcrumb with bookmark and actions over the
/// tabbed panels, or the empty state while there is no experiment.
///
/// Mounting asks `commands` for the experiment once; the caller pushes the
/// result back in through `experiment`.
#[component]
pub fn ExperimentDetail(
    #[prop(into)] experiment: Signal<Option<Experiment>>,
    routes: AppRoutes,
    commands: SharedCommands,
) -> impl IntoView {
    let controller = DetailController::new(routes, commands.clone());
    controller.mount();

    // Survives experiment refreshes so the open tab does not jump.
    let selected_tab = RwSignal::new(None::<usize>);

    let detail = Memo::new(move |_| {
        experiment.with(|e| controller.render(e.as_ref()).map_err(|err| err.to_string()))
    });

    let page = move || match detail.get() {
        Ok(DetailView::Empty(state)) => view! { <EmptyList state=state /> }.into_any(),
        Ok(DetailView::Page(page)) => {
            let DetailPage {
                icon,
                breadcrumb,
                experiment_url,
                actions,
                bookmark,
                tabs,
                ..
            } = *page;
            view! {
                <Breadcrumb icon=icon links=breadcrumb bookmark=bookmark actions=actions />
                <LinkedTab
                    base_url=experiment_url
                    tabs=tabs
                    selected=selected_tab
                    commands=commands.clone()
                />
            }
            .into_any()
        }
        Err(message) => view! { <ErrorBox message=message /> }.into_any(),
    };

    view! {
        <div class="h-full flex flex-col">
            <div class="flex flex-col flex-grow min-h-0 space-y-6">{page}</div>
        </div>
    }
}
