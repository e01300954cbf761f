use std::sync::Arc;

use expboard_core::urls::join;
use expboard_core::{resolve_tab, SharedCommands, Tab};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::panels::TabContent;

/// Tab strip whose selection is mirrored in the URL: each tab lives at
/// `base_url` joined with its relative suffix.
///
/// `selected` remembers the last clicked tab so that tabs sharing a suffix
/// stay individually selectable.
#[component]
pub fn LinkedTab(
    base_url: String,
    tabs: Vec<Tab>,
    selected: RwSignal<Option<usize>>,
    commands: SharedCommands,
) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let tabs = Arc::new(tabs);

    let active = Memo::new({
        let tabs = tabs.clone();
        let base_url = base_url.clone();
        move |_| resolve_tab(&tabs, &base_url, &location.pathname.get(), selected.get())
    });

    let buttons = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let href = join(&base_url, tab.rel_url);
            let navigate = navigate.clone();
            view! {
                <button
                    on:click=move |_| {
                        selected.set(Some(i));
                        navigate(&href, Default::default());
                    }
                    class=move || {
                        if active.get() == i {
                            "px-5 py-2 rounded-lg text-sm font-medium transition-all duration-200 bg-slate-800 text-white shadow-sm"
                        } else {
                            "px-5 py-2 rounded-lg text-sm font-medium transition-all duration-200 text-slate-500 hover:text-slate-300"
                        }
                    }
                >
                    {tab.title}
                </button>
            }
        })
        .collect_view();

    let content = move || {
        tabs.get(active.get()).map(|tab| {
            view! { <TabContent panel=tab.panel.clone() commands=commands.clone() /> }
        })
    };

    view! {
        <div class="flex flex-col flex-grow min-h-0 space-y-6">
            <div class="flex flex-wrap gap-1 bg-slate-900/50 p-1 rounded-xl border border-slate-800 w-fit">
                {buttons}
            </div>
            <div class="flex-grow min-h-0">{content}</div>
        </div>
    }
}
