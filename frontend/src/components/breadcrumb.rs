use expboard_core::{ActionDescriptor, BookmarkDescriptor, BreadcrumbIcon, BreadcrumbLink};
use leptos::prelude::*;
use lucide_leptos::{ChevronRight, CircleStop, Package, Star, Trash2};

fn icon_view(icon: BreadcrumbIcon) -> impl IntoView {
    match icon {
        BreadcrumbIcon::Cube => view! { <Package size=24 /> },
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Page header: icon, navigable path segments, bookmark star and actions menu.
#[component]
pub fn Breadcrumb(
    icon: BreadcrumbIcon,
    links: Vec<BreadcrumbLink>,
    bookmark: BookmarkDescriptor,
    actions: ActionDescriptor,
) -> impl IntoView {
    let last = links.len().saturating_sub(1);
    let (menu_open, set_menu_open) = signal(false);

    let (star_class, star_title) = if bookmark.active {
        ("text-yellow-400", "Remove bookmark")
    } else {
        ("text-slate-600 hover:text-yellow-400", "Bookmark")
    };

    let segments = links
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            let item = match link.value {
                // Owner, project and group pages are not part of this app; `rel="external"`
                // keeps the router from handling the click.
                Some(href) => view! {
                    <a href=href rel="external" class="text-slate-400 hover:text-white transition-colors">{link.name}</a>
                }
                .into_any(),
                None => view! { <span class="font-semibold text-white">{link.name}</span> }.into_any(),
            };
            let separator = (i < last).then(|| {
                view! { <span class="text-slate-600"><ChevronRight size=16 /></span> }
            });
            view! { {item} {separator} }
        })
        .collect_view();

    let menu = move || {
        menu_open.get().then(|| {
            let stop = actions.clone();
            let delete = actions.clone();
            let stop_button = stop.can_stop().then(|| {
                view! {
                    <button
                        on:click=move |_| {
                            set_menu_open.set(false);
                            if confirm("Stop this experiment?") {
                                stop.stop();
                            }
                        }
                        class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-slate-300 hover:bg-slate-800 transition-colors"
                    >
                        <CircleStop size=16 />
                        <span>"Stop"</span>
                    </button>
                }
            });
            view! {
                <div class="absolute right-0 mt-2 w-40 bg-slate-900 border border-slate-800 rounded-lg shadow-xl overflow-hidden z-10">
                    {stop_button}
                    <button
                        on:click=move |_| {
                            set_menu_open.set(false);
                            if confirm("Delete this experiment? This cannot be undone.") {
                                delete.delete();
                            }
                        }
                        class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-red-400 hover:bg-slate-800 transition-colors"
                    >
                        <Trash2 size=16 />
                        <span>"Delete"</span>
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="flex items-center justify-between pb-6 border-b border-slate-800 flex-shrink-0">
            <h1 class="text-2xl font-bold text-white flex items-center space-x-3">
                <div class="text-blue-500">{icon_view(icon)}</div>
                <div class="flex items-center space-x-2">{segments}</div>
                <button
                    title=star_title
                    on:click=move |_| bookmark.toggle()
                    class=format!("ml-2 transition-colors {}", star_class)
                >
                    <Star size=20 />
                </button>
            </h1>
            <div class="relative">
                <button
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="px-4 py-2 bg-slate-800 hover:bg-slate-700 rounded-lg text-sm transition-colors border border-slate-700"
                >
                    "Actions"
                </button>
                {menu}
            </div>
        </div>
    }
}
