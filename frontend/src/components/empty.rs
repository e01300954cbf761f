use expboard_core::EmptyState;
use leptos::prelude::*;
use lucide_leptos::Package;

/// Placeholder shown while there is no entity to display.
#[component]
pub fn EmptyList(state: EmptyState) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 space-y-4 text-slate-500">
            <div class="p-4 bg-slate-900 border border-slate-800 rounded-xl">
                <Package size=32 />
            </div>
            <h2 class="text-xl font-semibold text-slate-300">{state.title()}</h2>
            <p class="text-sm">"It may still be loading, or it was removed."</p>
        </div>
    }
}
