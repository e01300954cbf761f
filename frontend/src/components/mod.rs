mod breadcrumb;
mod empty;
mod experiment_detail;
mod linked_tab;
pub mod panels;

pub use breadcrumb::Breadcrumb;
pub use empty::EmptyList;
pub use experiment_detail::ExperimentDetail;
pub use linked_tab::LinkedTab;

use leptos::prelude::*;
use lucide_leptos::TriangleAlert;

/// Inline error box for failed fetches and unusable identifiers.
#[component]
pub fn ErrorBox(message: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 p-4 bg-red-500/10 border border-red-500/20 rounded-xl text-red-400 text-sm">
            <TriangleAlert size=18 />
            <span>{message}</span>
        </div>
    }
}
