use expboard_core::models::{MetricEntry, Page};
use expboard_core::{ChartKind, Experiment};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

use super::{dashboard_config, entity_url, loading, placeholder};
use crate::api::get_json;
use crate::charts::chart_json;
use crate::components::ErrorBox;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(root: &JsValue, data: &JsValue, layout: &JsValue, config: &JsValue);
}

/// Draws a serialized Plotly figure once the container is attached.
#[component]
pub fn PlotlyChart(figure: String) -> impl IntoView {
    let div_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if let Some(div) = div_ref.get() {
            if let Ok(js_value) = js_sys::JSON::parse(&figure) {
                let data =
                    js_sys::Reflect::get(&js_value, &"data".into()).unwrap_or(JsValue::UNDEFINED);
                let layout =
                    js_sys::Reflect::get(&js_value, &"layout".into()).unwrap_or(JsValue::UNDEFINED);
                let config =
                    js_sys::Reflect::get(&js_value, &"config".into()).unwrap_or(JsValue::UNDEFINED);

                let div_element: &web_sys::HtmlElement = &div;
                new_plot(&div_element.into(), &data, &layout, &config);
            } else {
                log::error!("Failed to parse Plotly JSON");
            }
        }
    });

    view! {
        <div class="w-full h-80 p-2">
            <div node_ref=div_ref class="w-full h-full"></div>
        </div>
    }
}

/// Metric history of an entity, one chart per requested kind.
#[component]
pub fn Metrics(
    project: String,
    resource: &'static str,
    id: u64,
    experiment: Experiment,
    chart_types: Vec<ChartKind>,
) -> impl IntoView {
    let url = match entity_url(&dashboard_config(), &project, resource, id, "metrics") {
        Ok(url) => url,
        Err(message) => return view! { <ErrorBox message=message /> }.into_any(),
    };

    let metrics = LocalResource::new(move || {
        let url = url.clone();
        async move { get_json::<Page<MetricEntry>>(&url).await }
    });

    view! {
        <Suspense fallback=|| loading("metrics")>
            {move || {
                let chart_types = chart_types.clone();
                let last_metric = experiment.last_metric.clone();
                Suspend::new(async move {
                    match metrics.get() {
                        Some(Ok(page)) if page.results.is_empty() && !last_metric.as_ref().is_some_and(|m| !m.is_empty()) => {
                            placeholder("No metrics reported yet.").into_any()
                        }
                        Some(Ok(page)) => view! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                {chart_types.into_iter().map(|kind| view! {
                                    <div class="bg-slate-900 border border-slate-800 rounded-xl">
                                        <div class="px-4 py-2 border-b border-slate-800 text-xs text-slate-500 uppercase">
                                            {kind.to_string()}
                                        </div>
                                        <PlotlyChart figure=chart_json(kind, &page.results, last_metric.as_ref()) />
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_any(),
                        Some(Err(message)) => view! { <ErrorBox message=message /> }.into_any(),
                        None => loading("metrics").into_any(),
                    }
                })
            }}
        </Suspense>
    }
    .into_any()
}
