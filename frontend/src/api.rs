//! HTTP access to the tracking API and the [`ExperimentCommands`] the detail
//! page is driven through.

use std::future::Future;

use expboard_core::models::CodeReference;
use expboard_core::{
    ApiRoutes, DashboardConfig, Experiment, ExperimentCommands, ExperimentRef, UpdateDict,
};
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// Dashboard settings served next to the front-end.
pub const CONFIG_URL: &str = "/api/config";

pub async fn get_text(url: &str) -> Result<String, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("Error fetching {}: {}", url, resp.status()));
    }

    resp.text().await.map_err(|e| e.to_string())
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let text = get_text(url).await?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

async fn send_empty(request: RequestBuilder, what: &str) -> Result<(), String> {
    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("Error {}: {}", what, resp.status()));
    }
    Ok(())
}

/// Fetch the dashboard settings, falling back to defaults when the server does
/// not provide usable ones.
pub async fn fetch_dashboard_config() -> DashboardConfig {
    match get_json::<DashboardConfig>(CONFIG_URL).await {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring invalid dashboard config: {}", e);
                DashboardConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Using default dashboard config: {}", e);
            DashboardConfig::default()
        }
    }
}

/// Lazily fetched code reference, shared between the page's commands and the
/// CodeRef panel.
#[derive(Clone, Copy)]
pub struct CodeReferenceStore(pub RwSignal<Option<Result<CodeReference, String>>>);

/// State the commands write back into.
#[derive(Clone, Copy)]
pub struct ExperimentSignals {
    pub experiment: RwSignal<Option<Experiment>>,
    pub code_reference: CodeReferenceStore,
    /// Set once the experiment has been deleted.
    pub deleted: RwSignal<bool>,
}

impl ExperimentSignals {
    pub fn new() -> Self {
        Self {
            experiment: RwSignal::new(None),
            code_reference: CodeReferenceStore(RwSignal::new(None)),
            deleted: RwSignal::new(false),
        }
    }
}

impl Default for ExperimentSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ExperimentCommands`] backed by the tracking API.
///
/// Every command runs in the background; results land in [`ExperimentSignals`].
#[derive(Clone)]
pub struct ApiCommands {
    api: ApiRoutes,
    target: ExperimentRef,
    signals: ExperimentSignals,
}

impl ApiCommands {
    pub fn new(api: ApiRoutes, target: ExperimentRef, signals: ExperimentSignals) -> Self {
        Self {
            api,
            target,
            signals,
        }
    }

    fn url(&self) -> String {
        self.api
            .experiment(&self.target.user, &self.target.project, self.target.id)
    }

    fn action_url(&self, action: &str) -> String {
        self.api
            .experiment_action(&self.target.user, &self.target.project, self.target.id, action)
    }

    fn spawn<F>(&self, what: &'static str, task: F)
    where
        F: Future<Output = Result<(), String>> + 'static,
    {
        log::debug!("{} experiment {}", what, self.target.id);
        spawn_local(async move {
            if let Err(e) = task.await {
                log::error!("Failed to {} experiment: {}", what, e);
            }
        });
    }

    fn set_bookmarked(&self, action: &'static str, bookmarked: bool) {
        let url = self.action_url(action);
        let experiment = self.signals.experiment;
        self.spawn(action, async move {
            send_empty(Request::post(&url), action).await?;
            experiment.update(|e| {
                if let Some(e) = e {
                    e.bookmarked = bookmarked;
                }
            });
            Ok(())
        });
    }
}

impl ExperimentCommands for ApiCommands {
    fn delete(&self) {
        let url = self.url();
        let deleted = self.signals.deleted;
        self.spawn("delete", async move {
            send_empty(Request::delete(&url), "deleting experiment").await?;
            deleted.set(true);
            Ok(())
        });
    }

    fn stop(&self) {
        let url = self.action_url("stop");
        let this = self.clone();
        self.spawn("stop", async move {
            send_empty(Request::post(&url), "stopping experiment").await?;
            this.fetch_data();
            Ok(())
        });
    }

    fn update(&self, changes: UpdateDict) {
        let url = self.url();
        let experiment = self.signals.experiment;
        self.spawn("update", async move {
            let resp = Request::patch(&url)
                .json(&changes)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;

            if !resp.ok() {
                return Err(format!("Error updating experiment: {}", resp.status()));
            }

            let text = resp.text().await.map_err(|e| e.to_string())?;
            let updated: Experiment = serde_json::from_str(&text).map_err(|e| e.to_string())?;
            experiment.set(Some(updated));
            Ok(())
        });
    }

    fn fetch_data(&self) {
        let url = self.url();
        let experiment = self.signals.experiment;
        self.spawn("fetch", async move {
            let fetched: Experiment = get_json(&url).await?;
            experiment.set(Some(fetched));
            Ok(())
        });
    }

    fn bookmark(&self) {
        self.set_bookmarked("bookmark", true);
    }

    fn unbookmark(&self) {
        self.set_bookmarked("unbookmark", false);
    }

    fn fetch_code_reference(&self) {
        let url = self.action_url("coderef");
        let CodeReferenceStore(store) = self.signals.code_reference;
        spawn_local(async move {
            let result = get_json::<CodeReference>(&url).await;
            if let Err(e) = &result {
                log::error!("Failed to fetch code reference: {}", e);
            }
            store.set(Some(result));
        });
    }
}
