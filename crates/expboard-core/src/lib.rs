//! expboard-core: page model for the expboard experiment dashboard.
//!
//! Nothing here touches the DOM. The front-end feeds an [`Experiment`] into a
//! [`DetailController`] and renders the [`DetailView`] it gets back; the CLI
//! does the same to print a page's structure.

pub mod breadcrumb;
pub mod commands;
pub mod config;
pub mod controller;
pub mod descriptors;
pub mod error;
pub mod ids;
pub mod instructions;
pub mod models;
pub mod tabs;
pub mod urls;

pub use breadcrumb::{breadcrumb_links, BreadcrumbIcon, BreadcrumbLink};
pub use commands::{ExperimentCommands, NoopCommands, SharedCommands, UpdateDict};
pub use config::DashboardConfig;
pub use controller::{DetailController, DetailPage, DetailView, EmptyState};
pub use descriptors::{ActionDescriptor, BookmarkDescriptor};
pub use error::ExpboardError;
pub use ids::{split_unique_name, GroupName, ProjectName};
pub use models::{ChartKind, Experiment, ExperimentStatus};
pub use tabs::{build_tabs, resolve_tab, Tab, TabDef, TabKind, TabPanel, TAB_TABLE};
pub use urls::{ApiRoutes, AppRoutes, ExperimentRef};
