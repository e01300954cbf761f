//! Integration tests for expboard-core.

use std::sync::{Arc, Mutex};

use expboard_core::{
    AppRoutes, BreadcrumbLink, DetailController, DetailView, Experiment, ExperimentCommands,
    ExperimentStatus, TabPanel, UpdateDict,
};

#[derive(Default)]
struct RecordingCommands {
    calls: Mutex<Vec<String>>,
}

impl RecordingCommands {
    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ExperimentCommands for RecordingCommands {
    fn delete(&self) {
        self.record("delete");
    }
    fn stop(&self) {
        self.record("stop");
    }
    fn update(&self, changes: UpdateDict) {
        self.record(&format!("update:{}", serde_json::Value::Object(changes)));
    }
    fn fetch_data(&self) {
        self.record("fetch_data");
    }
    fn bookmark(&self) {
        self.record("bookmark");
    }
    fn unbookmark(&self) {
        self.record("unbookmark");
    }
    fn fetch_code_reference(&self) {
        self.record("fetch_code_reference");
    }
}

fn make_controller() -> (Arc<RecordingCommands>, DetailController) {
    let commands = Arc::new(RecordingCommands::default());
    let controller = DetailController::new(AppRoutes::default(), commands.clone());
    (commands, controller)
}

fn alice_experiment(group: Option<&str>) -> Experiment {
    Experiment {
        id: 42,
        unique_name: "alice.proj1.42".to_string(),
        user: "alice".to_string(),
        project: "alice.proj1".to_string(),
        experiment_group: group.map(str::to_string),
        last_status: ExperimentStatus::Running,
        bookmarked: true,
        ..Default::default()
    }
}

fn page(view: DetailView) -> Box<expboard_core::DetailPage> {
    match view {
        DetailView::Page(page) => page,
        DetailView::Empty(_) => panic!("expected a detail page"),
    }
}

#[test]
fn test_absent_experiment_renders_empty_state_without_callbacks() {
    let (commands, controller) = make_controller();
    for _ in 0..3 {
        let view = controller.render(None).unwrap();
        assert!(matches!(view, DetailView::Empty(_)));
    }
    assert!(commands.calls().is_empty(), "render must not invoke commands");
}

#[test]
fn test_mount_fetches_exactly_once() {
    let (commands, controller) = make_controller();
    assert!(controller.mount());
    let exp = alice_experiment(None);
    for _ in 0..5 {
        controller.render(Some(&exp)).unwrap();
        assert!(!controller.mount());
    }
    assert_eq!(commands.calls(), vec!["fetch_data"]);
}

#[test]
fn test_breadcrumb_without_group() {
    let (_, controller) = make_controller();
    let page = page(controller.render(Some(&alice_experiment(None))).unwrap());
    let routes = AppRoutes::default();
    assert_eq!(
        page.breadcrumb,
        vec![
            BreadcrumbLink::link("alice", routes.user_url("alice")),
            BreadcrumbLink::link("proj1", routes.project_url("alice", "proj1")),
            BreadcrumbLink::link(
                "Experiments",
                format!("{}#experiments", routes.project_url("alice", "proj1"))
            ),
            BreadcrumbLink::leaf("Experiment 42"),
        ]
    );
}

#[test]
fn test_breadcrumb_with_group() {
    let (_, controller) = make_controller();
    let page = page(
        controller
            .render(Some(&alice_experiment(Some("alice.proj1.7"))))
            .unwrap(),
    );
    let routes = AppRoutes::default();
    let group_url = routes.group_url("alice", "proj1", 7);
    assert_eq!(
        page.breadcrumb,
        vec![
            BreadcrumbLink::link("alice", routes.user_url("alice")),
            BreadcrumbLink::link("proj1", routes.project_url("alice", "proj1")),
            BreadcrumbLink::link("Group 7", group_url.clone()),
            BreadcrumbLink::link("Experiments", format!("{}#experiments", group_url)),
            BreadcrumbLink::leaf("Experiment 42"),
        ]
    );
}

#[test]
fn test_ten_tabs_with_overview_at_base_url() {
    let (_, controller) = make_controller();
    for group in [None, Some("alice.proj1.7")] {
        let page = page(controller.render(Some(&alice_experiment(group))).unwrap());
        assert_eq!(page.tabs.len(), 10);
        assert_eq!(page.tabs[0].title, "Overview");
        assert_eq!(page.tabs[0].rel_url, "");
        assert!(matches!(page.tabs[0].panel, TabPanel::Overview { .. }));
        assert_eq!(page.tabs[9].title, "Instructions");
    }
}

#[test]
fn test_render_is_stable() {
    let (commands, controller) = make_controller();
    let exp = alice_experiment(Some("alice.proj1.7"));
    let first = controller.render(Some(&exp)).unwrap();
    let second = controller.render(Some(&exp)).unwrap();
    assert_eq!(first, second);
    assert!(commands.calls().is_empty());
}

#[test]
fn test_descriptors_drive_commands() {
    let (commands, controller) = make_controller();
    let page = page(controller.render(Some(&alice_experiment(None))).unwrap());

    assert!(page.actions.can_stop());
    assert!(page.bookmark.active);
    page.bookmark.toggle();
    page.actions.stop();
    page.actions.delete();

    let mut changes = UpdateDict::new();
    changes.insert("description".into(), "tuned lr".into());
    controller.commands().update(changes);

    assert_eq!(
        commands.calls(),
        vec!["unbookmark", "stop", "delete", r#"update:{"description":"tuned lr"}"#]
    );
}

#[test]
fn test_experiment_from_api_json() {
    let json = r#"{
        "id": 42,
        "unique_name": "alice.proj1.7.42",
        "user": "alice",
        "project": "alice.proj1",
        "experiment_group": "alice.proj1.7",
        "last_status": "succeeded",
        "bookmarked": false,
        "build_job": "alice.proj1.builds.3",
        "config": {"version": 1, "run": {"cmd": "python train.py"}},
        "last_metric": {"loss": 0.12, "accuracy": 0.97}
    }"#;
    let exp: Experiment = serde_json::from_str(json).unwrap();
    let (_, controller) = make_controller();
    let page = page(controller.render(Some(&exp)).unwrap());

    assert!(!page.actions.can_stop());
    assert_eq!(page.breadcrumb[2].name, "Group 7");
    match &page.tabs[5].panel {
        TabPanel::Build { build_name } => {
            assert_eq!(build_name.as_deref(), Some("alice.proj1.builds.3"))
        }
        other => panic!("unexpected panel {:?}", other),
    }
}
