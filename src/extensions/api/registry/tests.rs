use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::*;
use crate::extensions::api::action::{Action, ActionName, Icon};
use crate::extensions::api::context::ActionContext;
use crate::extensions::api::contributions::{ConsolePane, Contribution, Dropdown, DropdownItem, ExtensionPackage};
use crate::extensions::api::descriptors::ExtensionDescriptor;
use crate::extensions::api::error::ExtensionCatalogError;
use crate::tui::theme::Theme;

static TEST_DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
    id: "test",
    title: "Test extension",
    namespace: "test",
};

static ALT_DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
    id: "alt",
    title: "Alternate extension",
    namespace: "alt",
};

fn noop_action(help: &str) -> Action {
    Action::new(help, Icon::new('x', None), |_context| {})
}

fn counting_action(counter: Arc<AtomicUsize>) -> Action {
    Action::new("count invocations", Icon::new('x', None), move |_context| {
        counter.fetch_add(1, Ordering::Relaxed);
    })
}

struct TestPane {
    visible: AtomicBool,
}

impl TestPane {
    fn new() -> Self {
        Self {
            visible: AtomicBool::new(false),
        }
    }
}

impl ConsolePane for TestPane {
    fn visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    fn render(&self, _frame: &mut Frame, _area: Rect, _theme: &Theme) {}

    fn handle_key(&self, _key: KeyEvent) -> bool {
        false
    }
}

#[derive(Clone)]
struct TestBundle {
    contributions: Vec<Contribution>,
}

impl TestBundle {
    fn full(descriptor: &'static ExtensionDescriptor) -> Self {
        let menu = Dropdown::new(
            format!("{}-menu", descriptor.id),
            descriptor.title,
            descriptor.title,
        )
        .with_item(DropdownItem::new("item-one", "One", |_context| {}));
        Self {
            contributions: vec![
                Contribution::dropdown(descriptor, menu),
                Contribution::action(descriptor, "run", noop_action("run the test action")),
                Contribution::console(descriptor, TestPane::new()),
            ],
        }
    }
}

impl ExtensionPackage for TestBundle {
    type Contributions<'a>
        = std::vec::IntoIter<Contribution>
    where
        Self: 'a;

    fn contributions(&self) -> Self::Contributions<'_> {
        self.contributions.clone().into_iter()
    }
}

#[test]
fn registers_actions_in_insertion_order() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_action(&TEST_DESCRIPTOR, "first", noop_action("first"))
        .expect("register first action");
    catalog
        .register_action(&TEST_DESCRIPTOR, "second", noop_action("second"))
        .expect("register second action");
    catalog
        .register_action(&ALT_DESCRIPTOR, "third", noop_action("third"))
        .expect("register third action");

    let names: Vec<String> = catalog
        .actions()
        .map(|registered| registered.name().to_string())
        .collect();
    assert_eq!(names, vec!["test:first", "test:second", "alt:third"]);
}

#[test]
fn duplicate_action_names_are_rejected() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_action(&TEST_DESCRIPTOR, "run", noop_action("run"))
        .expect("register action");

    let err = catalog
        .register_action(&TEST_DESCRIPTOR, "run", noop_action("run again"))
        .expect_err("duplicate registration should fail");
    assert_eq!(
        err,
        ExtensionCatalogError::DuplicateAction {
            name: ActionName::qualified("test", "run"),
        }
    );
}

#[test]
fn same_name_under_different_namespaces_is_allowed() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_action(&TEST_DESCRIPTOR, "run", noop_action("run"))
        .expect("register test action");
    catalog
        .register_action(&ALT_DESCRIPTOR, "run", noop_action("run"))
        .expect("register alt action");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn duplicate_dropdown_ids_are_rejected() {
    let mut catalog = ExtensionCatalog::empty();
    let menu = || Dropdown::new("shared-menu", "Shared", "Shared menu");
    catalog
        .register_package(TestBundle {
            contributions: vec![Contribution::dropdown(&TEST_DESCRIPTOR, menu())],
        })
        .expect("register first dropdown");

    let err = catalog
        .register_package(TestBundle {
            contributions: vec![Contribution::dropdown(&ALT_DESCRIPTOR, menu())],
        })
        .expect_err("duplicate control id should fail");
    assert_eq!(
        err,
        ExtensionCatalogError::DuplicateControl {
            id: "shared-menu".to_string(),
        }
    );
}

#[test]
fn second_console_for_same_extension_is_rejected() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_package(TestBundle {
            contributions: vec![Contribution::console(&TEST_DESCRIPTOR, TestPane::new())],
        })
        .expect("register console pane");

    let err = catalog
        .register_package(TestBundle {
            contributions: vec![Contribution::console(&TEST_DESCRIPTOR, TestPane::new())],
        })
        .expect_err("duplicate console should fail");
    assert_eq!(
        err,
        ExtensionCatalogError::DuplicateConsole { id: "test" }
    );
}

#[test]
fn invoke_runs_the_registered_handler() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_action(&TEST_DESCRIPTOR, "count", counting_action(Arc::clone(&counter)))
        .expect("register counting action");

    let mut cells = Vec::new();
    let mut context = ActionContext::new(&mut cells);
    catalog
        .invoke(&ActionName::qualified("test", "count"), &mut context)
        .expect("invoke counting action");
    assert_eq!(counter.load(Ordering::Relaxed), 1);
}

#[test]
fn invoking_an_unknown_name_fails() {
    let catalog = ExtensionCatalog::empty();
    let mut cells = Vec::new();
    let mut context = ActionContext::new(&mut cells);

    let missing = ActionName::qualified("test", "missing");
    let err = catalog
        .invoke(&missing, &mut context)
        .expect_err("unknown action should fail");
    assert_eq!(err, ExtensionCatalogError::UnknownAction { name: missing });
}

#[test]
fn package_install_stops_at_first_failure() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_action(&TEST_DESCRIPTOR, "run", noop_action("run"))
        .expect("register action");

    let package = TestBundle {
        contributions: vec![
            Contribution::action(&TEST_DESCRIPTOR, "run", noop_action("duplicate")),
            Contribution::action(&TEST_DESCRIPTOR, "never", noop_action("never installed")),
        ],
    };
    assert!(catalog.register_package(package).is_err());
    assert!(
        catalog
            .action(&ActionName::qualified("test", "never"))
            .is_none()
    );
}

#[test]
fn register_package_installs_every_contribution_kind() {
    let mut catalog = ExtensionCatalog::new();
    catalog
        .register_package(TestBundle::full(&TEST_DESCRIPTOR))
        .expect("register full package");

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.dropdown_count(), 1);
    assert_eq!(catalog.console_panes().count(), 1);
    assert!(
        catalog
            .action(&ActionName::qualified("test", "run"))
            .is_some()
    );

    let dropdown = catalog.dropdowns().next().expect("dropdown registered");
    assert_eq!(dropdown.descriptor().id, "test");
    assert_eq!(dropdown.control().id(), "test-menu");
    assert_eq!(dropdown.control().items().len(), 1);
}

#[test]
fn remove_extension_sweeps_every_store() {
    let mut catalog = ExtensionCatalog::empty();
    catalog
        .register_package(TestBundle::full(&TEST_DESCRIPTOR))
        .expect("register test package");
    catalog
        .register_action(&ALT_DESCRIPTOR, "keep", noop_action("keep"))
        .expect("register alt action");

    let removed = catalog.remove_extension("test");
    assert_eq!(removed, 3);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.dropdown_count(), 0);
    assert_eq!(catalog.console_panes().count(), 0);
    assert!(
        catalog
            .action(&ActionName::qualified("alt", "keep"))
            .is_some()
    );

    assert_eq!(catalog.remove_extension("test"), 0);
}
