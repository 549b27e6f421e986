use log::{debug, info};

use crate::extensions::api::contributions::{Dropdown, DropdownItem};
use crate::extensions::api::{
    Action, ActionContext, ActionName, Contribution, ExtensionDescriptor, ExtensionPackage, Icon,
};
use crate::notebook::{Cell, Transition};

/// Prefix under which the switch actions are registered.
pub const NAMESPACE: &str = "language-switcher";

pub static LANGUAGE_SWITCHER_DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
    id: "language-switcher",
    title: "Language switcher",
    namespace: NAMESPACE,
};

pub fn descriptor() -> &'static ExtensionDescriptor {
    &LANGUAGE_SWITCHER_DESCRIPTOR
}

/// One switchable language: the menu label, the action name registered under
/// [`NAMESPACE`], and the tag value handed to the toggler.
///
/// Menu entries and actions are generated from the same row, so the two
/// activation paths cannot drift apart in label, name, or argument.
struct LanguageEntry {
    display_label: &'static str,
    action_id: &'static str,
    language: &'static str,
}

static LANGUAGES: [LanguageEntry; 2] = [
    LanguageEntry {
        display_label: "English",
        action_id: "switch-lang-english",
        language: "english",
    },
    LanguageEntry {
        display_label: "Deutsch",
        action_id: "switch-lang-deutsch",
        language: "deutsch",
    },
];

/// Qualified name of the English switch action.
#[must_use]
pub fn english_action() -> ActionName {
    ActionName::qualified(NAMESPACE, LANGUAGES[0].action_id)
}

/// Qualified name of the Deutsch switch action.
#[must_use]
pub fn deutsch_action() -> ActionName {
    ActionName::qualified(NAMESPACE, LANGUAGES[1].action_id)
}

/// Reveal every cell tagged with `language` and collapse tagged cells that
/// lack it.
///
/// The requested language is lowercased before comparison while tags are
/// matched verbatim, so a cell tagged `English` never matches. Cells without
/// a `tags` sequence keep their current visibility.
pub fn show_selected_language(cells: &mut [Cell], language: &str) {
    let language = language.to_lowercase();
    debug!("switching visible language to '{language}'");
    for cell in cells {
        let Some(tags) = cell.metadata.tags.as_deref() else {
            continue;
        };
        if tags.iter().any(|tag| *tag == language) {
            cell.presentation.show(Transition::Slow);
        } else {
            cell.presentation.hide(Transition::Slow);
        }
    }
}

fn switch_icon() -> Icon {
    Icon::from_hex('\u{f1ab}', "#7aa2f7")
}

fn switch_handler(
    language: &'static str,
) -> impl Fn(&mut ActionContext<'_>) + Send + Sync + 'static {
    move |context| show_selected_language(context.cells_mut(), language)
}

fn switch_action(entry: &LanguageEntry) -> Action {
    Action::new(
        format!("Switch language to {}", entry.display_label),
        switch_icon(),
        switch_handler(entry.language),
    )
}

pub struct LanguageSwitcherPackage {
    contributions: [Contribution; 3],
}

impl LanguageSwitcherPackage {
    fn new() -> Self {
        let mut menu = Dropdown::new("lang-menu", "Language", "Switch Language");
        for entry in &LANGUAGES {
            menu = menu.with_item(
                DropdownItem::new(
                    entry.action_id,
                    entry.display_label,
                    switch_handler(entry.language),
                )
                .with_icon(switch_icon()),
            );
        }

        let contributions = [
            Contribution::dropdown(descriptor(), menu),
            Contribution::action(descriptor(), LANGUAGES[0].action_id, switch_action(&LANGUAGES[0])),
            Contribution::action(descriptor(), LANGUAGES[1].action_id, switch_action(&LANGUAGES[1])),
        ];
        Self { contributions }
    }
}

impl Default for LanguageSwitcherPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionPackage for LanguageSwitcherPackage {
    type Contributions<'a>
        = std::array::IntoIter<Contribution, 3>
    where
        Self: 'a;

    fn contributions(&self) -> Self::Contributions<'_> {
        self.contributions.clone().into_iter()
    }
}

#[must_use]
pub fn bundle() -> LanguageSwitcherPackage {
    info!("language switcher ready");
    LanguageSwitcherPackage::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::api::ExtensionCatalog;
    use crate::notebook::Visibility;

    fn tagged(tags: &[&str]) -> Cell {
        Cell::markdown("body").with_tags(tags.iter().copied())
    }

    fn untagged() -> Cell {
        Cell::markdown("body")
    }

    fn visibilities(cells: &[Cell]) -> Vec<Visibility> {
        cells
            .iter()
            .map(|cell| cell.presentation.visibility())
            .collect()
    }

    #[test]
    fn cells_tagged_with_the_language_are_shown() {
        let mut cells = vec![tagged(&["english"])];
        cells[0].presentation.hide(Transition::Immediate);

        show_selected_language(&mut cells, "english");
        assert_eq!(visibilities(&cells), vec![Visibility::Visible]);
    }

    #[test]
    fn tagged_cells_without_the_language_are_hidden() {
        let mut cells = vec![tagged(&["deutsch"]), tagged(&[])];
        show_selected_language(&mut cells, "english");
        assert_eq!(
            visibilities(&cells),
            vec![Visibility::Hidden, Visibility::Hidden]
        );
    }

    #[test]
    fn untagged_cells_keep_their_visibility() {
        let mut cells = vec![untagged(), untagged()];
        cells[1].presentation.hide(Transition::Immediate);

        show_selected_language(&mut cells, "english");
        assert_eq!(
            visibilities(&cells),
            vec![Visibility::Visible, Visibility::Hidden]
        );
    }

    #[test]
    fn requested_language_is_lowercased_but_tags_match_verbatim() {
        let mut cells = vec![tagged(&["english"]), tagged(&["English"])];
        show_selected_language(&mut cells, "English");
        assert_eq!(
            visibilities(&cells),
            vec![Visibility::Visible, Visibility::Hidden]
        );
    }

    #[test]
    fn repeating_a_toggle_changes_nothing() {
        let mut cells = vec![tagged(&["english"]), tagged(&["deutsch"]), untagged()];
        show_selected_language(&mut cells, "deutsch");
        let first_pass = visibilities(&cells);

        show_selected_language(&mut cells, "deutsch");
        assert_eq!(visibilities(&cells), first_pass);
    }

    #[test]
    fn mixed_notebook_splits_into_shown_hidden_and_untouched() {
        let mut cells = vec![tagged(&["english"]), tagged(&["deutsch"]), untagged()];
        show_selected_language(&mut cells, "english");
        assert_eq!(
            visibilities(&cells),
            vec![Visibility::Visible, Visibility::Hidden, Visibility::Visible]
        );
    }

    #[test]
    fn multi_tagged_cells_match_any_entry() {
        let mut cells = vec![tagged(&["intro", "deutsch"])];
        show_selected_language(&mut cells, "deutsch");
        assert_eq!(visibilities(&cells), vec![Visibility::Visible]);
    }

    #[test]
    fn menu_and_action_paths_produce_identical_visibility() {
        let mut catalog = ExtensionCatalog::empty();
        catalog
            .register_package(bundle())
            .expect("register language switcher");

        let notebook =
            || vec![tagged(&["english"]), tagged(&["deutsch"]), untagged()];

        let mut via_action = notebook();
        let mut context = ActionContext::new(&mut via_action);
        catalog
            .invoke(&deutsch_action(), &mut context)
            .expect("invoke deutsch action");

        let mut via_menu = notebook();
        let dropdown = catalog.dropdown("lang-menu").expect("dropdown registered");
        let item = dropdown
            .control()
            .items()
            .iter()
            .find(|item| item.id() == "switch-lang-deutsch")
            .expect("deutsch menu entry");
        let mut context = ActionContext::new(&mut via_menu);
        item.activate(&mut context);

        assert_eq!(visibilities(&via_action), visibilities(&via_menu));
        assert_eq!(
            visibilities(&via_action),
            vec![Visibility::Hidden, Visibility::Visible, Visibility::Visible]
        );
    }

    #[test]
    fn dropdown_matches_the_language_table() {
        let mut catalog = ExtensionCatalog::empty();
        catalog
            .register_package(bundle())
            .expect("register language switcher");

        let dropdown = catalog.dropdowns().next().expect("dropdown registered");
        assert_eq!(dropdown.control().id(), "lang-menu");
        assert_eq!(dropdown.control().button_label(), "Language");
        assert_eq!(dropdown.control().title(), "Switch Language");

        let labels: Vec<&str> = dropdown
            .control()
            .items()
            .iter()
            .map(|item| item.label())
            .collect();
        assert_eq!(labels, vec!["English", "Deutsch"]);
    }

    #[test]
    fn help_text_is_derived_from_the_display_label() {
        let mut catalog = ExtensionCatalog::empty();
        catalog
            .register_package(bundle())
            .expect("register language switcher");

        let help_for = |name: &ActionName| {
            catalog
                .action(name)
                .expect("action registered")
                .action()
                .help()
                .to_string()
        };
        assert_eq!(help_for(&english_action()), "Switch language to English");
        assert_eq!(help_for(&deutsch_action()), "Switch language to Deutsch");
    }

    #[test]
    fn both_actions_share_the_switch_glyph() {
        let mut catalog = ExtensionCatalog::empty();
        catalog
            .register_package(bundle())
            .expect("register language switcher");

        let glyph_for = |name: &ActionName| {
            catalog
                .action(name)
                .expect("action registered")
                .action()
                .icon()
                .glyph()
        };
        assert_eq!(glyph_for(&english_action()), glyph_for(&deutsch_action()));
    }
}
