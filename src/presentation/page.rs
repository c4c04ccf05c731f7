// SPDX-License-Identifier: MPL-2.0

//! In-memory page model.

use std::collections::{BTreeMap, BTreeSet};

use crate::a11y::focus::{ElementId, ElementKind, FocusCandidate, FocusScope};

use super::PresentationSink;

/// A document stand-in for tests and headless hosts.
///
/// Body classes, root attributes, and focus state live in plain
/// collections, so every presentation effect can be asserted directly.
/// The model implements both [`PresentationSink`] (appliers write to it)
/// and [`FocusScope`] (focus traps read from it).
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    body_classes: BTreeSet<String>,
    root_attributes: BTreeMap<String, String>,
    root_font_size: Option<f32>,
    elements: Vec<PageElement>,
    focused: Option<ElementId>,
    next_element_id: u64,
}

#[derive(Debug, Clone)]
struct PageElement {
    id: ElementId,
    kind: ElementKind,
    disabled: bool,
    tab_index: Option<i32>,
    label: String,
}

impl PageModel {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element in document order and returns its ID.
    pub fn insert(&mut self, kind: ElementKind, label: impl Into<String>) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        self.elements.push(PageElement {
            id,
            kind,
            disabled: false,
            tab_index: None,
            label: label.into(),
        });
        id
    }

    /// Marks an element as disabled or enabled.
    pub fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(element) = self.element_mut(id) {
            element.disabled = disabled;
        }
    }

    /// Sets or clears an element's explicit tab index.
    pub fn set_tab_index(&mut self, id: ElementId, tab_index: Option<i32>) {
        if let Some(element) = self.element_mut(id) {
            element.tab_index = tab_index;
        }
    }

    /// Returns the label of an element, if it exists.
    #[must_use]
    pub fn label(&self, id: ElementId) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.label.as_str())
    }

    /// Returns whether the body carries `class`.
    #[must_use]
    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// Returns the body classes, sorted.
    #[must_use]
    pub fn body_classes(&self) -> Vec<String> {
        self.body_classes.iter().cloned().collect()
    }

    /// Returns a root attribute value.
    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    /// Returns the root font size percentage, if one was applied.
    #[must_use]
    pub fn root_font_size(&self) -> Option<f32> {
        self.root_font_size
    }

    /// Returns the root's inline style, if a font size was applied.
    #[must_use]
    pub fn root_style(&self) -> Option<String> {
        self.root_font_size.map(|size| format!("font-size: {size}%"))
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|element| element.id == id)
    }
}

impl PresentationSink for PageModel {
    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_string(), value.to_string());
    }

    fn set_root_font_size(&mut self, percent: f32) {
        self.root_font_size = Some(percent);
    }
}

impl FocusScope for PageModel {
    fn candidates(&self) -> Vec<FocusCandidate> {
        self.elements
            .iter()
            .map(|element| FocusCandidate {
                id: element.id,
                kind: element.kind,
                disabled: element.disabled,
                tab_index: element.tab_index,
            })
            .collect()
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    fn focus(&mut self, id: ElementId) {
        // Focusing an unknown ID is ignored, like focus() on a detached node.
        if self.elements.iter().any(|element| element.id == id) {
            self.focused = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_unique_ids_in_document_order() {
        let mut page = PageModel::new();
        let first = page.insert(ElementKind::Link, "home");
        let second = page.insert(ElementKind::Button, "save");

        assert_ne!(first, second);
        let candidates = page.candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, first);
        assert_eq!(candidates[1].id, second);
    }

    #[test]
    fn focus_only_lands_on_existing_elements() {
        let mut page = PageModel::new();
        let button = page.insert(ElementKind::Button, "save");

        page.focus(ElementId(999));
        assert_eq!(page.focused(), None);

        page.focus(button);
        assert_eq!(page.focused(), Some(button));
        assert_eq!(page.label(button), Some("save"));
    }

    #[test]
    fn sink_calls_mutate_the_model() {
        let mut page = PageModel::new();

        page.add_body_class("theme-dark");
        page.add_body_class("theme-dark");
        assert_eq!(page.body_classes(), vec!["theme-dark".to_string()]);

        page.remove_body_class("theme-dark");
        assert!(!page.has_body_class("theme-dark"));

        page.set_root_attribute("lang", "kr");
        assert_eq!(page.root_attribute("lang"), Some("kr"));

        page.set_root_font_size(112.5);
        assert_eq!(page.root_font_size(), Some(112.5));
        assert_eq!(page.root_style().as_deref(), Some("font-size: 112.5%"));
    }

    #[test]
    fn element_flags_are_mutable() {
        let mut page = PageModel::new();
        let field = page.insert(ElementKind::TextInput, "search");

        page.set_disabled(field, true);
        page.set_tab_index(field, Some(-1));

        let candidate = &page.candidates()[0];
        assert!(candidate.disabled);
        assert_eq!(candidate.tab_index, Some(-1));
    }
}
