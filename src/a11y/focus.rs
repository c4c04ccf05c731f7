// SPDX-License-Identifier: MPL-2.0

//! Keyboard focus containment.
//!
//! Modal surfaces keep Tab cycling inside themselves: pressing Tab on the
//! last focusable element wraps to the first, Shift+Tab on the first wraps
//! to the last, and everything in between is left to the host's normal
//! focus handling.

/// Host-assigned element identifier, unique within one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// What a focus candidate is.
///
/// The interactive kinds mirror the tag whitelist used when scanning a
/// container for focusable elements; anything else only qualifies through
/// an explicit tab index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Anchor with a destination.
    Link,
    /// Push button.
    Button,
    /// Multi-line text input.
    TextArea,
    /// Single-line text input.
    TextInput,
    /// Radio button.
    RadioInput,
    /// Checkbox.
    CheckboxInput,
    /// Drop-down select.
    Select,
    /// Any other element.
    Other,
}

/// One element considered for focus, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusCandidate {
    /// Scope-unique identifier.
    pub id: ElementId,
    /// Element kind.
    pub kind: ElementKind,
    /// Whether the element is disabled.
    pub disabled: bool,
    /// Explicit tab index, if any.
    pub tab_index: Option<i32>,
}

impl FocusCandidate {
    /// Whether this candidate receives keyboard focus.
    ///
    /// Interactive kinds qualify unless disabled. Any element, disabled
    /// or not, also qualifies through an explicit tab index other than
    /// -1; the two rules are a union, not a chain.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        let tab_indexed = matches!(self.tab_index, Some(index) if index != -1);
        let interactive = !matches!(self.kind, ElementKind::Other);
        (interactive && !self.disabled) || tab_indexed
    }
}

/// A container whose elements can be trapped.
pub trait FocusScope {
    /// All candidates in document order, focusable or not.
    fn candidates(&self) -> Vec<FocusCandidate>;

    /// The currently focused element, if any.
    fn focused(&self) -> Option<ElementId>;

    /// Moves focus to `id`.
    fn focus(&mut self, id: ElementId);
}

/// Direction of a Tab key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Tab.
    Forward,
    /// Shift+Tab.
    Backward,
}

/// What the trap did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Focus wrapped to the opposite end; the host must consume the event.
    Wrapped,
    /// The trap did not act; normal focus handling proceeds.
    PassedThrough,
}

/// Keyboard trap over a snapshot of a scope's focusable elements.
///
/// The snapshot is taken at construction; elements added or removed
/// afterwards are not seen, so rebuild the trap after structural changes.
/// A trap over a scope with no focusable elements never acts.
#[derive(Debug)]
pub struct FocusTrap {
    focusables: Vec<ElementId>,
    released: bool,
}

impl FocusTrap {
    /// Snapshots `scope` and builds a trap over its focusable elements.
    #[must_use]
    pub fn new(scope: &dyn FocusScope) -> Self {
        let focusables = scope
            .candidates()
            .iter()
            .filter(|candidate| candidate.is_focusable())
            .map(|candidate| candidate.id)
            .collect();
        Self {
            focusables,
            released: false,
        }
    }

    /// Whether the trap can still wrap focus.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.released && !self.focusables.is_empty()
    }

    /// Offers a Tab press to the trap.
    ///
    /// Wraps only at the boundary: Forward on the last focusable element
    /// moves to the first, Backward on the first moves to the last. With
    /// focus anywhere else, or after release, the event passes through.
    pub fn handle_key(&self, scope: &mut dyn FocusScope, direction: FocusDirection) -> TrapOutcome {
        if !self.is_active() {
            return TrapOutcome::PassedThrough;
        }
        let Some(&first) = self.focusables.first() else {
            return TrapOutcome::PassedThrough;
        };
        let Some(&last) = self.focusables.last() else {
            return TrapOutcome::PassedThrough;
        };

        match direction {
            FocusDirection::Forward if scope.focused() == Some(last) => {
                scope.focus(first);
                TrapOutcome::Wrapped
            }
            FocusDirection::Backward if scope.focused() == Some(first) => {
                scope.focus(last);
                TrapOutcome::Wrapped
            }
            _ => TrapOutcome::PassedThrough,
        }
    }

    /// Stops trapping. Safe to call more than once.
    pub fn release(&mut self) {
        self.released = true;
    }
}
