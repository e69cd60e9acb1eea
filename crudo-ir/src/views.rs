//! Resolved view settings.
//!
//! Raw schemas leave most of the view block optional and allow `details` to
//! be a bare boolean. Normalization collapses all of that into the closed
//! shapes below so templates can match instead of re-checking string tags.

use serde::Serialize;

/// How a details or create/edit surface is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewKind {
    /// Dedicated routed page.
    Page,
    /// Overlay on top of the list view.
    Modal {
        style: ModalStyle,
    },
    /// Surface is not generated at all.
    Disabled,
}

impl ViewKind {
    /// Returns true if this view is a routed page.
    pub fn is_page(&self) -> bool {
        matches!(self, ViewKind::Page)
    }

    /// Returns true if this view is any kind of modal overlay.
    pub fn is_modal(&self) -> bool {
        matches!(self, ViewKind::Modal { .. })
    }

    /// Returns true if this view is a drawer-style modal.
    pub fn is_drawer(&self) -> bool {
        matches!(
            self,
            ViewKind::Modal {
                style: ModalStyle::Drawer
            }
        )
    }

    /// Returns true if the surface should be generated.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, ViewKind::Disabled)
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Page => "page",
            ViewKind::Modal { .. } => "modal",
            ViewKind::Disabled => "disabled",
        }
    }
}

/// Modal presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalStyle {
    /// Side panel sliding in from the edge.
    Drawer,
    /// Centered dialog.
    Dialog,
}

impl ModalStyle {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalStyle::Drawer => "drawer",
            ModalStyle::Dialog => "dialog",
        }
    }
}

/// List presentation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Table,
    Grid,
    Both,
}

impl ListKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Table => "table",
            ListKind::Grid => "grid",
            ListKind::Both => "both",
        }
    }
}

/// Resolved list view settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    /// Which presentations are available.
    pub kind: ListKind,
    /// Presentation shown first when both are available.
    pub default_view: ListKind,
    /// Component name used for the grid presentation.
    pub grid_component: Option<String>,
}

impl ListView {
    /// Returns true if a grid presentation is generated.
    pub fn has_grid(&self) -> bool {
        matches!(self.kind, ListKind::Grid | ListKind::Both)
    }

    /// Returns true if a table presentation is generated.
    pub fn has_table(&self) -> bool {
        matches!(self.kind, ListKind::Table | ListKind::Both)
    }
}

/// The complete resolved view block of an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPlan {
    /// List surface (always present).
    pub list: ListView,
    /// Details surface.
    pub details: ViewKind,
    /// Create/edit surface (never `Disabled`; validation rejects that).
    pub mutation: ViewKind,
}
