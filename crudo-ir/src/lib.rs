//! Canonical template data types for the crudo generator.
//!
//! This crate provides the unified type definitions shared between schema
//! normalization and code generation. These types are the single source of
//! truth for what templates are allowed to see.
//!
//! # Architecture
//!
//! ```text
//! entity JSON → crudo-schema (parsing) → crudo-ir (canonical data) → codegen
//! ```
//!
//! The canonical types are designed to be:
//! - Fully resolved (no optional view or UI settings left for templates to
//!   re-default)
//! - Order-preserving (fields appear exactly as declared in the schema)
//! - Self-contained (serde derives only, no generator concerns)

mod entity;
mod field;
mod views;

pub use entity::{ApiShape, CanonicalEntity, ComponentNames, FormLayout, PaginationPlan};
pub use field::{
    CanonicalField, ClauseKind, ClauseParam, FormControl, FormWidget, RelationTarget, SelectOption,
    SemanticType, TableColumn, ValidationClause,
};
pub use views::{ListKind, ListView, ModalStyle, ViewKind, ViewPlan};
