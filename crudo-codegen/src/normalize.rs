//! Schema normalization.
//!
//! [`normalize`] turns a validated [`EntitySchema`] plus a [`ProjectConfig`]
//! into the canonical entity every template consumes. All defaulting lives
//! here: view fallbacks, pagination, tenant scoping, per-field widget and
//! column resolution, and the Yup clause chain. The function is pure and
//! deterministic, so regenerating with identical inputs yields identical
//! output.

use crudo_ir::{
    ApiShape, CanonicalEntity, CanonicalField, ClauseKind, ClauseParam, ComponentNames,
    FormControl, FormLayout, FormWidget, ListKind, ListView, ModalStyle, PaginationPlan,
    RelationTarget, SelectOption, TableColumn, ValidationClause, ViewKind, ViewPlan,
};
use crudo_schema::{
    DetailsSpec, EntitySchema, FieldSchema, FieldType, FormComponent, FormLayoutConfig, FormUi,
    ListType, ModalType, ProjectConfig, SurfaceSpec, SurfaceType, ValidationSpec, ValidationType,
    Views,
};

/// Resolve every default and derivation for one entity.
///
/// The schema must already have passed [`EntitySchema::validate`]; this
/// function applies defaults but does not re-check structural rules.
pub fn normalize(schema: &EntitySchema, config: &ProjectConfig) -> CanonicalEntity {
    CanonicalEntity {
        name: schema.entity.clone(),
        plural: schema.plural.clone(),
        route: schema.route.clone(),
        api_endpoint: schema.api_endpoint.clone(),
        tenant_scoped: schema
            .tenant_scoped
            .unwrap_or(config.defaults.tenant_scoped),
        pagination: resolve_pagination(schema),
        views: resolve_views(schema.views.as_ref(), config),
        fields: schema.fields.iter().map(normalize_field).collect(),
        api: ApiShape {
            data_field: config.api.response_shape.data_field.clone(),
            status_field: config.api.response_shape.status_field.clone(),
            message_field: config.api.response_shape.message_field.clone(),
            meta_field: config.api.response_shape.meta_field.clone(),
        },
        components: ComponentNames {
            table_component: config.components.table_component.clone(),
            grid_component: config.components.grid_component.clone(),
            form_layout: match config.components.form_layout {
                FormLayoutConfig::Vertical => FormLayout::Vertical,
                FormLayoutConfig::Horizontal => FormLayout::Horizontal,
                FormLayoutConfig::Grid => FormLayout::Grid,
            },
        },
    }
}

fn resolve_pagination(schema: &EntitySchema) -> PaginationPlan {
    match &schema.pagination {
        Some(p) => PaginationPlan {
            default_page_size: p.default_page_size,
            page_size_options: p.page_size_options.clone(),
        },
        None => PaginationPlan {
            default_page_size: 20,
            page_size_options: vec![10, 20, 50, 100],
        },
    }
}

/// Resolve the view block.
///
/// An absent block gets a fixed fallback as a whole (table list, dialog
/// details, dialog create/edit). A present block is honored as-is; the
/// fallback is never merged into it key by key.
fn resolve_views(views: Option<&Views>, config: &ProjectConfig) -> ViewPlan {
    let Some(views) = views else {
        return ViewPlan {
            list: ListView {
                kind: ListKind::Table,
                default_view: ListKind::Table,
                grid_component: None,
            },
            details: ViewKind::Modal {
                style: ModalStyle::Dialog,
            },
            mutation: ViewKind::Modal {
                style: ModalStyle::Dialog,
            },
        };
    };

    let kind = list_kind(views.list.ty);
    let default_view = match views.list.default_view {
        Some(ty) => list_kind(ty),
        None if kind == ListKind::Grid => ListKind::Grid,
        None => ListKind::Table,
    };
    let grid_component = match kind {
        ListKind::Grid | ListKind::Both => Some(
            views
                .list
                .grid_component
                .clone()
                .unwrap_or_else(|| config.components.grid_component.clone()),
        ),
        ListKind::Table => None,
    };

    ViewPlan {
        list: ListView {
            kind,
            default_view,
            grid_component,
        },
        details: details_kind(&views.details),
        mutation: mutation_kind(&views.mutation),
    }
}

fn list_kind(ty: ListType) -> ListKind {
    match ty {
        ListType::Table => ListKind::Table,
        ListType::Grid => ListKind::Grid,
        ListType::Both => ListKind::Both,
    }
}

fn details_kind(spec: &DetailsSpec) -> ViewKind {
    match spec {
        DetailsSpec::Toggle(false) => ViewKind::Disabled,
        DetailsSpec::Toggle(true) => ViewKind::Modal {
            style: ModalStyle::Dialog,
        },
        DetailsSpec::View(surface) => surface_kind(surface),
    }
}

fn mutation_kind(spec: &DetailsSpec) -> ViewKind {
    match spec {
        // Validation rejects a boolean create/edit before normalization
        // runs; map to the documented default so this stays total.
        DetailsSpec::Toggle(_) => ViewKind::Modal {
            style: ModalStyle::Dialog,
        },
        DetailsSpec::View(surface) => surface_kind(surface),
    }
}

fn surface_kind(surface: &SurfaceSpec) -> ViewKind {
    match surface.ty {
        SurfaceType::Page => ViewKind::Page,
        SurfaceType::Modal => ViewKind::Modal {
            style: match surface.modal_type {
                Some(ModalType::Drawer) => ModalStyle::Drawer,
                _ => ModalStyle::Dialog,
            },
        },
    }
}

fn normalize_field(field: &FieldSchema) -> CanonicalField {
    let semantic_type = semantic_type(field.ty);
    let form_ui = field.ui.as_ref().and_then(|ui| ui.form.as_ref());
    let table_ui = field.ui.as_ref().and_then(|ui| ui.table.as_ref());

    let label = form_ui
        .and_then(|f| f.label.clone())
        .unwrap_or_else(|| field.name.clone());
    let required = field.validation.as_ref().is_some_and(|v| v.required);

    // A field named `id` never appears in forms or tables, no matter what
    // the ui block says.
    let include_in_form = field.name != "id"
        && field.ty != FieldType::Computed
        && !form_ui.is_some_and(|f| f.exclude);
    let include_in_table = field.name != "id"
        && table_ui.and_then(|t| t.visible) != Some(false)
        && !table_ui.is_some_and(|t| t.exclude);

    let options = form_ui
        .map(|f| {
            f.options
                .iter()
                .map(|o| SelectOption {
                    label: o.label.clone(),
                    value: o.value.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    CanonicalField {
        name: field.name.clone(),
        semantic_type,
        default_literal: semantic_type.default_literal().to_string(),
        required,
        clauses: build_clauses(field.validation.as_ref(), &label),
        include_in_form,
        include_in_table,
        form: FormControl {
            widget: resolve_widget(field, form_ui),
            input_type: form_ui.and_then(|f| f.input_type.clone()),
            label: label.clone(),
            placeholder: form_ui.and_then(|f| f.placeholder.clone()),
            helper_text: form_ui.and_then(|f| f.helper_text.clone()),
            options,
            endpoint: form_ui.and_then(|f| f.endpoint.clone()),
        },
        table: TableColumn {
            header: table_ui.and_then(|t| t.header.clone()).unwrap_or(label),
            sortable: table_ui.and_then(|t| t.sortable).unwrap_or(false),
            filterable: table_ui.and_then(|t| t.filterable).unwrap_or(false),
        },
        relation: field.relation.as_ref().map(|r| RelationTarget {
            entity: r.entity.clone(),
            label_field: r.label_field.clone(),
            value_field: r.value_field.clone(),
        }),
        computed: field.ty == FieldType::Computed,
        computation: field.computation.clone(),
    }
}

fn semantic_type(ty: FieldType) -> crudo_ir::SemanticType {
    use crudo_ir::SemanticType;
    match ty {
        FieldType::String => SemanticType::Text,
        FieldType::Number => SemanticType::Number,
        FieldType::Boolean => SemanticType::Boolean,
        FieldType::Date => SemanticType::Datetime,
        FieldType::Computed => SemanticType::Text,
        FieldType::Relation => SemanticType::Identifier,
    }
}

fn resolve_widget(field: &FieldSchema, form_ui: Option<&FormUi>) -> FormWidget {
    if let Some(component) = form_ui.and_then(|f| f.component) {
        return match component {
            FormComponent::Input => FormWidget::Input,
            FormComponent::Select => FormWidget::Select,
            FormComponent::AsyncSelect => FormWidget::AsyncSelect,
            FormComponent::Checkbox => FormWidget::Checkbox,
            FormComponent::Textarea => FormWidget::Textarea,
            FormComponent::DatePicker => FormWidget::DatePicker,
            FormComponent::Hidden => FormWidget::Hidden,
        };
    }

    match field.ty {
        FieldType::Boolean => FormWidget::Checkbox,
        FieldType::Date => FormWidget::DatePicker,
        FieldType::Relation => {
            if form_ui.is_some_and(|f| f.endpoint.is_some()) {
                FormWidget::AsyncSelect
            } else {
                FormWidget::Select
            }
        }
        _ if form_ui.is_some_and(|f| !f.options.is_empty()) => FormWidget::Select,
        _ => FormWidget::Input,
    }
}

/// Build the Yup clause chain in its fixed order: required, email/url, min,
/// max, minLength, maxLength, pattern. Consumers render clauses in sequence,
/// so the order is part of the contract.
fn build_clauses(validation: Option<&ValidationSpec>, label: &str) -> Vec<ValidationClause> {
    let Some(v) = validation else {
        return Vec::new();
    };
    let mut clauses = Vec::new();

    if v.required {
        clauses.push(ValidationClause {
            kind: ClauseKind::Required,
            message: format!("{label} is required"),
            param: None,
        });
    }
    if v.ty == Some(ValidationType::Email) {
        clauses.push(ValidationClause {
            kind: ClauseKind::Email,
            message: "Invalid email address".to_string(),
            param: None,
        });
    }
    if v.ty == Some(ValidationType::Url) {
        clauses.push(ValidationClause {
            kind: ClauseKind::Url,
            message: "Invalid URL".to_string(),
            param: None,
        });
    }
    // `uuid` is accepted but emits no clause.
    if let Some(min) = v.min {
        clauses.push(ValidationClause {
            kind: ClauseKind::Min,
            message: format!("Must be at least {min}"),
            param: Some(ClauseParam::Number(min)),
        });
    }
    if let Some(max) = v.max {
        clauses.push(ValidationClause {
            kind: ClauseKind::Max,
            message: format!("Must be at most {max}"),
            param: Some(ClauseParam::Number(max)),
        });
    }
    if let Some(min_length) = v.min_length {
        clauses.push(ValidationClause {
            kind: ClauseKind::MinLength,
            message: format!("Must be at least {min_length} characters"),
            param: Some(ClauseParam::Integer(min_length)),
        });
    }
    if let Some(max_length) = v.max_length {
        clauses.push(ValidationClause {
            kind: ClauseKind::MaxLength,
            message: format!("Must be at most {max_length} characters"),
            param: Some(ClauseParam::Integer(max_length)),
        });
    }
    if let Some(pattern) = &v.pattern {
        clauses.push(ValidationClause {
            kind: ClauseKind::Pattern,
            message: "Invalid format".to_string(),
            param: Some(ClauseParam::Pattern(pattern.clone())),
        });
    }

    clauses
}

#[cfg(test)]
mod tests {
    use crudo_ir::SemanticType;
    use crudo_schema::{ListSpec, Pagination, RelationSpec, SelectOptionSpec, TableUi, UiSpec};

    use super::*;

    fn field(name: &str, ty: FieldType) -> FieldSchema {
        FieldSchema {
            name: name.to_string(),
            ty,
            validation: None,
            relation: None,
            computation: None,
            ui: None,
        }
    }

    fn entity(fields: Vec<FieldSchema>) -> EntitySchema {
        EntitySchema {
            entity: "Product".to_string(),
            plural: "Products".to_string(),
            route: "products".to_string(),
            api_endpoint: "/api/v1/products".to_string(),
            tenant_scoped: None,
            pagination: None,
            views: None,
            fields,
        }
    }

    fn form_ui(f: FormUi) -> Option<UiSpec> {
        Some(UiSpec {
            form: Some(f),
            table: None,
        })
    }

    fn table_ui(t: TableUi) -> Option<UiSpec> {
        Some(UiSpec {
            form: None,
            table: Some(t),
        })
    }

    #[test]
    fn test_id_is_excluded_from_form_and_table() {
        let mut id = field("id", FieldType::String);
        // Even explicit ui flags cannot pull id back in.
        id.ui = Some(UiSpec {
            form: Some(FormUi::default()),
            table: Some(TableUi {
                visible: Some(true),
                ..TableUi::default()
            }),
        });

        let canonical = normalize(&entity(vec![id]), &ProjectConfig::default());
        assert!(!canonical.fields[0].include_in_form);
        assert!(!canonical.fields[0].include_in_table);
    }

    #[test]
    fn test_visible_false_hides_column_without_exclude() {
        let mut f = field("internalCode", FieldType::String);
        f.ui = table_ui(TableUi {
            visible: Some(false),
            ..TableUi::default()
        });

        let canonical = normalize(&entity(vec![f]), &ProjectConfig::default());
        assert!(!canonical.fields[0].include_in_table);
        assert!(canonical.fields[0].include_in_form);
    }

    #[test]
    fn test_computed_fields_are_form_excluded() {
        let mut total = field("total", FieldType::Computed);
        total.computation = Some("price * quantity".to_string());
        // Computed classification follows the declared type, not whether an
        // expression was supplied.
        let age = field("age", FieldType::Computed);

        let canonical = normalize(&entity(vec![total, age]), &ProjectConfig::default());
        let f = &canonical.fields[0];
        assert!(!f.include_in_form);
        assert!(f.include_in_table);
        assert_eq!(f.semantic_type, SemanticType::Text);
        assert_eq!(f.computation.as_deref(), Some("price * quantity"));

        assert!(!canonical.fields[1].include_in_form);
        assert!(canonical.fields[1].computation.is_none());
        assert_eq!(canonical.computed_fields().len(), 2);
    }

    #[test]
    fn test_clause_ordering_is_fixed() {
        let mut email = field("email", FieldType::String);
        email.validation = Some(ValidationSpec {
            required: true,
            ty: Some(ValidationType::Email),
            max_length: Some(50),
            ..ValidationSpec::default()
        });

        let canonical = normalize(&entity(vec![email]), &ProjectConfig::default());
        let kinds: Vec<ClauseKind> = canonical.fields[0]
            .clauses
            .iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ClauseKind::Required, ClauseKind::Email, ClauseKind::MaxLength]
        );
    }

    #[test]
    fn test_clause_messages_match_generated_output() {
        let mut name = field("name", FieldType::String);
        name.validation = Some(ValidationSpec {
            required: true,
            min: Some(3.0),
            min_length: Some(2),
            pattern: Some("^[A-Z]".to_string()),
            ..ValidationSpec::default()
        });
        name.ui = form_ui(FormUi {
            label: Some("Name".to_string()),
            ..FormUi::default()
        });

        let canonical = normalize(&entity(vec![name]), &ProjectConfig::default());
        let messages: Vec<&str> = canonical.fields[0]
            .clauses
            .iter()
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Must be at least 3",
                "Must be at least 2 characters",
                "Invalid format",
            ]
        );
    }

    #[test]
    fn test_required_message_falls_back_to_field_name() {
        let mut sku = field("sku", FieldType::String);
        sku.validation = Some(ValidationSpec {
            required: true,
            ..ValidationSpec::default()
        });

        let canonical = normalize(&entity(vec![sku]), &ProjectConfig::default());
        assert_eq!(canonical.fields[0].clauses[0].message, "sku is required");
    }

    #[test]
    fn test_uuid_validation_emits_no_clause() {
        let mut key = field("key", FieldType::String);
        key.validation = Some(ValidationSpec {
            ty: Some(ValidationType::Uuid),
            ..ValidationSpec::default()
        });

        let canonical = normalize(&entity(vec![key]), &ProjectConfig::default());
        assert!(canonical.fields[0].clauses.is_empty());
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let mut price = field("price", FieldType::Number);
        price.validation = Some(ValidationSpec {
            required: true,
            min: Some(0.0),
            ..ValidationSpec::default()
        });
        let schema = entity(vec![field("id", FieldType::String), price]);
        let config = ProjectConfig::default();

        assert_eq!(normalize(&schema, &config), normalize(&schema, &config));
    }

    #[test]
    fn test_absent_views_get_the_fixed_fallback() {
        let canonical = normalize(&entity(vec![]), &ProjectConfig::default());

        assert_eq!(canonical.views.list.kind, ListKind::Table);
        assert_eq!(canonical.views.list.default_view, ListKind::Table);
        assert!(canonical.views.list.grid_component.is_none());
        assert_eq!(
            canonical.views.details,
            ViewKind::Modal {
                style: ModalStyle::Dialog
            }
        );
        assert_eq!(
            canonical.views.mutation,
            ViewKind::Modal {
                style: ModalStyle::Dialog
            }
        );
    }

    #[test]
    fn test_present_views_are_never_merged_with_the_fallback() {
        let mut schema = entity(vec![]);
        schema.views = Some(Views {
            list: ListSpec {
                ty: ListType::Grid,
                default_view: None,
                grid_component: None,
            },
            details: DetailsSpec::Toggle(false),
            mutation: DetailsSpec::View(SurfaceSpec {
                ty: SurfaceType::Page,
                modal_type: None,
            }),
        });

        let canonical = normalize(&schema, &ProjectConfig::default());
        assert_eq!(canonical.views.list.kind, ListKind::Grid);
        assert_eq!(canonical.views.list.default_view, ListKind::Grid);
        assert_eq!(
            canonical.views.list.grid_component.as_deref(),
            Some("CardGrid")
        );
        // The fallback's dialog must not leak in over an explicit `false`.
        assert_eq!(canonical.views.details, ViewKind::Disabled);
        assert_eq!(canonical.views.mutation, ViewKind::Page);
    }

    #[test]
    fn test_details_toggle_true_means_dialog() {
        let mut schema = entity(vec![]);
        schema.views = Some(Views {
            list: ListSpec {
                ty: ListType::Table,
                default_view: None,
                grid_component: None,
            },
            details: DetailsSpec::Toggle(true),
            mutation: DetailsSpec::View(SurfaceSpec {
                ty: SurfaceType::Modal,
                modal_type: Some(ModalType::Drawer),
            }),
        });

        let canonical = normalize(&schema, &ProjectConfig::default());
        assert_eq!(
            canonical.views.details,
            ViewKind::Modal {
                style: ModalStyle::Dialog
            }
        );
        assert!(canonical.views.mutation.is_drawer());
    }

    #[test]
    fn test_tenant_scoping_falls_back_to_config() {
        let config = ProjectConfig::default();
        assert!(config.defaults.tenant_scoped);

        let canonical = normalize(&entity(vec![]), &config);
        assert!(canonical.tenant_scoped);

        let mut schema = entity(vec![]);
        schema.tenant_scoped = Some(false);
        assert!(!normalize(&schema, &config).tenant_scoped);
    }

    #[test]
    fn test_pagination_defaults() {
        let canonical = normalize(&entity(vec![]), &ProjectConfig::default());
        assert_eq!(canonical.pagination.default_page_size, 20);
        assert_eq!(canonical.pagination.page_size_options, vec![10, 20, 50, 100]);

        let mut schema = entity(vec![]);
        schema.pagination = Some(Pagination {
            default_page_size: 25,
            page_size_options: vec![25, 50],
        });
        let canonical = normalize(&schema, &ProjectConfig::default());
        assert_eq!(canonical.pagination.default_page_size, 25);
        assert_eq!(canonical.pagination.page_size_options, vec![25, 50]);
    }

    #[test]
    fn test_widget_resolution_by_type() {
        let active = field("active", FieldType::Boolean);
        let created = field("createdAt", FieldType::Date);
        let mut category = field("categoryId", FieldType::Relation);
        category.relation = Some(RelationSpec {
            entity: "Category".to_string(),
            label_field: "name".to_string(),
            value_field: "id".to_string(),
        });
        let mut supplier = field("supplierId", FieldType::Relation);
        supplier.relation = category.relation.clone();
        supplier.ui = form_ui(FormUi {
            endpoint: Some("/api/v1/suppliers".to_string()),
            ..FormUi::default()
        });
        let mut status = field("status", FieldType::String);
        status.ui = form_ui(FormUi {
            options: vec![SelectOptionSpec {
                label: "Draft".to_string(),
                value: "draft".to_string(),
            }],
            ..FormUi::default()
        });
        let mut notes = field("notes", FieldType::String);
        notes.ui = form_ui(FormUi {
            component: Some(FormComponent::Textarea),
            ..FormUi::default()
        });

        let canonical = normalize(
            &entity(vec![
                active,
                created,
                category,
                supplier,
                status,
                notes,
                field("name", FieldType::String),
            ]),
            &ProjectConfig::default(),
        );

        let widgets: Vec<FormWidget> =
            canonical.fields.iter().map(|f| f.form.widget).collect();
        assert_eq!(
            widgets,
            vec![
                FormWidget::Checkbox,
                FormWidget::DatePicker,
                FormWidget::Select,
                FormWidget::AsyncSelect,
                FormWidget::Select,
                FormWidget::Textarea,
                FormWidget::Input,
            ]
        );
    }

    #[test]
    fn test_relation_fields_become_identifiers() {
        let mut category = field("categoryId", FieldType::Relation);
        category.relation = Some(RelationSpec {
            entity: "Category".to_string(),
            label_field: "name".to_string(),
            value_field: "id".to_string(),
        });

        let canonical = normalize(&entity(vec![category]), &ProjectConfig::default());
        let f = &canonical.fields[0];
        assert_eq!(f.semantic_type, SemanticType::Identifier);
        assert_eq!(f.ts_type(), "string");
        assert_eq!(f.relation.as_ref().unwrap().entity, "Category");
        assert!(canonical.has_relations());
    }

    #[test]
    fn test_header_falls_back_to_label_then_name() {
        let mut priced = field("price", FieldType::Number);
        priced.ui = Some(UiSpec {
            form: Some(FormUi {
                label: Some("Unit price".to_string()),
                ..FormUi::default()
            }),
            table: Some(TableUi {
                header: Some("Price".to_string()),
                ..TableUi::default()
            }),
        });
        let mut labeled = field("sku", FieldType::String);
        labeled.ui = form_ui(FormUi {
            label: Some("SKU".to_string()),
            ..FormUi::default()
        });
        let bare = field("name", FieldType::String);

        let canonical = normalize(
            &entity(vec![priced, labeled, bare]),
            &ProjectConfig::default(),
        );
        assert_eq!(canonical.fields[0].table.header, "Price");
        assert_eq!(canonical.fields[1].table.header, "SKU");
        assert_eq!(canonical.fields[2].table.header, "name");
    }

    #[test]
    fn test_product_example_end_to_end() {
        let src = r#"{
            "entity": "Product",
            "plural": "Products",
            "route": "products",
            "apiEndpoint": "/api/v1/products",
            "fields": [
                { "name": "id", "type": "string" },
                { "name": "name", "type": "string", "validation": { "required": true } }
            ]
        }"#;
        let schema = crudo_schema::parse_entity_str(src).unwrap();

        let canonical = normalize(&schema, &ProjectConfig::default());
        let form: Vec<&str> = canonical
            .form_fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        let table: Vec<&str> = canonical
            .table_fields()
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        assert_eq!(form, vec!["name"]);
        assert_eq!(table, vec!["name"]);
        assert!(canonical.computed_fields().is_empty());
        assert!(!canonical.has_relations());
        assert_eq!(
            canonical.fields[1].yup_schema(),
            "yup.string().required('name is required')"
        );
    }
}
