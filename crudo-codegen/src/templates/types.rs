//! Entity type declarations renderer.

use crudo_ir::CanonicalEntity;

use super::Template;
use crate::builder::CodeBuilder;
use crate::naming::to_pascal_case;

/// `{types}/{camel}.ts`: the entity interface, create/update inputs derived
/// from the form fields, and the request/response envelope types the api
/// slice references. Envelope member names come from the configured API
/// response shape.
pub struct TypesTs;

impl Template for TypesTs {
    fn id(&self) -> &'static str {
        "types/entity"
    }

    fn render(&self, entity: &CanonicalEntity) -> String {
        let pascal = to_pascal_case(&entity.name);
        let api = &entity.api;

        let mut b = CodeBuilder::typescript();

        b.push_line(&format!("export interface {pascal} {{")).push_indent();
        let mut wrote_tenant = false;
        for field in &entity.fields {
            b.push_line(&format!("{}: {};", field.name, field.ts_type()));
            if entity.tenant_scoped && field.name == "id" {
                b.push_line("tenantId: string;");
                wrote_tenant = true;
            }
        }
        if entity.tenant_scoped && !wrote_tenant {
            b.push_line("tenantId: string;");
        }
        b.push_dedent().push_line("}").push_blank();

        b.push_line(&format!("export interface Create{pascal}Input {{"))
            .push_indent();
        for field in entity.form_fields() {
            let optional = if field.required { "" } else { "?" };
            b.push_line(&format!("{}{optional}: {};", field.name, field.ts_type()));
        }
        b.push_dedent().push_line("}").push_blank();

        b.push_line(&format!(
            "export type Update{pascal}Input = Partial<Create{pascal}Input>;"
        ))
        .push_blank();

        b.push_line(&format!("export interface {pascal}ListParams {{"))
            .push_indent()
            .push_line("page?: number;")
            .push_line("pageSize?: number;")
            .push_line("search?: string;")
            .push_line("sortBy?: string;")
            .push_line("sortOrder?: 'asc' | 'desc';")
            .push_dedent()
            .push_line("}")
            .push_blank();

        b.push_line(&format!("export interface {pascal}ListMeta {{"))
            .push_indent()
            .push_line("total: number;")
            .push_line("page: number;")
            .push_line("pageSize: number;")
            .push_dedent()
            .push_line("}")
            .push_blank();

        b.push_line(&format!("export interface {pascal}ListResponse {{"))
            .push_indent()
            .push_line(&format!("{}: string;", api.status_field))
            .push_line(&format!("{}?: string;", api.message_field))
            .push_line(&format!("{}: {pascal}[];", api.data_field))
            .push_line(&format!("{}: {pascal}ListMeta;", api.meta_field))
            .push_dedent()
            .push_line("}")
            .push_blank();

        b.push_line(&format!("export interface {pascal}Response {{"))
            .push_indent()
            .push_line(&format!("{}: string;", api.status_field))
            .push_line(&format!("{}?: string;", api.message_field))
            .push_line(&format!("{}: {pascal};", api.data_field))
            .push_dedent()
            .push_line("}");

        b.build()
    }
}
