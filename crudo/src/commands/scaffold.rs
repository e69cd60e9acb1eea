use std::fs;
use std::path::PathBuf;

use clap::Args;
use crudo_codegen::naming::{to_camel_case, to_kebab_case, to_pascal_case};
use crudo_schema::parse_entity_str_with_filename;
use eyre::{Context, Result, bail};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ScaffoldCommand {
    /// Entity name (PascalCase)
    pub entity: String,

    /// Directory the schema file is written to
    #[arg(short, long, default_value = "schemas")]
    pub output: PathBuf,

    /// Plural display name (defaults to "<Entity>s")
    #[arg(long)]
    pub plural: Option<String>,

    /// Route segment (defaults to the kebab-cased plural)
    #[arg(long)]
    pub route: Option<String>,

    /// API endpoint (defaults to "/api/v1/<route>")
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Mark the entity tenant scoped in the schema
    #[arg(long)]
    pub tenant_scoped: bool,

    /// Overwrite an existing schema file
    #[arg(long)]
    pub force: bool,
}

impl ScaffoldCommand {
    pub fn run(&self) -> Result<()> {
        let entity = to_pascal_case(&self.entity);
        let plural = self.plural.clone().unwrap_or_else(|| format!("{entity}s"));
        let route = self.route.clone().unwrap_or_else(|| to_kebab_case(&plural));
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("/api/v1/{route}"));

        let path = self.output.join(format!("{}.json", to_camel_case(&entity)));
        if path.exists() && !self.force {
            bail!(
                "{} already exists (pass --force to overwrite)",
                path.display()
            );
        }

        let content = starter_schema(&entity, &plural, &route, &endpoint, self.tenant_scoped);
        // The starter must pass its own validation before it is written, so
        // a reserved or invalid entity name fails here with a diagnostic.
        parse_entity_str_with_filename(&content, &path.display().to_string()).unwrap_or_exit();

        fs::create_dir_all(&self.output)
            .wrap_err_with(|| format!("failed to create {}", self.output.display()))?;
        fs::write(&path, &content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  edit {} to add fields", path.display());
        println!("  crudo generate {}", path.display());

        Ok(())
    }
}

fn starter_schema(
    entity: &str,
    plural: &str,
    route: &str,
    endpoint: &str,
    tenant_scoped: bool,
) -> String {
    let tenant_line = if tenant_scoped {
        "\n  \"tenantScoped\": true,"
    } else {
        ""
    };
    format!(
        r#"{{
  "entity": "{entity}",
  "plural": "{plural}",
  "route": "{route}",
  "apiEndpoint": "{endpoint}",{tenant_line}
  "pagination": {{
    "defaultPageSize": 20,
    "pageSizeOptions": [10, 20, 50, 100]
  }},
  "fields": [
    {{ "name": "id", "type": "string" }},
    {{
      "name": "name",
      "type": "string",
      "validation": {{ "required": true }},
      "ui": {{
        "form": {{ "label": "Name" }},
        "table": {{ "sortable": true }}
      }}
    }}
  ]
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use crudo_schema::parse_entity_str;

    use super::*;

    #[test]
    fn test_starter_schema_is_valid() {
        let content = starter_schema("Product", "Products", "products", "/api/v1/products", false);

        let schema = parse_entity_str(&content).unwrap();
        assert_eq!(schema.entity, "Product");
        assert_eq!(schema.plural, "Products");
        assert_eq!(schema.route, "products");
        assert_eq!(schema.api_endpoint, "/api/v1/products");
        assert_eq!(schema.tenant_scoped, None);
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.pagination.unwrap().default_page_size, 20);
    }

    #[test]
    fn test_starter_schema_tenant_flag() {
        let content = starter_schema("Invoice", "Invoices", "invoices", "/api/v1/invoices", true);

        let schema = parse_entity_str(&content).unwrap();
        assert_eq!(schema.tenant_scoped, Some(true));
    }

    #[test]
    fn test_starter_schema_rejects_reserved_entity_names() {
        let content = starter_schema("class", "classes", "classes", "/api/v1/classes", false);
        assert!(parse_entity_str(&content).is_err());
    }

    #[test]
    fn test_multi_word_defaults() {
        // The derivation the command applies for OrderItem with no flags.
        let entity = to_pascal_case("OrderItem");
        let plural = format!("{entity}s");
        let route = to_kebab_case(&plural);
        assert_eq!(route, "order-items");

        let content = starter_schema(&entity, &plural, &route, "/api/v1/order-items", false);
        let schema = parse_entity_str(&content).unwrap();
        assert_eq!(schema.entity, "OrderItem");
        assert_eq!(schema.route, "order-items");
    }
}
