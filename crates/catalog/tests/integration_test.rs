// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for the catalog crate

use refsql_catalog::{
    CatalogConfig, CatalogError, CatalogResult, ColumnDescriptor, ColumnMetadata, DataType,
    Dialect, SchemaCatalog, StaticCatalog, TableDescriptor, TableMetadata,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Hand-written catalog with a single fixed table
struct TestCatalog {
    table: TableDescriptor,
}

impl TestCatalog {
    fn new() -> Self {
        Self {
            table: TableDescriptor::new(
                Some("app".to_string()),
                "users",
                "`app`.`users`",
                vec![ColumnDescriptor::new(
                    ColumnMetadata::new("email", DataType::Varchar(Some(255))),
                    "`email`",
                )],
            ),
        }
    }
}

impl SchemaCatalog for TestCatalog {
    fn dialect(&self) -> Dialect {
        Dialect::MySQL
    }

    fn find_table(&self, path: &[String]) -> CatalogResult<&TableDescriptor> {
        match path.last().map(String::as_str) {
            Some("users") => Ok(&self.table),
            _ => Err(CatalogError::TableNotFound(path.join("."))),
        }
    }
}

#[test]
fn test_custom_catalog_uses_default_quoting() {
    let catalog = TestCatalog::new();
    assert_eq!(catalog.quote_object_name("user email"), "`user email`");

    let table = catalog.find_table(&["users".to_string()]).unwrap();
    assert_eq!(table.find_column("EMAIL").unwrap().quoted_name(), "`email`");
}

#[test]
fn test_catalog_as_trait_object() {
    let catalog: Box<dyn SchemaCatalog> = Box::new(
        StaticCatalog::from_tables(Dialect::SqlServer, [TableMetadata::new("Customers", "dbo")])
            .unwrap(),
    );
    assert_eq!(catalog.dialect(), Dialect::SqlServer);
    assert!(catalog.find_table(&["Customers".to_string()]).is_ok());
}

#[test]
fn test_static_catalog_from_yaml_config() {
    init_tracing();

    let yaml = r#"
dialect: postgresql
tables:
  - schema: public
    name: products
    columns:
      - name: id
        data_type: BigInt
        is_primary_key: true
      - name: unit_price
        data_type: Decimal
"#;
    let config = CatalogConfig::from_yaml_str(yaml).unwrap();
    let catalog = StaticCatalog::from_config(config).unwrap();

    let table = catalog
        .find_table(&["public".to_string(), "Products".to_string()])
        .unwrap();
    assert_eq!(table.qualified_name(), "\"public\".\"products\"");

    let column = table.find_column("UnitPrice").unwrap();
    assert_eq!(column.quoted_name(), "\"unit_price\"");
    assert_eq!(column.data_type(), &DataType::Decimal);
}

#[test]
fn test_static_catalog_from_json_file() {
    init_tracing();

    let config = CatalogConfig::new(Dialect::SqlServer)
        .with_database("Shop")
        .with_table(
            TableMetadata::new("Customers", "dbo")
                .with_columns(vec![ColumnMetadata::new("Name", DataType::Text)]),
        );

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("shop.json");
    std::fs::write(&file, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let catalog = StaticCatalog::from_file(&file).unwrap();
    assert_eq!(catalog.database(), Some("Shop"));

    let path = ["Shop", "dbo", "Customers"].map(String::from);
    assert_eq!(
        catalog.find_table(&path).unwrap().qualified_name(),
        "[dbo].[Customers]"
    );
}

#[test]
fn test_invalid_config_rejected() {
    let yaml = r#"
dialect: mysql
tables:
  - name: t
  - name: T
"#;
    let config = CatalogConfig::from_yaml_str(yaml).unwrap();
    assert!(matches!(
        StaticCatalog::from_config(config),
        Err(CatalogError::InvalidSchema(_))
    ));
}
