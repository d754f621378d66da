use super::*;

#[test]
fn create_then_describe_prepends_id() {
    let mut catalog = Catalog::new();
    catalog
        .create_table("users", &specs(&["name:str", "age:int", "active:bool"]))
        .unwrap();

    let schema = catalog.describe("users").unwrap();
    assert_eq!(schema.specs(), specs(&["ID:int", "name:str", "age:int", "active:bool"]));
    assert_eq!(schema.user_columns().len(), 3);
}

#[test]
fn create_normalizes_type_aliases() {
    let mut catalog = Catalog::new();
    let schema = catalog
        .create_table("t", &specs(&["n:Integer", "s:text", "b:BOOLEAN"]))
        .unwrap();
    assert_eq!(schema.specs(), specs(&["ID:int", "n:int", "s:str", "b:bool"]));
}

#[test]
fn create_existing_table_fails_and_leaves_catalog_unchanged() {
    let mut catalog = Catalog::new();
    catalog.create_table("users", &specs(&["name:str"])).unwrap();
    let before = catalog.clone();

    let err = catalog.create_table("users", &specs(&["age:int"])).unwrap_err();
    assert!(matches!(err, DbError::AlreadyExists(ref t) if t == "users"));
    assert_eq!(catalog, before);
}

#[test]
fn create_rejects_bad_specs() {
    let mut catalog = Catalog::new();
    for bad in ["name", ":int", "name:float", "name:"] {
        let err = catalog.create_table("t", &specs(&[bad])).unwrap_err();
        assert!(matches!(err, DbError::InvalidFormat(_)), "spec {bad} should fail");
    }
    assert!(catalog.is_empty());
}

#[test]
fn create_rejects_duplicate_and_reserved_column_names() {
    let mut catalog = Catalog::new();
    let err = catalog.create_table("t", &specs(&["a:int", "a:str"])).unwrap_err();
    assert!(err.to_string().contains("Duplicate column name 'a'"));
    let err = catalog.create_table("t", &specs(&["ID:int"])).unwrap_err();
    assert!(err.to_string().contains("Duplicate column name 'ID'"));
}

#[test]
fn create_rejects_path_like_table_names() {
    let mut catalog = Catalog::new();
    for bad in ["../x", "a/b", ".hidden"] {
        assert!(matches!(
            catalog.create_table(bad, &specs(&["a:int"])),
            Err(DbError::InvalidFormat(_))
        ));
    }
}

#[test]
fn drop_unknown_table_is_not_found() {
    let mut catalog = Catalog::new();
    assert!(matches!(catalog.drop_table("ghost"), Err(DbError::NotFound(_))));
    assert!(matches!(catalog.describe("ghost"), Err(DbError::NotFound(_))));
}

#[test]
fn list_tables_is_sorted() {
    let mut catalog = Catalog::new();
    for name in ["zeta", "alpha", "Mid"] {
        catalog.create_table(name, &specs(&["a:int"])).unwrap();
    }
    assert_eq!(catalog.list_tables(), vec!["Mid", "alpha", "zeta"]);
    catalog.drop_table("alpha").unwrap();
    assert_eq!(catalog.list_tables(), vec!["Mid", "zeta"]);
}

#[test]
fn catalog_save_load_roundtrip_keeps_creation_order() {
    let mut catalog = Catalog::new();
    catalog.create_table("users", &specs(&["name:str", "age:int"])).unwrap();
    catalog.create_table("accounts", &specs(&["open:bool"])).unwrap();

    let path = temp_dir("catalog_roundtrip");
    let catalog_path = path.join("catalog.json");
    catalog.save_to_path(&catalog_path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&catalog_path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({
            "users": ["ID:int", "name:str", "age:int"],
            "accounts": ["ID:int", "open:bool"],
        })
    );

    let loaded = Catalog::load_from_path(&catalog_path).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn catalog_load_missing_file_is_empty() {
    let path = temp_dir("catalog_missing").join("missing_catalog.json");
    let loaded = Catalog::load_from_path(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn catalog_load_malformed_file_errors() {
    let path = temp_dir("catalog_malformed");
    std::fs::create_dir_all(&path).unwrap();
    let catalog_path = path.join("catalog.json");
    std::fs::write(&catalog_path, "{ not json").unwrap();
    assert!(matches!(Catalog::load_from_path(&catalog_path), Err(DbError::Json(_))));
}
