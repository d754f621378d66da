use super::*;

#[test]
fn parse_create_table_basic() {
    let cmd = parse("create_table users name:str age:int").unwrap();
    assert_eq!(
        cmd,
        Command::CreateTable {
            table: "users".to_string(),
            columns: vec!["name:str".to_string(), "age:int".to_string()],
        }
    );
}

#[test]
fn parse_create_table_keyword_is_case_insensitive_but_name_is_not() {
    match parse("CREATE_TABLE Users active:bool").unwrap() {
        Command::CreateTable { table, columns } => {
            assert_eq!(table, "Users");
            assert_eq!(columns, vec!["active:bool".to_string()]);
        }
        other => panic!("Expected CreateTable, got {other:?}"),
    }
}

#[test]
fn parse_create_table_requires_a_column() {
    let err = parse_err("create_table users");
    assert!(matches!(err, DbError::InvalidFormat(_)));
    assert!(err.to_string().contains("Usage: create_table"));
}

#[test]
fn parse_drop_table() {
    assert_eq!(
        parse("drop_table users").unwrap(),
        Command::DropTable {
            table: "users".to_string()
        }
    );
}

#[test]
fn parse_drop_table_wrong_arg_count() {
    assert!(matches!(parse_err("drop_table"), DbError::InvalidFormat(_)));
    assert!(matches!(parse_err("drop_table a b"), DbError::InvalidFormat(_)));
}

#[test]
fn parse_list_tables_never_fails() {
    assert_eq!(parse("list_tables").unwrap(), Command::ListTables);
    assert_eq!(parse("list_tables please").unwrap(), Command::ListTables);
}

#[test]
fn parse_info() {
    assert_eq!(
        parse("info users").unwrap(),
        Command::Info {
            table: "users".to_string()
        }
    );
    assert!(matches!(parse_err("info"), DbError::InvalidFormat(_)));
    assert!(matches!(parse_err("info a b"), DbError::InvalidFormat(_)));
}
