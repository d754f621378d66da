use super::*;

#[test]
fn test_insert_assigns_sequential_ids() {
    let mut db = test_db();
    db.execute("create_table users name:str age:int").unwrap();
    for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
        let out = run(&mut db, &format!("insert into users values ({name}, {i})"));
        assert_eq!(out, format!(r#"Record with ID={} inserted into "users"."#, i + 1));
    }
    assert_eq!(
        run(&mut db, "select from users"),
        "ID\tname\tage\n1\ta\t0\n2\tb\t1\n3\tc\t2\n4\td\t3"
    );
}

#[test]
fn test_insert_returns_typed_record() {
    let mut db = test_db();
    db.execute("create_table users name:str age:int active:bool").unwrap();
    match db.execute(r#"insert into users values ("John Smith", 41, yes)"#).unwrap() {
        Output::Inserted { record, .. } => {
            use primdb_core::types::Value;
            assert_eq!(record.id(), Some(1));
            assert_eq!(record.get("name"), Some(&Value::Str("John Smith".to_string())));
            assert_eq!(record.get("age"), Some(&Value::Int(41)));
            assert_eq!(record.get("active"), Some(&Value::Bool(true)));
        }
        other => panic!("Expected Inserted, got {other:?}"),
    }
}

#[test]
fn test_insert_wrong_value_count() {
    let mut db = test_db();
    db.execute("create_table users name:str age:int").unwrap();
    let err = run_err(&mut db, r#"insert into users values ("Ann")"#);
    assert!(matches!(err, DbError::CountMismatch { expected: 2, got: 1 }));
    assert_eq!(err.to_string(), "Expected 2 values but got 1");
    let err = run_err(&mut db, "insert into users values ()");
    assert!(matches!(err, DbError::CountMismatch { expected: 2, got: 0 }));
}

#[test]
fn test_insert_type_mismatch_leaves_table_untouched() {
    let mut db = test_db();
    db.execute("create_table users name:str age:int active:bool").unwrap();

    let err = run_err(&mut db, "insert into users values (Ann, thirty, yes)");
    assert!(matches!(err, DbError::Type { .. }));
    assert!(err.to_string().contains("not an integer"));

    let err = run_err(&mut db, "insert into users values (Ann, 30, maybe)");
    assert!(err.to_string().contains("not a boolean"));

    assert_eq!(run(&mut db, "select from users"), "ID\tname\tage\tactive");
}

#[test]
fn test_update_matching_records() {
    let mut db = test_db();
    seed_users(&mut db);
    let out = run(&mut db, "update users set age=31 where name=Ann");
    assert_eq!(out, r#"Record with ID=1 in "users" updated."#);
    assert_eq!(run(&mut db, "select from users"), "ID\tname\tage\n1\tAnn\t31\n2\tBo\t25");
}

#[test]
fn test_update_reports_count_and_first_id() {
    let mut db = test_db();
    seed_users(&mut db);
    db.execute("insert into users values (Cy, 25)").unwrap();
    match db.execute("update users set name = Young where age = 25").unwrap() {
        Output::Updated { summary, .. } => {
            assert_eq!(summary.count, 2);
            assert_eq!(summary.first_id, Some(2));
        }
        other => panic!("Expected Updated, got {other:?}"),
    }
    assert_eq!(
        run(&mut db, "select from users where name = Young"),
        "ID\tname\tage\n2\tYoung\t25\n3\tYoung\t25"
    );
}

#[test]
fn test_update_without_match_does_not_rewrite_file() {
    let path = test_path("update_no_match");
    let mut db = Database::open(path.clone()).unwrap();
    seed_users(&mut db);
    let file = path.join("tables").join("users.json");
    let before = std::fs::read_to_string(&file).unwrap();
    let modified = std::fs::metadata(&file).unwrap().modified().unwrap();

    let out = run(&mut db, "update users set age = 1 where name = Nobody");
    assert_eq!(out, r#"No records matched in "users"."#);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), before);
    assert_eq!(std::fs::metadata(&file).unwrap().modified().unwrap(), modified);
}

#[test]
fn test_update_validates_set_clause() {
    let mut db = test_db();
    seed_users(&mut db);
    assert!(matches!(
        run_err(&mut db, "update users set height = 2 where ID = 1"),
        DbError::NotFound(_)
    ));
    assert!(matches!(
        run_err(&mut db, "update users set age = old where ID = 1"),
        DbError::Type { .. }
    ));
    assert!(matches!(
        run_err(&mut db, "update users set ID = 9 where ID = 1"),
        DbError::InvalidFormat(_)
    ));
}

#[test]
fn test_delete_matching_records() {
    let mut db = test_db();
    seed_users(&mut db);
    let out = run(&mut db, "delete from users where age = 25");
    assert_eq!(out, r#"Record with ID=2 in "users" deleted."#);
    assert_eq!(run(&mut db, "select from users"), "ID\tname\tage\n1\tAnn\t30");
    assert_eq!(
        run(&mut db, "delete from users where age = 25"),
        r#"No records matched in "users"."#
    );
}

#[test]
fn test_id_is_reused_after_deleting_the_highest_row() {
    let mut db = test_db();
    seed_users(&mut db);
    db.execute("delete from users where ID = 2").unwrap();
    let out = run(&mut db, "insert into users values (Cy, 40)");
    assert_eq!(out, r#"Record with ID=2 inserted into "users"."#);
}

#[test]
fn test_id_after_deleting_a_middle_row_is_max_plus_one() {
    let mut db = test_db();
    seed_users(&mut db);
    db.execute("insert into users values (Cy, 40)").unwrap();
    db.execute("delete from users where ID = 2").unwrap();
    let out = run(&mut db, "insert into users values (Di, 22)");
    assert_eq!(out, r#"Record with ID=4 inserted into "users"."#);
}

#[test]
fn test_full_scenario() {
    let mut db = test_db();
    db.execute("create_table users name:str age:int").unwrap();
    db.execute(r#"insert into users values ("Ann", "30")"#).unwrap();
    db.execute(r#"insert into users values ("Bo", "25")"#).unwrap();
    db.execute("update users set age=31 where name=Ann").unwrap();
    db.execute("delete from users where age=25").unwrap();
    assert_eq!(run(&mut db, "select from users"), "ID\tname\tage\n1\tAnn\t31");
}

#[test]
fn test_insert_after_largest_possible_id_is_an_error() {
    let path = test_path("id_overflow");
    let mut db = Database::open(path.clone()).unwrap();
    db.execute("create_table users name:str").unwrap();
    std::fs::create_dir_all(path.join("tables")).unwrap();
    std::fs::write(
        path.join("tables").join("users.json"),
        format!(r#"[{{"ID": {}, "name": "x"}}]"#, i64::MAX),
    )
    .unwrap();

    let err = run_err(&mut db, "insert into users values (y)");
    assert!(matches!(err, DbError::InvalidFormat(_)));
    assert!(err.to_string().contains("no identifiers left"));
    assert_eq!(run(&mut db, "info users"), "Table: users\nColumns: ID:int, name:str\nRecords: 1");
}
