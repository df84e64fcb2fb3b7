use super::*;

// ==================== OPEN ====================

#[test]
fn test_open() {
    assert_eq!(
        open(&["u", "p", "127.0.0.1", "3306", "db"]).unwrap(),
        "u:p@tcp(127.0.0.1:3306)/db"
    );
}

#[test]
fn test_open_wrong_arity() {
    assert!(open(&["u", "p", "127.0.0.1", "3306"]).is_err());
    assert!(open(&["u", "p", "127.0.0.1", "3306", "db", "extra"]).is_err());
}

#[test]
fn test_open_empty_password() {
    assert_eq!(
        open(&["root", "", "localhost", "3306", "app"]).unwrap(),
        "root:@tcp(localhost:3306)/app"
    );
}

// ==================== SELECT ====================

#[test]
fn test_select() {
    assert_eq!(select(&["a", "t"]).unwrap(), "SELECT a FROM t;");
}

#[test]
fn test_select_with_where() {
    assert_eq!(
        select(&["a", "t", "x=1"]).unwrap(),
        "SELECT a FROM t WHERE x=1;"
    );
}

#[test]
fn test_select_wrong_arity() {
    let err = select(&["a"]).unwrap_err();
    assert_eq!(
        err,
        FillError::arity(StatementKind::Select, Arity::between(2, 3), 1)
    );
    assert!(select(&["a", "t", "x=1", "y=2"]).is_err());
    assert!(select::<&str>(&[]).is_err());
}

// ==================== CREATE TABLE ====================

#[test]
fn test_create_table() {
    assert_eq!(
        create_table(&["users", "id INT", "name TEXT", "InnoDB"]).unwrap(),
        "CREATE TABLE IF NOT EXISTS users(id INT, name TEXT) ENGINE=InnoDB;"
    );
}

#[test]
fn test_create_table_single_column() {
    assert_eq!(
        create_table(&["t", "id INT", "MEMORY"]).unwrap(),
        "CREATE TABLE IF NOT EXISTS t(id INT) ENGINE=MEMORY;"
    );
}

#[test]
fn test_create_table_keeps_column_order() {
    let sql = create_table(&["t", "c", "b", "a", "b", "InnoDB"]).unwrap();
    assert_eq!(sql, "CREATE TABLE IF NOT EXISTS t(c, b, a, b) ENGINE=InnoDB;");
}

#[test]
fn test_create_table_needs_a_column() {
    assert!(create_table(&["t", "InnoDB"]).is_err());
}

// ==================== DROP TABLE ====================

#[test]
fn test_drop_table_single() {
    assert_eq!(drop_table(&["a"]).unwrap(), "DROP TABLE IF EXISTS a;");
}

#[test]
fn test_drop_table_many() {
    assert_eq!(
        drop_table(&["a", "b", "c"]).unwrap(),
        "DROP TABLE IF EXISTS a, b, c;"
    );
}

#[test]
fn test_drop_table_empty() {
    assert!(drop_table::<&str>(&[]).is_err());
}

// ==================== INSERT INTO ====================

#[test]
fn test_insert_into_single_row() {
    assert_eq!(
        insert_into(&["t", "c1,c2", "1,2"]).unwrap(),
        "INSERT INTO t(c1,c2) VALUES(1,2);"
    );
}

#[test]
fn test_insert_into_many_rows() {
    assert_eq!(
        insert_into(&["t", "c1,c2", "1,2", "3,4"]).unwrap(),
        "INSERT INTO t(c1,c2) VALUES(1,2), (3,4);"
    );
    assert_eq!(
        insert_into(&["t", "c", "1", "2", "3"]).unwrap(),
        "INSERT INTO t(c) VALUES(1), (2), (3);"
    );
}

#[test]
fn test_insert_into_without_values() {
    assert!(insert_into(&["t", "c1,c2"]).is_err());
}

// ==================== DELETE / UPDATE / SET ====================

#[test]
fn test_delete() {
    assert_eq!(
        delete(&["users", "id = 7"]).unwrap(),
        "DELETE FROM users WHERE id = 7;"
    );
    assert!(delete(&["users"]).is_err());
    assert!(delete(&["users", "id = 7", "extra"]).is_err());
}

#[test]
fn test_update() {
    assert_eq!(
        update(&["users", "name = 'bob'"]).unwrap(),
        "UPDATE users SET name = 'bob';"
    );
    assert!(update(&["users"]).is_err());
}

#[test]
fn test_set() {
    assert_eq!(set(&["@x = 1"]).unwrap(), "SET @x = 1;");
    assert!(set(&["@x = 1", "@y = 2"]).is_err());
}

// ==================== AS ====================

#[test]
fn test_as_strips_semicolon() {
    assert_eq!(as_alias(&["SELECT 1;", "x"]).unwrap(), "(SELECT 1) AS x;");
}

#[test]
fn test_as_without_semicolon() {
    assert_eq!(as_alias(&["SELECT 1", "x"]).unwrap(), "(SELECT 1) AS x;");
}

#[test]
fn test_as_strips_only_one_semicolon() {
    assert_eq!(as_alias(&["SELECT 1;;", "x"]).unwrap(), "(SELECT 1;) AS x;");
}

#[test]
fn test_as_composes_with_select() {
    let inner = select(&["id", "users", "age > 18"]).unwrap();
    assert_eq!(
        as_alias(&[inner.as_str(), "adults"]).unwrap(),
        "(SELECT id FROM users WHERE age > 18) AS adults;"
    );
}

// ==================== Predicates ====================

#[test]
fn test_and_or_not() {
    assert_eq!(and(&["a = 1", "b = 2"]).unwrap(), "(a = 1 AND b = 2)");
    assert_eq!(or(&["a = 1", "b = 2"]).unwrap(), "(a = 1 OR b = 2)");
    assert_eq!(not(&["a = 1"]).unwrap(), "(NOT a = 1)");
}

#[test]
fn test_regexp() {
    assert_eq!(
        regexp(&["name", "'^A'"]).unwrap(),
        "(name REGEXP '^A')"
    );
}

#[test]
fn test_predicates_nest() {
    let lhs = and(&["a = 1", "b = 2"]).unwrap();
    let rhs = not(&["c IS NULL"]).unwrap();
    let cond = or(&[lhs, rhs]).unwrap();
    assert_eq!(cond, "((a = 1 AND b = 2) OR (NOT c IS NULL))");
    assert_eq!(
        select(&["*", "t", cond.as_str()]).unwrap(),
        "SELECT * FROM t WHERE ((a = 1 AND b = 2) OR (NOT c IS NULL));"
    );
}

#[test]
fn test_predicate_wrong_arity() {
    assert!(and(&["a"]).is_err());
    assert!(or(&["a", "b", "c"]).is_err());
    assert!(not::<&str>(&[]).is_err());
    assert!(regexp(&["a"]).is_err());
}

// ==================== Arguments ====================

#[test]
fn test_accepts_owned_strings() {
    let args = vec!["id".to_string(), "users".to_string()];
    assert_eq!(select(&args).unwrap(), "SELECT id FROM users;");
}

#[test]
fn test_values_are_not_escaped() {
    assert_eq!(
        delete(&["t", "name = 'x'; DROP TABLE t"]).unwrap(),
        "DELETE FROM t WHERE name = 'x'; DROP TABLE t;"
    );
}

#[test]
fn test_idempotent() {
    let args = ["t", "c1,c2", "1,2", "3,4"];
    assert_eq!(insert_into(&args).unwrap(), insert_into(&args).unwrap());
}

// ==================== Formatters ====================

#[test]
fn test_formatters_are_total() {
    // Called directly with a bad slice, formatters yield empty text instead of panicking.
    for kind in StatementKind::ALL {
        assert_eq!(filler(kind)(&[]), "", "{kind}");
    }
}

#[test]
fn test_arity_violation_lists_bounds() {
    let err = insert_into(&["t"]).unwrap_err();
    assert!(err.is_arity_violation());
    assert_eq!(err.to_string(), "INSERT_INTO expects 3.. arguments, got 1");
}
