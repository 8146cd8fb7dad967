use super::formatter::{column_row, index_row};
use super::parser::parse_create_table;
use super::renderer::render_table_block;
use super::*;
use crate::error::Table2mdError;

const FOO_TABLE: &str = r#"
CREATE TABLE foo (
    id int(10) unsigned NOT NULL AUTO_INCREMENT,
    aaa int(10),
    bbb varchar(10),
    ccc varchar(10),
    PRIMARY KEY (id),
    UNIQUE KEY aaa (aaa),
    KEY bbb_ccc (bbb, ccc)
)"#;

#[test]
fn test_parse_create_table() {
    let table = parse_create_table(FOO_TABLE).unwrap();

    assert_eq!(table.name, "foo");

    let column_names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(column_names, vec!["id", "aaa", "bbb", "ccc"]);

    let index_names: Vec<&str> = table.indexes.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(index_names, vec!["PRIMARY", "aaa", "bbb_ccc"]);

    assert_eq!(table.indexes[0].kind, IndexKind::PrimaryKey);
    assert_eq!(table.indexes[1].kind, IndexKind::UniqueKey);
    assert_eq!(table.indexes[2].kind, IndexKind::Key);
}

#[test]
fn test_column_rows() {
    let table = parse_create_table(FOO_TABLE).unwrap();

    let rows: Vec<[String; 6]> = table
        .columns
        .iter()
        .map(|c| column_row(c).cells().map(str::to_string))
        .collect();

    assert_eq!(
        rows,
        vec![
            ["id", "int(10) unsigned", "not null", "auto_increment", "", ""].map(str::to_string),
            ["aaa", "int(10)", "", "", "", ""].map(str::to_string),
            ["bbb", "varchar(10)", "", "", "", ""].map(str::to_string),
            ["ccc", "varchar(10)", "", "", "", ""].map(str::to_string),
        ]
    );
}

#[test]
fn test_index_rows() {
    let table = parse_create_table(FOO_TABLE).unwrap();

    let rows: Vec<[String; 3]> = table
        .indexes
        .iter()
        .map(|i| index_row(i).unwrap().cells().map(str::to_string))
        .collect();

    assert_eq!(
        rows,
        vec![
            ["PRIMARY", "primary key", "id"].map(str::to_string),
            ["aaa", "unique key", "aaa"].map(str::to_string),
            ["bbb_ccc", "key", "bbb, ccc"].map(str::to_string),
        ]
    );
}

#[test]
fn test_default_and_comment() {
    let sql =
        "CREATE TABLE t (memo varchar(10) DEFAULT 'x' COMMENT 'this is memo', n int DEFAULT 0)";
    let table = parse_create_table(sql).unwrap();

    // 字符串字面量默认值不带引号
    let row = column_row(&table.columns[0]);
    assert_eq!(row.default_value, "x");
    assert_eq!(row.comment, "this is memo");

    let row = column_row(&table.columns[1]);
    assert_eq!(row.default_value, "0");
}

#[test]
fn test_enum_type() {
    let sql = "CREATE TABLE t (v enum('a', 'b') NOT NULL)";
    let table = parse_create_table(sql).unwrap();
    let row = column_row(&table.columns[0]);

    assert_eq!(row.rendered_type, "enum(a, b)");
    assert_eq!(row.nullability, "not null");
}

#[test]
fn test_column_level_primary_key() {
    let sql = "CREATE TABLE t (id int PRIMARY KEY)";
    let table = parse_create_table(sql).unwrap();

    assert_eq!(table.indexes.len(), 1);
    assert_eq!(table.indexes[0].name, "PRIMARY");
    assert_eq!(table.indexes[0].kind, IndexKind::PrimaryKey);
    assert_eq!(table.indexes[0].columns, vec!["id".to_string()]);

    // 主键列隐含 not null
    let row = column_row(&table.columns[0]);
    assert_eq!(row.nullability, "not null");
}

#[test]
fn test_formatting_is_idempotent() {
    let table = parse_create_table(FOO_TABLE).unwrap();

    assert_eq!(column_row(&table.columns[0]), column_row(&table.columns[0]));
    assert_eq!(
        index_row(&table.indexes[0]).unwrap(),
        index_row(&table.indexes[0]).unwrap()
    );
}

#[test]
fn test_empty_index_is_rejected() {
    let index = TableIndex {
        name: "broken".to_string(),
        kind: IndexKind::Key,
        columns: Vec::new(),
    };

    match index_row(&index) {
        Err(Table2mdError::EmptyIndex(name)) => assert_eq!(name, "broken"),
        other => panic!("expected EmptyIndex error, got {other:?}"),
    }
}

#[test]
fn test_render_table_block() {
    let columns = vec![ColumnRow {
        name: "id".to_string(),
        rendered_type: "int(10) unsigned".to_string(),
        nullability: "not null".to_string(),
        auto_increment: "auto_increment".to_string(),
        default_value: String::new(),
        comment: String::new(),
    }];
    let indexes = vec![IndexRow {
        name: "PRIMARY".to_string(),
        kind: "primary key".to_string(),
        columns: "id".to_string(),
    }];

    let got = render_table_block("test", &columns, &indexes);

    let want = r#"test Table's Definition

|name|type|not null|auto_increment|default|comment|
|---|---|---|---|---|---|
|id|int(10) unsigned|not null|auto_increment|||

test Table's Indexes

|name|type|columns|
|---|---|---|
|PRIMARY|primary key|id|
"#;

    assert_eq!(got.trim_end(), want.trim_end());
}

#[test]
fn test_skip_non_create_table_statements() {
    let markdown = convert_sql_to_markdown("SELECT 1; CREATE TABLE t (id int)").unwrap();

    assert_eq!(markdown.matches("Table's Definition").count(), 1);
    assert!(markdown.contains("t Table's Definition"));
}

#[test]
fn test_skip_diagnostics_only_at_debug_level() {
    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    // 未开启 -v 时默认 info 级别，跳过片段不产生任何输出
    let captured = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert!(parse_create_table("THIS IS NOT SQL").is_none());
    });
    assert!(captured.0.lock().unwrap().is_empty());

    // debug 级别下能看到跳过诊断
    let captured = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert!(parse_create_table("THIS IS NOT SQL").is_none());
    });
    assert!(!captured.0.lock().unwrap().is_empty());
}

#[test]
fn test_multi_statement_order() {
    let markdown =
        convert_sql_to_markdown("CREATE TABLE a (x int); CREATE TABLE b (y int)").unwrap();

    let pos_a = markdown.find("a Table's Definition").unwrap();
    let pos_b = markdown.find("b Table's Definition").unwrap();
    assert!(pos_a < pos_b);
}

#[test]
fn test_empty_input() {
    assert_eq!(convert_sql_to_markdown("").unwrap(), "");
}

#[test]
fn test_end_to_end() {
    let sql = r#"
CREATE TABLE foo (
    id int(10) unsigned NOT NULL AUTO_INCREMENT,
    aaa int(10),
    PRIMARY KEY (id),
    UNIQUE KEY aaa (aaa)
)"#;

    let markdown = convert_sql_to_markdown(sql).unwrap();

    assert!(markdown.contains("foo Table's Definition"));
    assert!(markdown.contains("|name|type|not null|auto_increment|default|comment|"));
    assert!(markdown.contains("|id|int(10) unsigned|not null|auto_increment|||"));
    assert!(markdown.contains("|aaa|int(10)|||||"));
    assert!(markdown.contains("foo Table's Indexes"));
    assert!(markdown.contains("|PRIMARY|primary key|id|"));
    assert!(markdown.contains("|aaa|unique key|aaa|"));
}
