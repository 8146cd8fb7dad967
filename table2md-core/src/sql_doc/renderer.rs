use super::types::{ColumnRow, IndexRow};

const COLUMN_HEADER: [&str; 6] = [
    "name",
    "type",
    "not null",
    "auto_increment",
    "default",
    "comment",
];

const INDEX_HEADER: [&str; 3] = ["name", "type", "columns"];

/// 渲染一个表定义的完整Markdown文档块
///
/// 标题行 + 列表格 + 标题行 + 索引表格，行内字段用 `|` 分隔，
/// 首尾都带管道符，保证Markdown表格对齐。
pub fn render_table_block(table_name: &str, columns: &[ColumnRow], indexes: &[IndexRow]) -> String {
    let mut buf = String::new();

    buf.push_str(table_name);
    buf.push_str(" Table's Definition\n\n");
    write_header(&mut buf, &COLUMN_HEADER);
    for row in columns {
        write_row(&mut buf, &row.cells());
    }

    buf.push('\n');
    buf.push_str(table_name);
    buf.push_str(" Table's Indexes\n\n");
    write_header(&mut buf, &INDEX_HEADER);
    for row in indexes {
        write_row(&mut buf, &row.cells());
    }
    buf.push('\n');

    buf
}

fn write_header(buf: &mut String, header: &[&str]) {
    write_row(buf, header);

    buf.push('|');
    for _ in header {
        buf.push_str("---|");
    }
    buf.push('\n');
}

fn write_row(buf: &mut String, cells: &[&str]) {
    buf.push('|');
    for cell in cells {
        buf.push_str(cell);
        buf.push('|');
    }
    buf.push('\n');
}
