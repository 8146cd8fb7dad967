mod formatter;
mod parser;
mod renderer;
mod types;

#[cfg(test)]
mod tests;

pub use types::{ColumnRow, IndexKind, IndexRow, TableColumn, TableDefinition, TableIndex};

use crate::error::Result;

/// 把一段SQL文本转换成Markdown文档
///
/// 输入按 `;` 拆分成语句片段，逐个交给SQL解析器。解析失败或者
/// 不是 CREATE TABLE 的片段直接跳过（只记日志），其余的每个表
/// 生成一个Markdown文档块，按输入顺序拼接。
pub fn convert_sql_to_markdown(sql: &str) -> Result<String> {
    let mut output = String::new();

    for fragment in sql.split(';') {
        let Some(table) = parser::parse_create_table(fragment) else {
            continue;
        };

        let columns: Vec<ColumnRow> = table.columns.iter().map(formatter::column_row).collect();

        let mut indexes = Vec::with_capacity(table.indexes.len());
        for index in &table.indexes {
            indexes.push(formatter::index_row(index)?);
        }

        output.push_str(&renderer::render_table_block(&table.name, &columns, &indexes));
    }

    Ok(output)
}
