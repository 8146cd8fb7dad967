use crate::error::{Result, Table2mdError};

use super::types::{ColumnRow, IndexRow, TableColumn, TableIndex};

/// 把列定义映射成6个展示字段的Markdown行
///
/// 类型渲染格式: 基础关键字 + enum取值列表 + 长度 + " unsigned" +
/// 字符集/排序规则后缀（两者直接拼接，无分隔符）。
pub fn column_row(column: &TableColumn) -> ColumnRow {
    let mut rendered_type = column.type_name.clone();

    if !column.enum_values.is_empty() {
        rendered_type.push('(');
        rendered_type.push_str(&column.enum_values.join(", "));
        rendered_type.push(')');
    }

    if let Some(length) = &column.length {
        rendered_type.push('(');
        rendered_type.push_str(length);
        rendered_type.push(')');
    }

    if column.unsigned {
        rendered_type.push_str(" unsigned");
    }

    if let Some(charset) = &column.charset {
        rendered_type.push_str(charset);
    }
    if let Some(collation) = &column.collation {
        rendered_type.push_str(collation);
    }

    ColumnRow {
        name: column.name.clone(),
        rendered_type,
        nullability: if column.nullable {
            String::new()
        } else {
            "not null".to_string()
        },
        auto_increment: if column.auto_increment {
            "auto_increment".to_string()
        } else {
            String::new()
        },
        default_value: column.default_value.clone().unwrap_or_default(),
        comment: column.comment.clone().unwrap_or_default(),
    }
}

/// 把索引定义映射成3个展示字段的Markdown行
///
/// 没有成员列的索引是非法输入，直接报错而不是输出残缺的行。
pub fn index_row(index: &TableIndex) -> Result<IndexRow> {
    if index.columns.is_empty() {
        return Err(Table2mdError::EmptyIndex(index.name.clone()));
    }

    Ok(IndexRow {
        name: index.name.clone(),
        kind: index.kind.to_string(),
        columns: index.columns.join(", "),
    })
}
