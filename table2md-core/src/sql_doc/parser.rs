use sqlparser::ast::{
    CharacterLength, ColumnDef, ColumnOption, DataType, EnumMember, ExactNumberInfo, Expr,
    Statement, TableConstraint, Value,
};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;
use tracing::debug;

use super::types::{IndexKind, TableColumn, TableDefinition, TableIndex};

/// 解析一个语句片段，只保留 CREATE TABLE
///
/// 解析失败或者不是 CREATE TABLE 都返回 None，由调用方跳过该片段。
pub fn parse_create_table(sql: &str) -> Option<TableDefinition> {
    if sql.trim().is_empty() {
        return None;
    }

    let dialect = MySqlDialect {};
    let statements = match Parser::parse_sql(&dialect, sql) {
        Ok(statements) => statements,
        Err(e) => {
            debug!("解析 SQL 语句失败: {} - 错误: {}", sql.trim(), e);
            return None;
        }
    };

    let create_table = statements.into_iter().find_map(|statement| match statement {
        Statement::CreateTable(create_table) => Some(create_table),
        _ => None,
    });

    let Some(create_table) = create_table else {
        debug!("语句不是 CREATE TABLE，跳过");
        return None;
    };

    let table_name = create_table.name.to_string();
    debug!("解析表: {}", table_name);

    let mut table_columns = Vec::new();
    let mut table_indexes = Vec::new();
    let mut primary_key_columns = Vec::new();

    // 解析列定义
    for column in &create_table.columns {
        // 检查是否是列级别的主键
        if is_column_primary_key(column) {
            primary_key_columns.push(column.name.to_string());
        }

        table_columns.push(parse_column_definition(column));
    }

    // 列级别的主键也算一个索引
    if !primary_key_columns.is_empty() {
        table_indexes.push(TableIndex {
            name: "PRIMARY".to_string(),
            kind: IndexKind::PrimaryKey,
            columns: primary_key_columns,
        });
    }

    // 解析约束（包括索引）
    for constraint in &create_table.constraints {
        if let Some(index) = parse_table_constraint(constraint) {
            table_indexes.push(index);
        }
    }

    Some(TableDefinition {
        name: table_name,
        columns: table_columns,
        indexes: table_indexes,
    })
}

/// 解析列定义
fn parse_column_definition(column: &ColumnDef) -> TableColumn {
    let (type_name, length, enum_values, unsigned) = decompose_data_type(&column.data_type);

    let mut parsed = TableColumn {
        name: column.name.to_string(),
        type_name,
        length,
        enum_values,
        unsigned,
        charset: None,
        collation: None,
        nullable: true,
        auto_increment: false,
        default_value: None,
        comment: None,
    };

    // 检查列选项
    for option in &column.options {
        match &option.option {
            ColumnOption::NotNull => {
                parsed.nullable = false;
            }
            ColumnOption::Default(expr) => {
                parsed.default_value = Some(default_value_text(expr));
            }
            ColumnOption::Comment(c) => {
                parsed.comment = Some(c.clone());
            }
            ColumnOption::Unique { is_primary, .. } => {
                if *is_primary {
                    parsed.nullable = false; // 主键不能为空
                }
            }
            ColumnOption::CharacterSet(name) => {
                parsed.charset = Some(name.to_string());
            }
            ColumnOption::Collation(name) => {
                parsed.collation = Some(name.to_string());
            }
            ColumnOption::DialectSpecific(tokens) => {
                // 检查是否是AUTO_INCREMENT
                let token_str = tokens
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_uppercase();
                if token_str.contains("AUTO_INCREMENT") {
                    parsed.auto_increment = true;
                }
            }
            _ => {}
        }
    }

    parsed
}

/// 默认值取字面文本，字符串字面量去掉引号
fn default_value_text(expr: &Expr) -> String {
    match expr {
        Expr::Value(value) => match &value.value {
            Value::SingleQuotedString(s) | Value::DoubleQuotedString(s) => s.clone(),
            _ => format!("{expr}"),
        },
        _ => format!("{expr}"),
    }
}

/// 解析表约束
fn parse_table_constraint(constraint: &TableConstraint) -> Option<TableIndex> {
    match constraint {
        TableConstraint::PrimaryKey { columns, .. } => {
            let column_names: Vec<String> = columns.iter().map(|col| col.to_string()).collect();

            Some(TableIndex {
                name: "PRIMARY".to_string(),
                kind: IndexKind::PrimaryKey,
                columns: column_names,
            })
        }
        TableConstraint::Unique {
            name,
            index_name,
            columns,
            ..
        } => {
            let column_names: Vec<String> = columns.iter().map(|col| col.to_string()).collect();

            let index_name = name
                .as_ref()
                .or(index_name.as_ref())
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("unique_{}", column_names.join("_")));

            Some(TableIndex {
                name: index_name,
                kind: IndexKind::UniqueKey,
                columns: column_names,
            })
        }
        TableConstraint::Index { name, columns, .. } => {
            let column_names: Vec<String> = columns.iter().map(|col| col.to_string()).collect();

            let index_name = name
                .as_ref()
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("idx_{}", column_names.join("_")));

            Some(TableIndex {
                name: index_name,
                kind: IndexKind::Key,
                columns: column_names,
            })
        }
        _ => None,
    }
}

/// 拆解数据类型: (基础关键字, 长度, enum取值, 是否unsigned)
fn decompose_data_type(data_type: &DataType) -> (String, Option<String>, Vec<String>, bool) {
    let (type_name, length, enum_values, unsigned) = match data_type {
        DataType::TinyInt(len) => ("tinyint", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::TinyIntUnsigned(len) => ("tinyint", len.map(|l| l.to_string()), Vec::new(), true),
        DataType::SmallInt(len) => ("smallint", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::SmallIntUnsigned(len) => {
            ("smallint", len.map(|l| l.to_string()), Vec::new(), true)
        }
        DataType::MediumInt(len) => ("mediumint", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::MediumIntUnsigned(len) => {
            ("mediumint", len.map(|l| l.to_string()), Vec::new(), true)
        }
        DataType::Int(len) => ("int", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::IntUnsigned(len) => ("int", len.map(|l| l.to_string()), Vec::new(), true),
        DataType::Integer(len) => ("integer", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::IntegerUnsigned(len) => ("integer", len.map(|l| l.to_string()), Vec::new(), true),
        DataType::BigInt(len) => ("bigint", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::BigIntUnsigned(len) => ("bigint", len.map(|l| l.to_string()), Vec::new(), true),
        DataType::Char(len) => ("char", character_length(len), Vec::new(), false),
        DataType::Varchar(len) => ("varchar", character_length(len), Vec::new(), false),
        DataType::Text => ("text", None, Vec::new(), false),
        DataType::TinyText => ("tinytext", None, Vec::new(), false),
        DataType::MediumText => ("mediumtext", None, Vec::new(), false),
        DataType::LongText => ("longtext", None, Vec::new(), false),
        DataType::Blob(len) => ("blob", len.map(|l| l.to_string()), Vec::new(), false),
        DataType::Decimal(info) => ("decimal", number_info(info), Vec::new(), false),
        DataType::Numeric(info) => ("numeric", number_info(info), Vec::new(), false),
        DataType::Float(_) => ("float", None, Vec::new(), false),
        DataType::Double(_) => ("double", None, Vec::new(), false),
        DataType::Boolean => ("boolean", None, Vec::new(), false),
        DataType::Date => ("date", None, Vec::new(), false),
        DataType::Time(_, _) => ("time", None, Vec::new(), false),
        DataType::Datetime(precision) => {
            ("datetime", precision.map(|p| p.to_string()), Vec::new(), false)
        }
        DataType::Timestamp(_, _) => ("timestamp", None, Vec::new(), false),
        DataType::JSON => ("json", None, Vec::new(), false),
        DataType::Enum(members, _) => (
            "enum",
            None,
            members.iter().map(enum_member_value).collect(),
            false,
        ),
        // 其他类型直接用解析器的文本表示
        other => {
            return (other.to_string().to_lowercase(), None, Vec::new(), false);
        }
    };

    (type_name.to_string(), length, enum_values, unsigned)
}

fn character_length(len: &Option<CharacterLength>) -> Option<String> {
    len.as_ref().map(|l| match l {
        CharacterLength::IntegerLength { length, .. } => length.to_string(),
        CharacterLength::Max => "max".to_string(),
    })
}

fn number_info(info: &ExactNumberInfo) -> Option<String> {
    match info {
        ExactNumberInfo::None => None,
        ExactNumberInfo::Precision(precision) => Some(precision.to_string()),
        ExactNumberInfo::PrecisionAndScale(precision, scale) => {
            Some(format!("{precision},{scale}"))
        }
    }
}

fn enum_member_value(member: &EnumMember) -> String {
    match member {
        EnumMember::Name(name) => name.clone(),
        EnumMember::NamedValue(name, _) => name.clone(),
    }
}

/// 检查列是否是列级别的主键
fn is_column_primary_key(column: &ColumnDef) -> bool {
    for option in &column.options {
        if let ColumnOption::Unique { is_primary, .. } = &option.option {
            if *is_primary {
                return true;
            }
        }
    }
    false
}
