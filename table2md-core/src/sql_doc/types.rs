use std::fmt;

/// 表列定义
///
/// 直接保留解析器报告的各个属性，渲染逻辑全部放在 formatter 里。
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    /// 基础类型关键字，例如 "int"、"varchar"
    pub type_name: String,
    /// 类型长度，例如 int(10) 的 "10"
    pub length: Option<String>,
    /// enum/set 的取值列表
    pub enum_values: Vec<String>,
    pub unsigned: bool,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub nullable: bool,
    pub auto_increment: bool,
    pub default_value: Option<String>,
    pub comment: Option<String>,
}

/// 索引类别，Display 输出解析器报告的原始类别字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    PrimaryKey,
    UniqueKey,
    Key,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::PrimaryKey => write!(f, "primary key"),
            IndexKind::UniqueKey => write!(f, "unique key"),
            IndexKind::Key => write!(f, "key"),
        }
    }
}

/// 表索引定义
#[derive(Debug, Clone, PartialEq)]
pub struct TableIndex {
    pub name: String,
    pub kind: IndexKind,
    pub columns: Vec<String>,
}

/// 表定义
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<TableColumn>,
    pub indexes: Vec<TableIndex>,
}

/// 列的Markdown行，固定6个展示字段，缺省属性渲染成空字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub name: String,
    pub rendered_type: String,
    pub nullability: String,
    pub auto_increment: String,
    pub default_value: String,
    pub comment: String,
}

impl ColumnRow {
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.name,
            &self.rendered_type,
            &self.nullability,
            &self.auto_increment,
            &self.default_value,
            &self.comment,
        ]
    }
}

/// 索引的Markdown行，固定3个展示字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,
    pub kind: String,
    pub columns: String,
}

impl IndexRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.kind, &self.columns]
    }
}
