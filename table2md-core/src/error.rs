use thiserror::Error;

pub type Result<T> = std::result::Result<T, Table2mdError>;

#[derive(Error, Debug)]
pub enum Table2mdError {
    #[error("索引 '{0}' 没有任何成员列")]
    EmptyIndex(String),

    #[error("自定义错误: {0}")]
    Custom(String),
}

impl Table2mdError {
    pub fn custom(msg: impl Into<String>) -> Self {
        Table2mdError::Custom(msg.into())
    }
}
