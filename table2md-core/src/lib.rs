pub mod error;
pub mod sql_doc;

pub use error::{Result, Table2mdError};
pub use sql_doc::convert_sql_to_markdown;
