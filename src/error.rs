//! 生成器错误类型
//!
//! 所有错误都在构建开始前或构建结束时整体返回，不会产生部分解码树

use std::fmt;
use std::io;

use crate::isa::{FieldError, InstrId, PatternError};
use crate::tree::Diagnostic;

/// 解码树生成错误
#[derive(Debug)]
pub enum GenError {
    /// 解码键列表为空
    EmptyDecodeKeys { id: InstrId, name: String },
    /// 解码键引用的字段在 `fields` 中缺失
    MissingField { id: InstrId, name: String, field: String },
    /// 字段类不在目录中
    UnknownField { id: InstrId, name: String, source: FieldError },
    /// 位模式非法
    BadPattern { id: InstrId, name: String, field: String, source: PatternError },
    /// 解码键含通配位（`WildcardPolicy::Reject`）
    AmbiguousKey { id: InstrId, name: String, field: String, pattern: String },
    /// 存在不可达指令（`ShadowPolicy::Deny`）
    Shadowed(Vec<Diagnostic>),
    /// IO 错误
    Io(io::Error),
    /// 指令表 JSON 解析错误
    Table(serde_json::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::EmptyDecodeKeys { id, name } => {
                write!(f, "instruction #{} '{}' has no decode keys", id, name)
            }
            GenError::MissingField { id, name, field } => write!(
                f,
                "instruction #{} '{}' decodes on {} but has no pattern for it",
                id, name, field
            ),
            GenError::UnknownField { id, name, source } => {
                write!(f, "instruction #{} '{}': {}", id, name, source)
            }
            GenError::BadPattern { id, name, field, source } => write!(
                f,
                "instruction #{} '{}': bad pattern for {}: {}",
                id, name, field, source
            ),
            GenError::AmbiguousKey { id, name, field, pattern } => write!(
                f,
                "instruction #{} '{}': decode key {} has wildcard pattern '{}'",
                id, name, field, pattern
            ),
            GenError::Shadowed(diags) => {
                write!(f, "{} unreachable decode test(s)", diags.len())?;
                for d in diags {
                    write!(f, "\n  - {}", d)?;
                }
                Ok(())
            }
            GenError::Io(e) => write!(f, "IO error: {}", e),
            GenError::Table(e) => write!(f, "table parse error: {}", e),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::UnknownField { source, .. } => Some(source),
            GenError::BadPattern { source, .. } => Some(source),
            GenError::Io(e) => Some(e),
            GenError::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::Table(e)
    }
}

pub type GenResult<T> = Result<T, GenError>;
