//! allude_decgen: 指令解码树生成库
//!
//! 输入一张按表序排列的指令描述表（字段位模式 + 解码键），
//! 生成一组有序匹配节点组成的解码森林，并附带遮蔽诊断与分发表。
//!
//! # 模块结构
//!
//! - `isa`: 字段目录、位模式、指令描述与内置 RISC-V 指令表
//! - `tree`: 解码树构建、诊断与运行时解码
//! - `error`: 错误类型

pub mod error;
pub mod isa;
pub mod tree;

pub use error::{GenError, GenResult};

use isa::{BuilderConfig, SpecTable};
use tree::DecodeForest;

/// 便捷函数：按配置构建解码森林
pub fn synthesize(table: &SpecTable, config: &BuilderConfig) -> GenResult<DecodeForest> {
    tree::build(table, config)
}
