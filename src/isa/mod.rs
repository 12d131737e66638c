//! 指令描述
//!
//! 本模块负责把指令表变成可供构建器使用的只读数据：
//! - `FieldClass`: 指令字中的固定字段（R3、F2、R2、R1、F3、RD、OP）
//! - `BitPattern`: 由 0/1/X 组成的字段位模式
//! - `InstructionSpec` / `SpecTable`: 校验后的指令描述与指令表
//! - `BuilderConfig`: 构建器配置（根节点名称、通配策略、测试顺序、遮蔽策略）
//! - `riscv`: 内置 RV32IMAFD 指令表

mod config;
mod fields;
mod pattern;
pub mod riscv;
mod spec;

pub use config::{
    BuilderConfig, DEFAULT_MAX_EXPANSION, DEFAULT_ROOT_NAME, ShadowPolicy, TestOrder,
    WildcardPolicy,
};
pub use fields::{FieldClass, FieldError};
pub use pattern::{BitPattern, PatternError, PatternValues, key_values};
pub use spec::{InstrId, InstructionSpec, RawSpec, SpecTable};
