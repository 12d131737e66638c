//! 字段目录与字段键解析
//!
//! 32-bit 指令字被切分为 7 个固定的字段类：
//!
//! ```text
//!  31    27 26 25 24    20 19    15 14  12 11     7 6       0
//! +--------+-----+--------+--------+------+--------+---------+
//! |   R3   | F2  |   R2   |   R1   |  F3  |   RD   |   OP    |
//! +--------+-----+--------+--------+------+--------+---------+
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 字段类
///
/// 声明顺序即目录顺序（从高位到低位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldClass {
    /// rs3 / funct5 [31:27]
    R3,
    /// funct2 [26:25]
    F2,
    /// rs2 [24:20]
    R2,
    /// rs1 [19:15]
    R1,
    /// funct3 [14:12]
    F3,
    /// rd [11:7]，从不作为解码键
    RD,
    /// opcode [6:0]
    OP,
}

impl FieldClass {
    /// 目录中的全部字段类
    pub const ALL: [FieldClass; 7] = [
        FieldClass::R3,
        FieldClass::F2,
        FieldClass::R2,
        FieldClass::R1,
        FieldClass::F3,
        FieldClass::RD,
        FieldClass::OP,
    ];

    /// 字段最低位在指令字中的位置
    #[inline]
    pub const fn offset(self) -> u32 {
        match self {
            FieldClass::R3 => 27,
            FieldClass::F2 => 25,
            FieldClass::R2 => 20,
            FieldClass::R1 => 15,
            FieldClass::F3 => 12,
            FieldClass::RD => 7,
            FieldClass::OP => 0,
        }
    }

    /// 字段宽度（bit）
    #[inline]
    pub const fn width(self) -> u32 {
        match self {
            FieldClass::R3 => 5,
            FieldClass::F2 => 2,
            FieldClass::R2 => 5,
            FieldClass::R1 => 5,
            FieldClass::F3 => 3,
            FieldClass::RD => 5,
            FieldClass::OP => 7,
        }
    }

    /// 字段最高位位置
    #[inline]
    pub const fn msb(self) -> u32 {
        self.offset() + self.width() - 1
    }

    /// 字段内的值掩码（未移位）
    #[inline]
    pub const fn value_mask(self) -> u32 {
        (1u32 << self.width()) - 1
    }

    /// 字段在指令字中的掩码
    #[inline]
    pub const fn mask(self) -> u32 {
        self.value_mask() << self.offset()
    }

    /// 从指令字中提取该字段
    #[inline]
    pub const fn extract(self, raw: u32) -> u32 {
        (raw >> self.offset()) & self.value_mask()
    }

    /// 将字段值放回指令字中的对应位置
    #[inline]
    pub const fn place(self, value: u32) -> u32 {
        (value & self.value_mask()) << self.offset()
    }

    /// 目录中使用的名字
    pub const fn name(self) -> &'static str {
        match self {
            FieldClass::R3 => "R3",
            FieldClass::F2 => "F2",
            FieldClass::R2 => "R2",
            FieldClass::R1 => "R1",
            FieldClass::F3 => "F3",
            FieldClass::RD => "RD",
            FieldClass::OP => "OP",
        }
    }

    /// 按名字解析字段类
    ///
    /// 名字必须与目录完全一致（区分大小写）
    pub fn resolve(name: &str) -> Result<FieldClass, FieldError> {
        FieldClass::ALL
            .iter()
            .copied()
            .find(|class| class.name() == name)
            .ok_or_else(|| FieldError::Unknown(name.to_string()))
    }
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldClass {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldClass::resolve(s)
    }
}

/// 字段解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// 目录中不存在的字段类名
    Unknown(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Unknown(name) => write!(f, "unrecognized field class '{}'", name),
        }
    }
}

impl std::error::Error for FieldError {}
