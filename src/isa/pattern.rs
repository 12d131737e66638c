//! 位模式与模式值转换
//!
//! 位模式是一个由 `0`、`1`、`X` 组成的定长字符串（高位在前），
//! `X` 表示该位可以是任意值。

use std::fmt;
use std::str::FromStr;

use super::config::WildcardPolicy;

/// 字段位模式
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPattern {
    /// 宽度（bit）
    width: u32,
    /// 确定位掩码：1 表示该位为 `0`/`1`
    care: u32,
    /// 确定位上的取值
    bits: u32,
}

impl BitPattern {
    /// 全通配模式
    pub const fn wildcard(width: u32) -> Self {
        Self { width, care: 0, bits: 0 }
    }

    /// 全确定模式
    pub const fn exact(width: u32, value: u32) -> Self {
        let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
        Self { width, care: mask, bits: value & mask }
    }

    /// 解析位模式字符串
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        let width = text.chars().count();
        if width > 32 {
            return Err(PatternError::TooWide(width));
        }

        let mut care = 0u32;
        let mut bits = 0u32;
        for (pos, ch) in text.chars().enumerate() {
            care <<= 1;
            bits <<= 1;
            match ch {
                '0' => care |= 1,
                '1' => {
                    care |= 1;
                    bits |= 1;
                }
                'X' | 'x' => {}
                other => return Err(PatternError::InvalidChar { ch: other, pos }),
            }
        }

        Ok(Self { width: width as u32, care, bits })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 模式宽度内的全 1 掩码
    #[inline]
    pub fn full_mask(&self) -> u32 {
        if self.width >= 32 { u32::MAX } else { (1u32 << self.width) - 1 }
    }

    /// 确定位掩码（未移位）
    #[inline]
    pub fn care_mask(&self) -> u32 {
        self.care
    }

    /// 确定位的取值（未移位）
    #[inline]
    pub fn care_bits(&self) -> u32 {
        self.bits
    }

    /// 通配位掩码（未移位）
    #[inline]
    pub fn wildcard_mask(&self) -> u32 {
        !self.care & self.full_mask()
    }

    /// 是否不含通配位
    #[inline]
    pub fn is_concrete(&self) -> bool {
        self.wildcard_mask() == 0
    }

    /// 全部位都为通配
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.care == 0
    }

    /// 不含通配位时的整数值
    pub fn concrete_value(&self) -> Option<u32> {
        self.is_concrete().then_some(self.bits)
    }

    /// 检查某个字段值是否被该模式接受
    #[inline]
    pub fn accepts(&self, value: u32) -> bool {
        (value & self.care) == self.bits
    }

    /// 模式可取的具体值个数
    pub fn value_count(&self) -> u64 {
        1u64 << self.wildcard_mask().count_ones()
    }

    /// 按升序枚举模式接受的全部具体值
    pub fn values(&self) -> PatternValues {
        PatternValues {
            base: self.bits,
            free: self.wildcard_mask(),
            next: Some(0),
        }
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in (0..self.width).rev() {
            let ch = if self.care & (1 << bit) == 0 {
                'X'
            } else if self.bits & (1 << bit) != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPattern({})", self)
    }
}

impl FromStr for BitPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitPattern::parse(s)
    }
}

/// 位模式的具体值迭代器
///
/// 依次枚举通配位的全部子集，结果按升序排列
#[derive(Debug, Clone)]
pub struct PatternValues {
    base: u32,
    free: u32,
    next: Option<u32>,
}

impl Iterator for PatternValues {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let sub = self.next?;
        self.next = if sub == self.free {
            None
        } else {
            Some(sub.wrapping_sub(self.free) & self.free)
        };
        Some(self.base | sub)
    }
}

/// 位模式错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// 空模式
    Empty,
    /// 超过 32 位
    TooWide(usize),
    /// 非法字符
    InvalidChar { ch: char, pos: usize },
    /// 宽度与字段类不一致
    WidthMismatch { expected: u32, found: u32 },
    /// 解码位上存在通配位（`WildcardPolicy::Reject`）
    Ambiguous,
    /// 展开后的具体值超过上限
    TooManyValues { count: u64, limit: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => write!(f, "empty bit pattern"),
            PatternError::TooWide(w) => write!(f, "bit pattern of {} bits exceeds 32", w),
            PatternError::InvalidChar { ch, pos } => {
                write!(f, "invalid character '{}' at position {}", ch, pos)
            }
            PatternError::WidthMismatch { expected, found } => {
                write!(f, "expected {} bits, found {}", expected, found)
            }
            PatternError::Ambiguous => write!(f, "wildcard inside a decode key"),
            PatternError::TooManyValues { count, limit } => {
                write!(f, "wildcards expand to {} values (limit {})", count, limit)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// 模式值转换：求出一个解码键需要比较的整数值
///
/// - 不含通配位：唯一的整数值
/// - `Expand`：模式接受的全部具体值（升序）
/// - `ZeroFill`：通配位按 0 计
/// - `Reject`：返回 `PatternError::Ambiguous`
pub fn key_values(
    pattern: &BitPattern,
    policy: WildcardPolicy,
    max_expansion: usize,
) -> Result<Vec<u32>, PatternError> {
    if let Some(value) = pattern.concrete_value() {
        return Ok(vec![value]);
    }

    match policy {
        WildcardPolicy::Reject => Err(PatternError::Ambiguous),
        WildcardPolicy::ZeroFill => Ok(vec![pattern.care_bits()]),
        WildcardPolicy::Expand => {
            let count = pattern.value_count();
            if count > max_expansion as u64 {
                return Err(PatternError::TooManyValues { count, limit: max_expansion });
            }
            Ok(pattern.values().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concrete() {
        let p = BitPattern::parse("1100011").unwrap();
        assert_eq!(p.width(), 7);
        assert!(p.is_concrete());
        assert_eq!(p.concrete_value(), Some(0x63));
        assert_eq!(p.to_string(), "1100011");
    }

    #[test]
    fn test_parse_wildcard() {
        let p = BitPattern::parse("0000X").unwrap();
        assert!(!p.is_concrete());
        assert_eq!(p.concrete_value(), None);
        assert_eq!(p.wildcard_mask(), 0b00001);
        assert!(p.accepts(0));
        assert!(p.accepts(1));
        assert!(!p.accepts(2));
        assert_eq!(p.to_string(), "0000X");

        let all = BitPattern::parse("xxx").unwrap();
        assert!(all.is_wildcard());
        assert_eq!(all, BitPattern::wildcard(3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(BitPattern::parse(""), Err(PatternError::Empty));
        assert_eq!(
            BitPattern::parse("01-1"),
            Err(PatternError::InvalidChar { ch: '-', pos: 2 })
        );
        assert_eq!(
            BitPattern::parse(&"0".repeat(33)),
            Err(PatternError::TooWide(33))
        );
    }

    #[test]
    fn test_values_ascending() {
        let p = BitPattern::parse("1X0X").unwrap();
        let values: Vec<u32> = p.values().collect();
        assert_eq!(values, vec![0b1000, 0b1001, 0b1100, 0b1101]);
        assert_eq!(p.value_count(), 4);

        let exact = BitPattern::exact(3, 0b101);
        assert_eq!(exact.values().collect::<Vec<_>>(), vec![0b101]);
    }

    #[test]
    fn test_key_values_policies() {
        let fence_r3 = BitPattern::parse("0000X").unwrap();
        assert_eq!(
            key_values(&fence_r3, WildcardPolicy::Reject, 32),
            Err(PatternError::Ambiguous)
        );
        assert_eq!(key_values(&fence_r3, WildcardPolicy::ZeroFill, 32), Ok(vec![0]));
        assert_eq!(key_values(&fence_r3, WildcardPolicy::Expand, 32), Ok(vec![0, 1]));

        // 低位确定、高位通配时 ZeroFill 仍保留确定位的位置
        let upper = BitPattern::parse("X1").unwrap();
        assert_eq!(key_values(&upper, WildcardPolicy::ZeroFill, 32), Ok(vec![0b01]));
    }

    #[test]
    fn test_key_values_concrete_ignores_policy() {
        let p = BitPattern::parse("101").unwrap();
        for policy in [WildcardPolicy::Reject, WildcardPolicy::ZeroFill, WildcardPolicy::Expand] {
            assert_eq!(key_values(&p, policy, 1), Ok(vec![5]));
        }
    }

    #[test]
    fn test_expand_limit() {
        let p = BitPattern::parse("XXXXX").unwrap();
        assert_eq!(
            key_values(&p, WildcardPolicy::Expand, 8),
            Err(PatternError::TooManyValues { count: 32, limit: 8 })
        );
    }
}
