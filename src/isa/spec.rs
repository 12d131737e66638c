//! 指令描述表
//!
//! `RawSpec` 是外部编写、按名字索引的输入形式；
//! `InstructionSpec` 是经过校验、字段已解析的只读描述。
//! 指令在表中的位置就是它的 `InstrId`，在整个生成过程中保持不变。

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::fields::FieldClass;
use super::pattern::{BitPattern, PatternError};
use crate::error::{GenError, GenResult};

/// 指令编号：等于指令在表中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrId(pub usize);

impl InstrId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for InstrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 未校验的指令描述（JSON 输入形式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpec {
    /// 助记符，可带操作数说明，如 `"addi d[11:7],d[19:15],h[31:20]"`
    pub name: String,
    /// 字段类名 → 位模式
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// 按优先级排列的解码键
    pub decode_keys: Vec<String>,
}

impl RawSpec {
    pub fn new(name: &str, fields: &[(&str, &str)], decode_keys: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(class, pattern)| (class.to_string(), pattern.to_string()))
                .collect(),
            decode_keys: decode_keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// 校验后的指令描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSpec {
    id: InstrId,
    name: String,
    fields: BTreeMap<FieldClass, BitPattern>,
    decode_keys: Vec<FieldClass>,
}

impl InstructionSpec {
    /// 校验并解析一条原始描述
    pub fn from_raw(id: InstrId, raw: &RawSpec) -> GenResult<Self> {
        let name = raw.name.clone();

        if raw.decode_keys.is_empty() {
            return Err(GenError::EmptyDecodeKeys { id, name });
        }

        let mut fields = BTreeMap::new();
        for (class_name, text) in &raw.fields {
            let class = FieldClass::resolve(class_name).map_err(|source| GenError::UnknownField {
                id,
                name: name.clone(),
                source,
            })?;
            let pattern = BitPattern::parse(text)
                .and_then(|p| {
                    if p.width() == class.width() {
                        Ok(p)
                    } else {
                        Err(PatternError::WidthMismatch {
                            expected: class.width(),
                            found: p.width(),
                        })
                    }
                })
                .map_err(|source| GenError::BadPattern {
                    id,
                    name: name.clone(),
                    field: class_name.clone(),
                    source,
                })?;
            fields.insert(class, pattern);
        }

        let mut decode_keys = Vec::with_capacity(raw.decode_keys.len());
        for key in &raw.decode_keys {
            let class = FieldClass::resolve(key).map_err(|source| GenError::UnknownField {
                id,
                name: name.clone(),
                source,
            })?;
            if !fields.contains_key(&class) {
                return Err(GenError::MissingField { id, name, field: key.clone() });
            }
            decode_keys.push(class);
        }

        Ok(Self { id, name, fields, decode_keys })
    }

    #[inline]
    pub fn id(&self) -> InstrId {
        self.id
    }

    /// 完整名称（含操作数说明）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 助记符：名称中第一个空白前的部分
    pub fn mnemonic(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// 供外部使用的规范标识符：大写，非字母数字字符统一为 `_`
    ///
    /// `fence.i` → `FENCE_I`，`amoswap.w` → `AMOSWAP_W`
    pub fn canonical_ident(&self) -> String {
        self.mnemonic()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect()
    }

    pub fn decode_keys(&self) -> &[FieldClass] {
        &self.decode_keys
    }

    pub fn fields(&self) -> &BTreeMap<FieldClass, BitPattern> {
        &self.fields
    }

    /// 字段模式；未给出的字段视为全通配
    pub fn pattern(&self, class: FieldClass) -> BitPattern {
        self.fields
            .get(&class)
            .copied()
            .unwrap_or(BitPattern::wildcard(class.width()))
    }

    /// 整个指令字上的确定位掩码
    pub fn word_mask(&self) -> u32 {
        self.fields
            .iter()
            .fold(0, |acc, (class, p)| acc | (p.care_mask() << class.offset()))
    }

    /// 整个指令字上确定位的取值
    pub fn word_match(&self) -> u32 {
        self.fields
            .iter()
            .fold(0, |acc, (class, p)| acc | (p.care_bits() << class.offset()))
    }

    /// 检查指令字是否符合全部字段模式
    #[inline]
    pub fn accepts(&self, raw: u32) -> bool {
        (raw & self.word_mask()) == self.word_match()
    }

    /// 构造一个符合该描述的指令字（通配位取 0）
    pub fn sample_word(&self) -> u32 {
        self.word_match()
    }
}

/// 指令描述表，位置顺序即指令编号顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecTable {
    specs: Vec<InstructionSpec>,
}

impl SpecTable {
    /// 按顺序校验全部原始描述，遇到第一个错误即返回
    pub fn from_raw(raw: &[RawSpec]) -> GenResult<Self> {
        let specs = raw
            .iter()
            .enumerate()
            .map(|(i, r)| InstructionSpec::from_raw(InstrId(i), r))
            .collect::<GenResult<Vec<_>>>()?;
        Ok(Self { specs })
    }

    /// 从 JSON 文本加载
    pub fn from_json_str(text: &str) -> GenResult<Self> {
        let raw: Vec<RawSpec> = serde_json::from_str(text)?;
        Self::from_raw(&raw)
    }

    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, id: InstrId) -> Option<&InstructionSpec> {
        self.specs.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstructionSpec> {
        self.specs.iter()
    }

    pub fn specs(&self) -> &[InstructionSpec] {
        &self.specs
    }

    /// 按助记符查找第一条匹配的指令
    pub fn find(&self, mnemonic: &str) -> Option<&InstructionSpec> {
        self.specs.iter().find(|s| s.mnemonic() == mnemonic)
    }
}

impl<'a> IntoIterator for &'a SpecTable {
    type Item = &'a InstructionSpec;
    type IntoIter = std::slice::Iter<'a, InstructionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
