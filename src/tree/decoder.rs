//! 运行时解码
//!
//! `TreeDecoder` 按生成的森林解码：从根节点开始按顺序求值测试，
//! 第一个命中的测试决定去向，全部未命中即解码失败。
//! `TableScanDecoder` 逐条比较完整的 mask/match，作为对照。

use super::{DecodeForest, NodeId, Outcome};
use crate::isa::{InstrId, SpecTable};

/// 指令解码器
pub trait InstrDecoder {
    /// 解码器名称
    fn name(&self) -> &str;

    /// 尝试解码指令，失败返回 `None`
    fn decode(&self, raw: u32) -> Option<InstrId>;
}

/// 基于解码森林的解码器
#[derive(Debug, Clone, Copy)]
pub struct TreeDecoder<'a> {
    forest: &'a DecodeForest,
}

impl<'a> TreeDecoder<'a> {
    pub fn new(forest: &'a DecodeForest) -> Self {
        Self { forest }
    }

    /// 解码并返回经过的节点
    pub fn decode_path(&self, raw: u32) -> (Option<InstrId>, Vec<NodeId>) {
        let mut path = Vec::new();
        let mut current = self.forest.root();

        while let Some(node) = current {
            path.push(node.id);
            let outcome = node
                .first_firing(raw)
                .map(|(_, test)| test.outcome)
                .unwrap_or(node.default);
            match outcome {
                Outcome::Child(child) => current = self.forest.node(child),
                Outcome::Match(id) => return (Some(id), path),
                Outcome::NoMatch => return (None, path),
            }
        }

        (None, path)
    }
}

impl InstrDecoder for TreeDecoder<'_> {
    fn name(&self) -> &str {
        self.forest.root().map(|root| root.name.as_str()).unwrap_or("")
    }

    fn decode(&self, raw: u32) -> Option<InstrId> {
        self.decode_path(raw).0
    }
}

/// 线性扫描解码器：返回第一条完整模式匹配的指令
#[derive(Debug, Clone, Copy)]
pub struct TableScanDecoder<'a> {
    table: &'a SpecTable,
}

impl<'a> TableScanDecoder<'a> {
    pub fn new(table: &'a SpecTable) -> Self {
        Self { table }
    }
}

impl InstrDecoder for TableScanDecoder<'_> {
    fn name(&self) -> &str {
        "table-scan"
    }

    fn decode(&self, raw: u32) -> Option<InstrId> {
        self.table.iter().find(|spec| spec.accepts(raw)).map(|spec| spec.id())
    }
}
