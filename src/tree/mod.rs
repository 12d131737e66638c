//! 解码树
//!
//! 构建结果是一组匹配节点组成的森林：
//! - `MatcherNode`: 按顺序测试若干 (字段, 值)，第一个命中的测试决定去向
//! - `Outcome`: 跳转到子节点、识别为某条指令，或者不匹配
//! - `DecodeForest`: 全部节点 + 按编号排列的分发表 + 叶子索引 + 诊断

mod builder;
mod decoder;
mod diag;
mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::isa::{FieldClass, InstrId};

pub use builder::{DecodeTreeBuilder, build};
pub use decoder::{InstrDecoder, TableScanDecoder, TreeDecoder};
pub use diag::{Diagnostic, DiagnosticKind, analyze};
pub use registry::NodeRegistry;

/// 节点编号：等于节点在森林中的位置，根节点为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// 节点状态；关闭后不会再被访问
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    Open,
    Closed,
}

/// 测试命中后的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 转到子节点继续解码
    Child(NodeId),
    /// 识别为某条指令
    Match(InstrId),
    /// 解码失败
    NoMatch,
}

/// 一条有序测试：提取 `field`，等于 `value` 时取 `outcome`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub field: FieldClass,
    pub value: u32,
    pub outcome: Outcome,
    /// 产生或经过这条测试的指令（表序）
    pub origin: Vec<InstrId>,
}

impl Test {
    /// 对指令字求值
    #[inline]
    pub fn fires(&self, raw: u32) -> bool {
        self.field.extract(raw) == self.value
    }
}

/// 匹配节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherNode {
    pub id: NodeId,
    /// 由根名称和路径上的 (字段, 值) 序列派生
    pub name: String,
    pub parent: Option<NodeId>,
    /// 从根到此节点已经测试过的 (字段, 值)
    pub path: Vec<(FieldClass, u32)>,
    pub state: NodeState,
    pub tests: Vec<Test>,
    /// 没有测试命中时的去向，始终为 `Outcome::NoMatch`
    pub default: Outcome,
}

impl MatcherNode {
    pub(crate) fn open(
        id: NodeId,
        name: String,
        parent: Option<NodeId>,
        path: Vec<(FieldClass, u32)>,
    ) -> Self {
        Self {
            id,
            name,
            parent,
            path,
            state: NodeState::Open,
            tests: Vec::new(),
            default: Outcome::NoMatch,
        }
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// 第一个命中的测试
    pub fn first_firing(&self, raw: u32) -> Option<(usize, &Test)> {
        self.tests.iter().enumerate().find(|(_, t)| t.fires(raw))
    }
}

/// 叶子位置：某节点中的第几条测试
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeafRef {
    pub node: NodeId,
    pub test: usize,
}

/// 分发表项：指令编号与外部使用的标识符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEntry {
    pub id: InstrId,
    pub ident: String,
    pub name: String,
}

/// 森林统计信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForestStats {
    pub nodes: usize,
    pub tests: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

/// 解码树构建结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeForest {
    nodes: Vec<MatcherNode>,
    dispatch: Vec<DispatchEntry>,
    leaves: Vec<Vec<LeafRef>>,
    diagnostics: Vec<Diagnostic>,
}

impl DecodeForest {
    pub(crate) fn new(
        nodes: Vec<MatcherNode>,
        dispatch: Vec<DispatchEntry>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let mut leaves = vec![Vec::new(); dispatch.len()];
        for node in &nodes {
            for (i, test) in node.tests.iter().enumerate() {
                if let Outcome::Match(id) = test.outcome {
                    if let Some(slot) = leaves.get_mut(id.index()) {
                        slot.push(LeafRef { node: node.id, test: i });
                    }
                }
            }
        }
        Self { nodes, dispatch, leaves, diagnostics }
    }

    /// 根节点；反序列化得到的空森林没有根节点
    pub fn root(&self) -> Option<&MatcherNode> {
        self.node(NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<&MatcherNode> {
        self.nodes.get(id.index())
    }

    /// 全部节点，按处理顺序（即创建顺序）排列
    pub fn nodes(&self) -> &[MatcherNode] {
        &self.nodes
    }

    pub fn node_by_name(&self, name: &str) -> Option<&MatcherNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// 按指令编号排列的分发表
    pub fn dispatch_table(&self) -> &[DispatchEntry] {
        &self.dispatch
    }

    /// 识别出该指令的全部叶子测试
    pub fn leaves_of(&self, id: InstrId) -> &[LeafRef] {
        self.leaves.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 被遮蔽（不可达）的指令
    pub fn unreachable(&self) -> Vec<InstrId> {
        let mut ids: Vec<InstrId> = self
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Shadowed)
            .map(|d| d.instr)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn stats(&self) -> ForestStats {
        ForestStats {
            nodes: self.nodes.len(),
            tests: self.nodes.iter().map(|n| n.tests.len()).sum(),
            leaves: self.leaves.iter().map(Vec::len).sum(),
            max_depth: self.nodes.iter().map(MatcherNode::depth).max().unwrap_or(0),
        }
    }

    fn instr_label(&self, id: InstrId) -> String {
        match self.dispatch.get(id.index()) {
            Some(entry) => format!("{} (#{})", entry.ident, id),
            None => format!("#{}", id),
        }
    }
}

impl fmt::Display for DecodeForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}:", node.name)?;
            for test in &node.tests {
                let target = match test.outcome {
                    Outcome::Child(child) => match self.node(child) {
                        Some(c) => format!("-> {}", c.name),
                        None => format!("-> {}", child),
                    },
                    Outcome::Match(id) => format!("=> {}", self.instr_label(id)),
                    Outcome::NoMatch => "=> no match".to_string(),
                };
                writeln!(f, "    if {} == 0x{:02x} {}", test.field, test.value, target)?;
            }
            writeln!(f, "    else => no match")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
