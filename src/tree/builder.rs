//! 解码树构建
//!
//! 从根节点开始维护一个待处理节点队列（按创建顺序处理）。
//! 每个节点按表序检查其成员的下一个解码键：
//!
//! - 只剩一个键：生成叶子测试 `字段 == 值 => 指令`
//! - 还剩多个键：按 (当前节点, 字段, 值) 找到或创建子节点，
//!   首次出现时生成跳转测试，之后的成员复用同一子节点；成员消耗一个键后转入子节点
//!
//! 每一步都至少消耗一个键，因此过程必然终止。
//! 指令表本身只读，构建进度记录在独立的游标数组中。

use std::collections::{HashMap, VecDeque};

use super::diag::{self, DiagnosticKind};
use super::registry::{NodeRegistry, child_name};
use super::{DecodeForest, DispatchEntry, MatcherNode, NodeId, NodeState, Outcome, Test};
use crate::error::{GenError, GenResult};
use crate::isa::{
    BuilderConfig, FieldClass, InstrId, PatternError, ShadowPolicy, SpecTable, TestOrder,
    key_values,
};

/// 单条指令在构建过程中的进度
///
/// 通配键展开时一条指令可能同时位于多个节点，每条路径各持有一个游标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    spec: InstrId,
    node: NodeId,
    /// 下一个待消耗的解码键下标
    key_pos: usize,
}

/// 解码树构建器
pub struct DecodeTreeBuilder<'a> {
    table: &'a SpecTable,
    config: &'a BuilderConfig,
    /// 每条指令每个解码键要比较的值
    key_values: Vec<Vec<Vec<u32>>>,
    nodes: Vec<MatcherNode>,
    registry: NodeRegistry,
    cursors: Vec<Cursor>,
    /// 每个节点当前的成员（游标下标，表序）
    members: Vec<Vec<usize>>,
    worklist: VecDeque<NodeId>,
}

impl<'a> DecodeTreeBuilder<'a> {
    /// 求出全部解码键的比较值并准备根节点
    ///
    /// `SpecTable` 已保证解码键非空且都有对应字段，这里只会报告通配键相关的错误，
    /// 之后的构建过程不会失败
    pub fn new(table: &'a SpecTable, config: &'a BuilderConfig) -> GenResult<Self> {
        let mut all_values = Vec::with_capacity(table.len());
        for spec in table {
            let mut per_key = Vec::with_capacity(spec.decode_keys().len());
            for &key in spec.decode_keys() {
                let pattern = spec.pattern(key);
                let values = key_values(&pattern, config.wildcard_policy(), config.max_expansion())
                    .map_err(|source| match source {
                        PatternError::Ambiguous => GenError::AmbiguousKey {
                            id: spec.id(),
                            name: spec.name().to_string(),
                            field: key.to_string(),
                            pattern: pattern.to_string(),
                        },
                        other => GenError::BadPattern {
                            id: spec.id(),
                            name: spec.name().to_string(),
                            field: key.to_string(),
                            source: other,
                        },
                    })?;
                if !pattern.is_concrete() {
                    log::debug!(
                        "Builder: {} key {} pattern {} -> {:x?} ({})",
                        spec.mnemonic(),
                        key,
                        pattern,
                        values,
                        config.wildcard_policy()
                    );
                }
                per_key.push(values);
            }
            all_values.push(per_key);
        }

        let root = MatcherNode::open(NodeId::ROOT, config.root_name().to_string(), None, Vec::new());
        let cursors: Vec<Cursor> = table
            .iter()
            .map(|spec| Cursor { spec: spec.id(), node: NodeId::ROOT, key_pos: 0 })
            .collect();
        let members = vec![(0..cursors.len()).collect()];

        Ok(Self {
            table,
            config,
            key_values: all_values,
            nodes: vec![root],
            registry: NodeRegistry::new(),
            cursors,
            members,
            worklist: VecDeque::from([NodeId::ROOT]),
        })
    }

    /// 处理全部节点并生成森林
    pub fn build(mut self) -> GenResult<DecodeForest> {
        while let Some(node) = self.worklist.pop_front() {
            self.process(node);
        }

        let diagnostics = match self.config.shadow_policy() {
            ShadowPolicy::Ignore => Vec::new(),
            _ => diag::analyze(&self.nodes, self.table),
        };

        for d in &diagnostics {
            log::warn!("Builder: {}", d);
        }

        if self.config.shadow_policy() == ShadowPolicy::Deny {
            let shadowed: Vec<_> = diagnostics
                .iter()
                .filter(|d| d.kind == DiagnosticKind::Shadowed)
                .cloned()
                .collect();
            if !shadowed.is_empty() {
                return Err(GenError::Shadowed(shadowed));
            }
        }

        let dispatch = self
            .table
            .iter()
            .map(|spec| DispatchEntry {
                id: spec.id(),
                ident: spec.canonical_ident(),
                name: spec.mnemonic().to_string(),
            })
            .collect();

        let forest = DecodeForest::new(self.nodes, dispatch, diagnostics);
        let stats = forest.stats();
        log::info!(
            "Builder: {} instructions -> {} nodes, {} tests, {} leaves, depth {}, {} diagnostics",
            self.table.len(),
            stats.nodes,
            stats.tests,
            stats.leaves,
            stats.max_depth,
            forest.diagnostics().len()
        );
        Ok(forest)
    }

    /// 处理一个节点：生成全部测试，把非终结成员转入子节点，然后关闭节点
    fn process(&mut self, node: NodeId) {
        let table = self.table;
        let members = std::mem::take(&mut self.members[node.index()]);
        debug_assert_eq!(self.nodes[node.index()].state, NodeState::Open);
        log::debug!(
            "Builder: open {} with {} member(s)",
            self.nodes[node.index()].name,
            members.len()
        );

        // (表序, 测试)；同一子节点的跳转测试只保留一条
        let mut leaves: Vec<(usize, Test)> = Vec::new();
        let mut routes: Vec<(usize, Test)> = Vec::new();
        let mut route_index: HashMap<NodeId, usize> = HashMap::new();
        let mut seq = 0usize;

        for cursor_idx in members {
            let cursor = self.cursors[cursor_idx];
            debug_assert_eq!(cursor.node, node);
            let Some(spec) = table.get(cursor.spec) else {
                continue;
            };
            let keys = spec.decode_keys();
            let key = keys[cursor.key_pos];
            let terminal = cursor.key_pos + 1 == keys.len();
            let values = self.key_values[cursor.spec.index()][cursor.key_pos].clone();

            for (n, value) in values.into_iter().enumerate() {
                if terminal {
                    leaves.push((
                        seq,
                        Test {
                            field: key,
                            value,
                            outcome: Outcome::Match(spec.id()),
                            origin: vec![spec.id()],
                        },
                    ));
                    seq += 1;
                    continue;
                }

                let (child, fresh) = self.child(node, key, value);
                if fresh {
                    route_index.insert(child, routes.len());
                    routes.push((
                        seq,
                        Test {
                            field: key,
                            value,
                            outcome: Outcome::Child(child),
                            origin: vec![spec.id()],
                        },
                    ));
                    seq += 1;
                } else if let Some(&i) = route_index.get(&child) {
                    routes[i].1.origin.push(spec.id());
                }

                let next = Cursor { spec: cursor.spec, node: child, key_pos: cursor.key_pos + 1 };
                let target = if n == 0 {
                    self.cursors[cursor_idx] = next;
                    cursor_idx
                } else {
                    self.cursors.push(next);
                    self.cursors.len() - 1
                };
                self.members[child.index()].push(target);
            }
        }

        let tests = match self.config.test_order() {
            TestOrder::LeavesFirst => leaves.into_iter().chain(routes).map(|(_, t)| t).collect(),
            TestOrder::TableOrder => {
                let mut all: Vec<(usize, Test)> = leaves.into_iter().chain(routes).collect();
                all.sort_by_key(|(seq, _)| *seq);
                all.into_iter().map(|(_, t)| t).collect::<Vec<_>>()
            }
        };

        for test in &tests {
            log::trace!(
                "Builder:   if {} == 0x{:x} -> {:?}",
                test.field,
                test.value,
                test.outcome
            );
        }

        let current = &mut self.nodes[node.index()];
        current.tests = tests;
        current.default = Outcome::NoMatch;
        current.state = NodeState::Closed;
        log::debug!("Builder: close {} ({} tests)", current.name, current.tests.len());
    }

    /// 找到或创建 (node, field, value) 对应的子节点
    fn child(&mut self, node: NodeId, field: FieldClass, value: u32) -> (NodeId, bool) {
        let next_id = NodeId(self.nodes.len());
        let (child, fresh) = self.registry.resolve(node, field, value, || next_id);
        if fresh {
            let parent = &self.nodes[node.index()];
            let name = child_name(&parent.name, field, value);
            let mut path = parent.path.clone();
            path.push((field, value));
            self.nodes.push(MatcherNode::open(child, name, Some(node), path));
            self.members.push(Vec::new());
            self.worklist.push_back(child);
        }
        (child, fresh)
    }
}

/// 按配置从指令表构建解码森林
pub fn build(table: &SpecTable, config: &BuilderConfig) -> GenResult<DecodeForest> {
    DecodeTreeBuilder::new(table, config)?.build()
}
