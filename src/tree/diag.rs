//! 遮蔽与重叠诊断
//!
//! 节点内的测试按顺序求值、第一个命中者生效。对每条测试经过的每条指令，
//! 计算"到达该测试且属于该指令"的指令字集合 W（由指令的字段模式、
//! 节点路径和当前测试值决定，用 mask/match 表示），再与之前的测试比较：
//!
//! - 之前的测试合起来对 W 中所有指令字都命中：`Shadowed`，该路径不可达
//! - 只对部分指令字命中：`Overlap`
//!
//! W 是各字段取值集合的乘积，每条测试只约束一个字段，
//! 因此 W 被完全截获当且仅当存在某个字段，W 在该字段上允许的每个值都出现在之前的测试中。

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MatcherNode, NodeId, Test};
use crate::isa::{FieldClass, InstrId, InstructionSpec, SpecTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// 被之前的测试完全截获
    Shadowed,
    /// 被之前的测试部分截获
    Overlap,
}

/// 一条诊断：`instr` 经由 `node` 的第 `test` 条测试，被 `blockers` 中的测试截获
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub node: NodeId,
    pub node_name: String,
    pub test: usize,
    pub instr: InstrId,
    pub instr_name: String,
    /// 截获方测试的下标（升序），都测试 `blocker_field`
    pub blockers: Vec<usize>,
    pub blocker_field: FieldClass,
    /// 与 `blockers` 一一对应
    pub blocker_values: Vec<u32>,
    /// 截获方的指令（按测试顺序，去重）
    pub blocked_by: Vec<InstrId>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::Shadowed => "shadowed",
            DiagnosticKind::Overlap => "partially shadowed",
        };
        let from = self.blocked_by.iter().map(|id| id.0).collect::<Vec<_>>();
        write!(f, "{} (#{}) {} at {} test #{} by ", self.instr_name, self.instr, kind, self.node_name, self.test)?;
        match (self.blockers.as_slice(), self.blocker_values.as_slice()) {
            ([test], [value]) => write!(
                f,
                "test #{} ({} == 0x{:x}, from {:?})",
                test, self.blocker_field, value, from
            ),
            (tests, values) => {
                let tests = tests.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>();
                let values = values.iter().map(|v| format!("0x{:x}", v)).collect::<Vec<_>>();
                write!(
                    f,
                    "tests {} ({} in {{{}}}, from {:?})",
                    tests.join(", "),
                    self.blocker_field,
                    values.join(", "),
                    from
                )
            }
        }
    }
}

/// 用 mask/match 表示的指令字集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordSet {
    mask: u32,
    value: u32,
}

impl WordSet {
    fn of(spec: &InstructionSpec) -> Self {
        Self { mask: spec.word_mask(), value: spec.word_match() }
    }

    /// 再约束一个字段为确定值
    fn constrain(self, field: FieldClass, value: u32) -> Self {
        Self {
            mask: self.mask | field.mask(),
            value: (self.value & !field.mask()) | field.place(value),
        }
    }

    /// 测试对集合中至少一个指令字命中
    fn touched_by(&self, test: &Test) -> bool {
        let m = test.field.mask();
        ((self.value ^ test.field.place(test.value)) & self.mask & m) == 0
    }

    /// 集合在某字段上允许的取值个数
    fn value_count(&self, field: FieldClass) -> usize {
        let fixed = (self.mask & field.mask()).count_ones();
        1 << (field.width() - fixed)
    }
}

/// 分析全部节点
pub fn analyze(nodes: &[MatcherNode], table: &SpecTable) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for node in nodes {
        analyze_node(node, table, &mut out);
    }
    out
}

fn analyze_node(node: &MatcherNode, table: &SpecTable, out: &mut Vec<Diagnostic>) {
    for (j, test) in node.tests.iter().enumerate() {
        for &id in &test.origin {
            let Some(spec) = table.get(id) else {
                continue;
            };
            let words = node
                .path
                .iter()
                .fold(WordSet::of(spec), |w, &(field, value)| w.constrain(field, value))
                .constrain(test.field, test.value);

            // 每个字段上命中 W 的之前测试（下标，值不重复）
            let mut hits: BTreeMap<FieldClass, Vec<usize>> = BTreeMap::new();
            let mut overlap = None;
            let mut shadow = None;
            for (i, earlier) in node.tests[..j].iter().enumerate() {
                if earlier.origin.contains(&id) || !words.touched_by(earlier) {
                    continue;
                }
                if overlap.is_none() {
                    overlap = Some(i);
                }
                let seen = hits.entry(earlier.field).or_default();
                if seen.iter().any(|&k| node.tests[k].value == earlier.value) {
                    continue;
                }
                seen.push(i);
                if seen.len() == words.value_count(earlier.field) {
                    shadow = Some((earlier.field, seen.clone()));
                    break;
                }
            }

            let (kind, field, blockers) = match (shadow, overlap) {
                (Some((field, tests)), _) => (DiagnosticKind::Shadowed, field, tests),
                (None, Some(i)) => (DiagnosticKind::Overlap, node.tests[i].field, vec![i]),
                (None, None) => continue,
            };
            let mut blocked_by: Vec<InstrId> = Vec::new();
            for &i in &blockers {
                for &other in &node.tests[i].origin {
                    if !blocked_by.contains(&other) {
                        blocked_by.push(other);
                    }
                }
            }
            out.push(Diagnostic {
                kind,
                node: node.id,
                node_name: node.name.clone(),
                test: j,
                instr: id,
                instr_name: spec.mnemonic().to_string(),
                blocker_values: blockers.iter().map(|&i| node.tests[i].value).collect(),
                blockers,
                blocker_field: field,
                blocked_by,
            });
        }
    }
}
