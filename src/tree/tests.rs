//! 解码树模块测试

use std::collections::HashSet;
use std::sync::Mutex;

use super::*;
use crate::error::GenError;
use crate::isa::{BuilderConfig, RawSpec, ShadowPolicy, SpecTable, TestOrder, WildcardPolicy, riscv};

fn table_of(raw: &[RawSpec]) -> SpecTable {
    SpecTable::from_raw(raw).unwrap()
}

fn riscv_forest(config: &BuilderConfig) -> DecodeForest {
    let table = riscv::table().unwrap();
    build(&table, config).unwrap()
}

fn ids(raw: &[usize]) -> Vec<InstrId> {
    raw.iter().copied().map(InstrId).collect()
}

// ==================== 基本场景 ====================

#[test]
fn test_single_key_leaves_at_root() {
    let table = table_of(&[
        RawSpec::new("lui", &[("OP", "0110111")], &["OP"]),
        RawSpec::new("auipc", &[("OP", "0010111")], &["OP"]),
    ]);
    let forest = build(&table, &BuilderConfig::default()).unwrap();

    assert_eq!(forest.nodes().len(), 1);
    let root = forest.root().unwrap();
    assert_eq!(root.name, "Dec_RISCV");
    assert_eq!(root.tests.len(), 2);
    assert_eq!(root.tests[0].field, FieldClass::OP);
    assert_eq!(root.tests[0].value, 0x37);
    assert_eq!(root.tests[0].outcome, Outcome::Match(InstrId(0)));
    assert_eq!(root.tests[1].value, 0x17);
    assert_eq!(root.tests[1].outcome, Outcome::Match(InstrId(1)));
    assert_eq!(root.default, Outcome::NoMatch);
    assert!(forest.diagnostics().is_empty());
}

#[test]
fn test_shared_prefix_single_child() {
    let branches = [("beq", "000"), ("bne", "001"), ("blt", "100"), ("bge", "101"), ("bltu", "110"), ("bgeu", "111")];
    let raw: Vec<RawSpec> = branches
        .iter()
        .map(|(name, f3)| RawSpec::new(name, &[("OP", "1100011"), ("F3", f3)], &["OP", "F3"]))
        .collect();
    let table = table_of(&raw);
    let forest = build(&table, &BuilderConfig::default()).unwrap();

    assert_eq!(forest.nodes().len(), 2);
    let root = forest.root().unwrap();
    assert_eq!(root.tests.len(), 1);
    assert_eq!(root.tests[0].value, 0x63);
    assert_eq!(root.tests[0].origin, ids(&[0, 1, 2, 3, 4, 5]));

    let Outcome::Child(child) = root.tests[0].outcome else {
        panic!("expected a route test, got {:?}", root.tests[0].outcome);
    };
    let child = forest.node(child).unwrap();
    assert_eq!(child.name, "Dec_RISCV_OP_0x63");
    assert_eq!(child.parent, Some(NodeId::ROOT));
    assert_eq!(child.path, vec![(FieldClass::OP, 0x63)]);

    let values: Vec<u32> = child.tests.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0, 1, 4, 5, 6, 7]);
    for (i, test) in child.tests.iter().enumerate() {
        assert_eq!(test.field, FieldClass::F3);
        assert_eq!(test.outcome, Outcome::Match(InstrId(i)));
    }
}

fn divergent_table() -> SpecTable {
    table_of(&[
        RawSpec::new(
            "slli",
            &[("OP", "0010011"), ("F3", "001"), ("F2", "00"), ("R3", "00000")],
            &["OP", "F3", "F2", "R3"],
        ),
        RawSpec::new("shortcut", &[("OP", "0010011"), ("F3", "001")], &["OP", "F3"]),
    ])
}

#[test]
fn test_terminal_and_route_coexist_in_table_order() {
    let forest = build(&divergent_table(), &BuilderConfig::default()).unwrap();
    let child = forest.node_by_name("Dec_RISCV_OP_0x13").unwrap();

    assert_eq!(child.tests.len(), 2);
    let grandchild = forest.node_by_name("Dec_RISCV_OP_0x13_F3_0x1").unwrap();
    assert_eq!(child.tests[0].outcome, Outcome::Child(grandchild.id));
    assert_eq!(child.tests[0].origin, ids(&[0]));
    assert_eq!(child.tests[1].outcome, Outcome::Match(InstrId(1)));
    assert_eq!(child.tests[1].value, 1);

    // 先执行的跳转测试截获了 shortcut 的全部编码
    assert_eq!(forest.unreachable(), ids(&[1]));
    assert!(forest.node_by_name("Dec_RISCV_OP_0x13_F3_0x1_F2_0x0").is_some());
}

#[test]
fn test_leaves_first_order() {
    let config = BuilderConfig::new().with_test_order(TestOrder::LeavesFirst);
    let forest = build(&divergent_table(), &config).unwrap();
    let child = forest.node_by_name("Dec_RISCV_OP_0x13").unwrap();

    assert_eq!(child.tests[0].outcome, Outcome::Match(InstrId(1)));
    assert!(matches!(child.tests[1].outcome, Outcome::Child(_)));
    assert_eq!(forest.unreachable(), ids(&[0]));
}

#[test]
fn test_shadowed_by_several_tests_together() {
    // x 的 F3 只能是 000 或 010，a、b 两条测试先执行，x 永远无法被识别
    let table = table_of(&[
        RawSpec::new("a", &[("OP", "1110011"), ("F3", "000")], &["OP", "F3"]),
        RawSpec::new("b", &[("OP", "1110011"), ("F3", "010")], &["OP", "F3"]),
        RawSpec::new("x", &[("OP", "1110011"), ("F3", "0X0"), ("F2", "00")], &["OP", "F2"]),
    ]);
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    assert_eq!(forest.unreachable(), ids(&[2]));

    let d = &forest.diagnostics()[0];
    assert_eq!(d.kind, DiagnosticKind::Shadowed);
    assert_eq!(d.node_name, "Dec_RISCV_OP_0x73");
    assert_eq!(d.blockers, vec![0, 1]);
    assert_eq!(d.blocked_by, ids(&[0, 1]));

    let decoder = TreeDecoder::new(&forest);
    for raw in [0x00000073, 0x00002073] {
        assert_ne!(decoder.decode(raw), Some(InstrId(2)));
    }

    let deny = BuilderConfig::new().with_shadow_policy(ShadowPolicy::Deny);
    match build(&table, &deny) {
        Err(GenError::Shadowed(diags)) => {
            assert_eq!(diags.len(), 1);
            assert_eq!(diags[0].instr, InstrId(2));
        }
        other => panic!("expected Shadowed, got {:?}", other.map(|f| f.stats())),
    }
}

/// 记录全部日志，供检查日志级别
struct CaptureLog;

static CAPTURED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static CAPTURE_LOG: CaptureLog = CaptureLog;

impl log::Log for CaptureLog {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = CAPTURED.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

#[test]
fn test_overlap_logged_as_warning() {
    // 其他测试可能已经装好了同一个 logger
    let _ = log::set_logger(&CAPTURE_LOG);
    log::set_max_level(log::LevelFilter::Trace);

    let table = table_of(&[
        RawSpec::new("csr_reader", &[("OP", "1110011"), ("F3", "010")], &["OP", "F3"]),
        RawSpec::new("overlap_victim", &[("OP", "1110011"), ("F3", "XXX"), ("F2", "00")], &["OP", "F2"]),
    ]);
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    assert_eq!(forest.diagnostics().len(), 1);
    assert_eq!(forest.diagnostics()[0].kind, DiagnosticKind::Overlap);

    let records = CAPTURED.lock().unwrap();
    assert!(records.iter().any(|(level, msg)| {
        *level == log::Level::Warn && msg.contains("overlap_victim (#1) partially shadowed")
    }));
}

// ==================== 通配解码键 ====================

fn fence_table() -> SpecTable {
    table_of(&[
        RawSpec::new("fence", &[("OP", "0001111"), ("R3", "0000X")], &["OP", "R3"]),
        RawSpec::new("other", &[("OP", "0001111"), ("R3", "00010")], &["OP", "R3"]),
    ])
}

#[test]
fn test_wildcard_key_rejected() {
    let config = BuilderConfig::new().with_wildcard_policy(WildcardPolicy::Reject);
    match build(&fence_table(), &config) {
        Err(GenError::AmbiguousKey { id, field, pattern, .. }) => {
            assert_eq!(id, InstrId(0));
            assert_eq!(field, "R3");
            assert_eq!(pattern, "0000X");
        }
        other => panic!("expected AmbiguousKey, got {:?}", other),
    }
}

#[test]
fn test_wildcard_key_expanded() {
    let forest = build(&fence_table(), &BuilderConfig::default()).unwrap();
    let node = forest.node_by_name("Dec_RISCV_OP_0xf").unwrap();

    let tests: Vec<(u32, Outcome)> = node.tests.iter().map(|t| (t.value, t.outcome)).collect();
    assert_eq!(
        tests,
        vec![
            (0, Outcome::Match(InstrId(0))),
            (1, Outcome::Match(InstrId(0))),
            (2, Outcome::Match(InstrId(1))),
        ]
    );
    assert_eq!(forest.leaves_of(InstrId(0)).len(), 2);
    assert!(forest.diagnostics().is_empty());

    let decoder = TreeDecoder::new(&forest);
    assert_eq!(decoder.decode(0x0000000F), Some(InstrId(0)));
    assert_eq!(decoder.decode(0x0800000F), Some(InstrId(0)));
    assert_eq!(decoder.decode(0x1000000F), Some(InstrId(1)));
}

#[test]
fn test_wildcard_key_zero_filled() {
    let config = BuilderConfig::new().with_wildcard_policy(WildcardPolicy::ZeroFill);
    let forest = build(&fence_table(), &config).unwrap();
    let node = forest.node_by_name("Dec_RISCV_OP_0xf").unwrap();

    let values: Vec<u32> = node.tests.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![0, 2]);
    assert_eq!(TreeDecoder::new(&forest).decode(0x0800000F), None);
}

#[test]
fn test_wildcard_expansion_limit() {
    let table = table_of(&[RawSpec::new("wide", &[("OP", "XXXXXXX")], &["OP"])]);
    let config = BuilderConfig::new().with_max_expansion(16);
    assert!(matches!(build(&table, &config), Err(GenError::BadPattern { .. })));

    let config = BuilderConfig::new().with_max_expansion(128);
    let forest = build(&table, &config).unwrap();
    assert_eq!(forest.root().unwrap().tests.len(), 128);
}

// ==================== 输入错误 ====================

#[test]
fn test_input_errors_reported_before_build() {
    let empty_keys = [RawSpec::new("nokeys", &[("OP", "0110111")], &[])];
    assert!(matches!(
        SpecTable::from_raw(&empty_keys),
        Err(GenError::EmptyDecodeKeys { .. })
    ));

    let missing = [RawSpec::new("nofield", &[("OP", "0110111")], &["OP", "F3"])];
    match SpecTable::from_raw(&missing) {
        Err(GenError::MissingField { id, field, .. }) => {
            assert_eq!(id, InstrId(0));
            assert_eq!(field, "F3");
        }
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[test]
fn test_custom_root_name() {
    let config = BuilderConfig::new().with_root_name("Dec_Test");
    let forest = build(&divergent_table(), &config).unwrap();
    assert_eq!(forest.root().unwrap().name, "Dec_Test");
    assert!(forest.node_by_name("Dec_Test_OP_0x13_F3_0x1").is_some());
}

// ==================== 内置指令表 ====================

#[test]
fn test_riscv_deterministic() {
    let config = BuilderConfig::default();
    assert_eq!(riscv_forest(&config), riscv_forest(&config));
}

#[test]
fn test_riscv_stats() {
    let stats = riscv_forest(&BuilderConfig::default()).stats();
    assert_eq!(stats, ForestStats { nodes: 87, tests: 219, leaves: 133, max_depth: 5 });

    let config = BuilderConfig::new().with_wildcard_policy(WildcardPolicy::ZeroFill);
    let stats = riscv_forest(&config).stats();
    assert_eq!(stats.nodes, 84);
    assert_eq!(stats.leaves, 126);
}

#[test]
fn test_riscv_every_instruction_has_a_leaf() {
    let table = riscv::table().unwrap();
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    for spec in &table {
        assert!(!forest.leaves_of(spec.id()).is_empty(), "{} has no leaf", spec.name());
    }
    assert_eq!(forest.leaves_of(table.find("fence").unwrap().id()).len(), 8);
}

#[test]
fn test_riscv_structural_sharing() {
    let forest = riscv_forest(&BuilderConfig::default());

    let names: HashSet<&str> = forest.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names.len(), forest.nodes().len());

    for node in forest.nodes() {
        assert_eq!(node.state, NodeState::Closed);
        let mut children = HashSet::new();
        for test in &node.tests {
            if let Outcome::Child(child) = test.outcome {
                assert!(children.insert(child), "{} routes twice to {}", node.name, child);
                assert_eq!(forest.node(child).unwrap().parent, Some(node.id));
            }
        }
    }
    // 根节点按 opcode 分出 19 路
    assert_eq!(forest.root().unwrap().tests.len(), 19);
}

#[test]
fn test_riscv_dispatch_table_order() {
    let table = riscv::table().unwrap();
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    let dispatch = forest.dispatch_table();

    assert_eq!(dispatch.len(), table.len());
    for (i, entry) in dispatch.iter().enumerate() {
        assert_eq!(entry.id, InstrId(i));
    }
    assert_eq!(dispatch[0].ident, "LUI");
    assert_eq!(dispatch[38].ident, "FENCE_I");
    assert_eq!(dispatch[38].name, "fence.i");
}

#[test]
fn test_riscv_shadowed_instructions() {
    let table = riscv::table().unwrap();
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    let expected = ids(&[83, 92, 93, 94, 95, 96, 97, 112, 113, 115, 119, 120]);
    assert_eq!(forest.unreachable(), expected);

    let frcsr = forest
        .diagnostics()
        .iter()
        .find(|d| d.instr == InstrId(92))
        .unwrap();
    assert_eq!(frcsr.node_name, "Dec_RISCV_OP_0x73");
    assert_eq!(frcsr.blocker_field, FieldClass::F3);
    assert_eq!(frcsr.blocker_values, vec![2]);
    assert_eq!(frcsr.blocked_by.first(), Some(&InstrId(41))); // rdcycle

    // fcvt.wu.s 与 fcvt.w.s 的解码键完全相同
    let fcvt = forest
        .diagnostics()
        .iter()
        .find(|d| d.instr == InstrId(83))
        .unwrap();
    assert_eq!(fcvt.blocked_by, ids(&[82]));
}

#[test]
fn test_riscv_leaves_first_shadowed_instructions() {
    let config = BuilderConfig::new().with_test_order(TestOrder::LeavesFirst);
    let forest = riscv_forest(&config);
    let expected = ids(&[83, 92, 93, 94, 98, 99, 112, 113, 115, 119, 120]);
    assert_eq!(forest.unreachable(), expected);
}

#[test]
fn test_riscv_shadow_policies() {
    let table = riscv::table().unwrap();

    let deny = BuilderConfig::new().with_shadow_policy(ShadowPolicy::Deny);
    match build(&table, &deny) {
        Err(GenError::Shadowed(diags)) => {
            assert_eq!(diags.len(), 12);
            assert!(diags.iter().all(|d| d.kind == DiagnosticKind::Shadowed));
        }
        other => panic!("expected Shadowed, got {:?}", other.map(|f| f.stats())),
    }

    let ignore = BuilderConfig::new().with_shadow_policy(ShadowPolicy::Ignore);
    let forest = build(&table, &ignore).unwrap();
    assert!(forest.diagnostics().is_empty());
    assert!(forest.unreachable().is_empty());
}

#[test]
fn test_riscv_sample_words_round_trip() {
    let table = riscv::table().unwrap();
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    let unreachable: HashSet<InstrId> = forest.unreachable().into_iter().collect();
    let tree = TreeDecoder::new(&forest);
    let scan = TableScanDecoder::new(&table);

    for spec in &table {
        if unreachable.contains(&spec.id()) {
            continue;
        }
        let raw = spec.sample_word();
        assert_eq!(tree.decode(raw), Some(spec.id()), "{} (0x{:08x})", spec.name(), raw);
        assert_eq!(scan.decode(raw), Some(spec.id()), "{} (0x{:08x})", spec.name(), raw);
    }
}

#[test]
fn test_riscv_real_encodings() {
    let table = riscv::table().unwrap();
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    let tree = TreeDecoder::new(&forest);
    let name = |raw: u32| tree.decode(raw).and_then(|id| table.get(id)).map(|s| s.mnemonic());

    assert_eq!(name(0x02A00093), Some("addi")); // addi x1, x0, 42
    assert_eq!(name(0x002081B3), Some("add")); // add x3, x1, x2
    assert_eq!(name(0x402081B3), Some("sub")); // sub x3, x1, x2
    assert_eq!(name(0x022081B3), Some("mul")); // mul x3, x1, x2
    assert_eq!(name(0x00208463), Some("beq")); // beq x1, x2, 8
    assert_eq!(name(0x0000100F), Some("fence.i"));
    assert_eq!(name(0x0FF0000F), Some("fence")); // fence iorw, iorw
    assert_eq!(name(0x00000000), None);
    assert_eq!(name(0xFFFFFFFF), None);
}

#[test]
fn test_display_listing() {
    let table = table_of(&[
        RawSpec::new("beq", &[("OP", "1100011"), ("F3", "000")], &["OP", "F3"]),
        RawSpec::new("fence.i", &[("OP", "0001111")], &["OP"]),
    ]);
    let forest = build(&table, &BuilderConfig::default()).unwrap();
    let expected = "\
Dec_RISCV:
    if OP == 0x63 -> Dec_RISCV_OP_0x63
    if OP == 0x0f => FENCE_I (#1)
    else => no match

Dec_RISCV_OP_0x63:
    if F3 == 0x00 => BEQ (#0)
    else => no match

";
    assert_eq!(forest.to_string(), expected);
}

#[test]
fn test_empty_forest_decodes_nothing() {
    let text = r#"{"nodes":[],"dispatch":[],"leaves":[],"diagnostics":[]}"#;
    let forest: DecodeForest = serde_json::from_str(text).unwrap();
    assert!(forest.root().is_none());

    let decoder = TreeDecoder::new(&forest);
    assert_eq!(decoder.decode(0x00000013), None);
    assert_eq!(decoder.decode_path(0x00000013), (None, Vec::new()));
    assert_eq!(decoder.name(), "");
    assert_eq!(forest.to_string(), "");
}

#[test]
fn test_forest_serializes() {
    let forest = build(&divergent_table(), &BuilderConfig::default()).unwrap();
    let json = serde_json::to_string(&forest).unwrap();
    let back: DecodeForest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, forest);
}
