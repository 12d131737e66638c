// 调试脚本：用内置 RISC-V 表构建解码树，并对一组指令字对照两种解码器

use allude_decgen::isa::{BuilderConfig, riscv};
use allude_decgen::synthesize;
use allude_decgen::tree::{InstrDecoder, TableScanDecoder, TreeDecoder};

fn main() {
    println!("=== 解码树构建 ===\n");

    let table = match riscv::table() {
        Ok(table) => table,
        Err(e) => {
            println!("✗ 指令表校验失败: {}", e);
            return;
        }
    };
    let forest = match synthesize(&table, &BuilderConfig::default()) {
        Ok(forest) => forest,
        Err(e) => {
            println!("✗ 构建失败: {}", e);
            return;
        }
    };

    let stats = forest.stats();
    println!("指令数: {}", table.len());
    println!("节点数: {}，测试数: {}，叶子数: {}，最大深度: {}", stats.nodes, stats.tests, stats.leaves, stats.max_depth);
    println!();

    println!("=== 不可达指令 ===\n");
    for d in forest.diagnostics() {
        println!("  {}", d);
    }
    println!();

    println!("=== 解码对照 ===\n");

    let test_cases: &[(u32, &str)] = &[
        (0x02A00093, "addi x1, x0, 42"),
        (0x002081B3, "add x3, x1, x2"),
        (0x402081B3, "sub x3, x1, x2"),
        (0x022081B3, "mul x3, x1, x2"),
        (0xFE0008E3, "beq x0, x0, -16"),
        (0x0041D663, "bge x3, x4, 12"),
        (0x0FF0000F, "fence iorw, iorw"),
        (0x0000100F, "fence.i"),
        (0x00000073, "scall"),
        (0xC0002573, "rdcycle x10"),
        (0x00302573, "frcsr x10"),
        (0xC0151553, "fcvt.wu.s x10, f10"),
    ];

    let tree = TreeDecoder::new(&forest);
    let scan = TableScanDecoder::new(&table);
    let name = |id: Option<allude_decgen::isa::InstrId>| {
        id.and_then(|id| table.get(id))
            .map(|spec| spec.mnemonic().to_string())
            .unwrap_or_else(|| "(no match)".to_string())
    };

    for (raw, desc) in test_cases {
        let by_tree = tree.decode(*raw);
        let by_scan = scan.decode(*raw);
        println!("指令: {} (0x{:08X})", desc, raw);
        println!("  {}: {}", tree.name(), name(by_tree));
        println!("  {}: {}", scan.name(), name(by_scan));
        if by_tree == by_scan {
            println!("  ✓ 一致");
        } else {
            println!("  ✗ 不一致!");
        }
        println!();
    }
}
