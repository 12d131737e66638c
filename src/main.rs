//! allude_decgen 命令行入口
//!
//! 读取指令表（默认使用内置 RISC-V 表），构建解码森林并输出文本清单或 JSON。
//! `--decode` 可对给定指令字分别用解码树和线性扫描求值，便于对照。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use allude_decgen::isa::{BuilderConfig, ShadowPolicy, SpecTable, TestOrder, WildcardPolicy, riscv};
use allude_decgen::tree::{DecodeForest, InstrDecoder, TableScanDecoder, TreeDecoder};
use allude_decgen::{GenResult, synthesize};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WildcardArg {
    Expand,
    Reject,
    ZeroFill,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Table,
    LeavesFirst,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShadowArg {
    Warn,
    Deny,
    Ignore,
}

/// 指令解码树生成器
#[derive(Parser, Debug)]
#[command(name = "allude_decgen_cli", version, about = "Decode tree generator for fixed-width instruction sets")]
struct Args {
    /// JSON 指令表路径，缺省时使用内置 RISC-V 表
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// 解码键含通配位时的处理方式
    #[arg(long, value_enum, default_value_t = WildcardArg::Expand)]
    wildcards: WildcardArg,

    /// 节点内测试的排列顺序
    #[arg(long, value_enum, default_value_t = OrderArg::Table)]
    order: OrderArg,

    /// 发现不可达指令时的处理方式
    #[arg(long, value_enum, default_value_t = ShadowArg::Warn)]
    shadow: ShadowArg,

    /// 根节点名称
    #[arg(long)]
    root: Option<String>,

    /// 通配键展开的值数量上限
    #[arg(long)]
    max_expansion: Option<usize>,

    /// 以 JSON 输出森林
    #[arg(long)]
    json: bool,

    /// 待解码的指令字（十六进制 0x... 或十进制），可重复
    #[arg(short, long, value_parser = parse_word)]
    decode: Vec<u32>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn parse_word(text: &str) -> Result<u32, String> {
    let text = text.trim().replace('_', "");
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid instruction word '{}': {}", text, e))
}

impl Args {
    fn config(&self) -> BuilderConfig {
        let mut config = BuilderConfig::new()
            .with_wildcard_policy(match self.wildcards {
                WildcardArg::Expand => WildcardPolicy::Expand,
                WildcardArg::Reject => WildcardPolicy::Reject,
                WildcardArg::ZeroFill => WildcardPolicy::ZeroFill,
            })
            .with_test_order(match self.order {
                OrderArg::Table => TestOrder::TableOrder,
                OrderArg::LeavesFirst => TestOrder::LeavesFirst,
            })
            .with_shadow_policy(match self.shadow {
                ShadowArg::Warn => ShadowPolicy::Warn,
                ShadowArg::Deny => ShadowPolicy::Deny,
                ShadowArg::Ignore => ShadowPolicy::Ignore,
            });
        if let Some(root) = &self.root {
            config = config.with_root_name(root.clone());
        }
        if let Some(limit) = self.max_expansion {
            config = config.with_max_expansion(limit);
        }
        config
    }

    fn load_table(&self) -> GenResult<SpecTable> {
        match &self.table {
            Some(path) => {
                info!("Loading table: {}", path.display());
                SpecTable::load(path)
            }
            None => riscv::table(),
        }
    }
}

fn print_forest(forest: &DecodeForest, json: bool) -> GenResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(forest)?);
        return Ok(());
    }

    print!("{}", forest);
    let stats = forest.stats();
    println!(
        "// {} nodes, {} tests, {} leaves, max depth {}",
        stats.nodes, stats.tests, stats.leaves, stats.max_depth
    );
    for d in forest.diagnostics() {
        println!("// {:?}: {}", d.kind, d);
    }
    Ok(())
}

fn print_decodes(forest: &DecodeForest, table: &SpecTable, words: &[u32]) {
    let tree = TreeDecoder::new(forest);
    let scan = TableScanDecoder::new(table);
    let decoders: [&dyn InstrDecoder; 2] = [&tree, &scan];
    for &raw in words {
        println!("0x{:08x}:", raw);
        for decoder in decoders {
            let result = decoder
                .decode(raw)
                .and_then(|id| table.get(id))
                .map(|spec| format!("{} (#{})", spec.mnemonic(), spec.id()))
                .unwrap_or_else(|| "no match".to_string());
            println!("    {:<12} {}", decoder.name(), result);
        }
    }
}

fn run(args: &Args) -> GenResult<()> {
    let config = args.config();
    info!("Config: {}", config.summary());

    let table = args.load_table()?;
    let forest = synthesize(&table, &config)?;

    if args.decode.is_empty() {
        print_forest(&forest, args.json)?;
    } else {
        print_decodes(&forest, &table, &args.decode);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
