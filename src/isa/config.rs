//! 解码树生成配置
//!
//! 控制通配位处理、节点内测试顺序以及遮蔽诊断的处理方式

use std::fmt;

use serde::{Deserialize, Serialize};

/// 根节点默认名称
pub const DEFAULT_ROOT_NAME: &str = "Dec_RISCV";

/// 单个通配解码键最多展开的具体值个数
pub const DEFAULT_MAX_EXPANSION: usize = 32;

/// 解码键含通配位时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WildcardPolicy {
    /// 按模式接受的每个具体值各生成一条测试，结果相同
    #[default]
    Expand,
    /// 构建前直接报错
    Reject,
    /// 通配位按 0 计
    ZeroFill,
}

/// 同一节点内测试的排列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TestOrder {
    /// 按成员在指令表中的位置排列
    #[default]
    TableOrder,
    /// 先列出全部叶子测试，再列出全部子节点跳转（各组内部按表序）
    LeavesFirst,
}

/// 遮蔽诊断的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShadowPolicy {
    /// 记录日志并附在结果上
    #[default]
    Warn,
    /// 出现不可达指令即失败
    Deny,
    /// 不做分析
    Ignore,
}

impl fmt::Display for WildcardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildcardPolicy::Expand => write!(f, "expand"),
            WildcardPolicy::Reject => write!(f, "reject"),
            WildcardPolicy::ZeroFill => write!(f, "zero-fill"),
        }
    }
}

impl fmt::Display for TestOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOrder::TableOrder => write!(f, "table"),
            TestOrder::LeavesFirst => write!(f, "leaves-first"),
        }
    }
}

/// 解码树构建配置
///
/// # 示例
///
/// ```
/// use allude_decgen::isa::{BuilderConfig, WildcardPolicy, ShadowPolicy};
///
/// let config = BuilderConfig::new()
///     .with_root_name("Dec_Custom")
///     .with_wildcard_policy(WildcardPolicy::Reject)
///     .with_shadow_policy(ShadowPolicy::Deny);
/// assert_eq!(config.root_name(), "Dec_Custom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    root_name: String,
    wildcard_policy: WildcardPolicy,
    test_order: TestOrder,
    shadow_policy: ShadowPolicy,
    max_expansion: usize,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            wildcard_policy: WildcardPolicy::default(),
            test_order: TestOrder::default(),
            shadow_policy: ShadowPolicy::default(),
            max_expansion: DEFAULT_MAX_EXPANSION,
        }
    }

    /// 设置根节点名称，子节点名称由它派生
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    pub fn with_wildcard_policy(mut self, policy: WildcardPolicy) -> Self {
        self.wildcard_policy = policy;
        self
    }

    pub fn with_test_order(mut self, order: TestOrder) -> Self {
        self.test_order = order;
        self
    }

    pub fn with_shadow_policy(mut self, policy: ShadowPolicy) -> Self {
        self.shadow_policy = policy;
        self
    }

    /// 设置单个解码键的展开上限（仅 `WildcardPolicy::Expand` 使用）
    pub fn with_max_expansion(mut self, limit: usize) -> Self {
        self.max_expansion = limit.max(1);
        self
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn wildcard_policy(&self) -> WildcardPolicy {
        self.wildcard_policy
    }

    pub fn test_order(&self) -> TestOrder {
        self.test_order
    }

    pub fn shadow_policy(&self) -> ShadowPolicy {
        self.shadow_policy
    }

    pub fn max_expansion(&self) -> usize {
        self.max_expansion
    }

    /// 打印配置摘要
    pub fn summary(&self) -> String {
        format!(
            "root={} wildcards={} order={} shadow={:?} max_expansion={}",
            self.root_name,
            self.wildcard_policy,
            self.test_order,
            self.shadow_policy,
            self.max_expansion
        )
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
