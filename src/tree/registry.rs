//! 子节点注册表
//!
//! 以 (父节点, 字段, 值) 为键记录已创建的子节点。
//! 同一前缀的指令查到同一个子节点，前缀只测试一次。

use std::collections::HashMap;

use super::NodeId;
use crate::isa::FieldClass;

#[derive(Debug, Default)]
pub struct NodeRegistry {
    children: HashMap<(NodeId, FieldClass, u32), NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找已有子节点
    pub fn lookup(&self, parent: NodeId, field: FieldClass, value: u32) -> Option<NodeId> {
        self.children.get(&(parent, field, value)).copied()
    }

    /// 查找子节点，不存在时用 `create` 分配新编号
    ///
    /// 返回 `(子节点, 是否新建)`
    pub fn resolve(
        &mut self,
        parent: NodeId,
        field: FieldClass,
        value: u32,
        create: impl FnOnce() -> NodeId,
    ) -> (NodeId, bool) {
        if let Some(existing) = self.lookup(parent, field, value) {
            return (existing, false);
        }
        let child = create();
        self.children.insert((parent, field, value), child);
        (child, true)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// 子节点名称：`{父节点名}_{字段}_0x{值}`
pub fn child_name(parent: &str, field: FieldClass, value: u32) -> String {
    format!("{}_{}_0x{:x}", parent, field, value)
}
