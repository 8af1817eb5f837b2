//! Bean 作用域与上下文生命周期状态

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bean 作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeanScope {
    /// 单例模式 - 上下文生命周期内只有一个实例，在 start() 时创建
    #[default]
    Singleton,
    /// 原型模式 - 每次 get_bean 都创建新实例
    Prototype,
}

impl BeanScope {
    /// 是否为单例作用域
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }

    /// 是否为原型作用域
    pub fn is_prototype(self) -> bool {
        matches!(self, Self::Prototype)
    }
}

impl fmt::Display for BeanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Prototype => f.write_str("prototype"),
        }
    }
}

/// 上下文生命周期状态
///
/// 只有 `NotStarted -> Running` 一次转换，没有停止状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextState {
    /// 已构造，尚未启动
    #[default]
    NotStarted,
    /// 单例已创建并完成注入
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_defaults_to_singleton() {
        assert_eq!(BeanScope::default(), BeanScope::Singleton);
        assert!(BeanScope::Singleton.is_singleton());
        assert!(!BeanScope::Singleton.is_prototype());
        assert!(BeanScope::Prototype.is_prototype());
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(BeanScope::Singleton.to_string(), "singleton");
        assert_eq!(BeanScope::Prototype.to_string(), "prototype");
    }

    #[test]
    fn test_state_defaults_to_not_started() {
        assert_eq!(ContextState::default(), ContextState::NotStarted);
    }
}
