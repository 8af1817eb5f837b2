//! # Context Common
//!
//! 简单应用上下文的公共类型。
//!
//! ## 核心类型
//!
//! - [`Bean`] - 受管 Bean 的元数据入口
//! - [`TypeDescriptor`] - 注册期的类型元数据表
//! - [`BeanScope`] / [`ContextState`] - 作用域与上下文状态
//! - [`resolve_name`] - Bean 名称约定
//! - [`ContextError`] - 错误分类
//! - [`ContextSettings`] - 上下文配置
//!
//! ## 设计原则
//!
//! - 不依赖运行时反射，类型元数据在注册期显式提供
//! - 同步 API，所有失败立即返回给调用方

pub mod descriptor;
pub mod errors;
pub mod lifecycle;
pub mod naming;
pub mod settings;

pub use descriptor::*;
pub use errors::*;
pub use lifecycle::*;
pub use naming::*;
pub use settings::*;
