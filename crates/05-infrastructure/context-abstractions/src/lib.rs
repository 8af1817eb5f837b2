//! # Context Abstractions
//!
//! 应用上下文抽象层，定义 Bean 访问、实例化和注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ApplicationContext`] - 应用上下文接口
//! - [`InstanceFactory`] - 实例化接口
//! - [`DependencyInjector`] - 依赖注入接口

pub mod context;
pub mod factory;
pub mod injector;

pub use context::*;
pub use factory::*;
pub use injector::*;
