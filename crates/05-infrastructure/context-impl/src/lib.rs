//! # 应用上下文具体实现
//!
//! 提供 Bean 定义注册表、基于构造器的实例工厂、字段注入器以及简单应用上下文。

pub mod builder;
pub mod context;
pub mod factory;
pub mod injector;
pub mod registry;

pub use builder::ContextBuilder;
pub use context::SimpleApplicationContext;
pub use factory::ConstructorFactory;
pub use injector::FieldInjector;
pub use registry::{BeanDefinition, BeanDefinitionRegistry};
