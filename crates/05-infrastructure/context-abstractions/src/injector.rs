//! 依赖注入抽象接口

use context_common::{InjectionError, TypeDescriptor};
use std::any::Any;

/// 依赖注入器 trait
///
/// 按拥有者类型的注入点为实例写入依赖。
pub trait DependencyInjector: Send + Sync {
    /// 为实例注入依赖，返回写入的字段数
    fn inject(
        &self,
        descriptor: &TypeDescriptor,
        instance: &mut (dyn Any + Send + Sync),
    ) -> Result<usize, InjectionError>;
}
