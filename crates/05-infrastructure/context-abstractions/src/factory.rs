//! 实例化抽象接口

use context_common::{BeanInstance, InstantiationError, TypeDescriptor};

/// 实例工厂 trait
///
/// 负责通过无参构造器创建实例，不做缓存。
pub trait InstanceFactory: Send + Sync {
    /// 创建实例
    fn create(&self, descriptor: &TypeDescriptor) -> Result<BeanInstance, InstantiationError>;

    /// 获取工厂名称
    fn name(&self) -> &str;
}
