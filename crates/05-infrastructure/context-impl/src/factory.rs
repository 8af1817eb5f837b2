//! 基于无参构造器的实例工厂

use context_abstractions::InstanceFactory;
use context_common::{BeanInstance, InstantiationError, TypeDescriptor};
use tracing::debug;

/// 通过类型元数据中的无参构造器创建实例
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstructorFactory;

impl ConstructorFactory {
    /// 创建新的实例工厂
    pub fn new() -> Self {
        Self
    }
}

impl InstanceFactory for ConstructorFactory {
    fn create(&self, descriptor: &TypeDescriptor) -> Result<BeanInstance, InstantiationError> {
        let type_name = descriptor.type_name();
        let constructor = descriptor
            .constructor()
            .ok_or(InstantiationError::NoDefaultConstructor { type_name })?;

        debug!("创建实例: {}", type_name);
        constructor().map_err(|source| InstantiationError::ConstructorFailed { type_name, source })
    }

    fn name(&self) -> &str {
        "constructor"
    }
}
