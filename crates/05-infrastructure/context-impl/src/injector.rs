//! 字段注入器
//!
//! 依赖总是通过实例工厂直接新建，不经过注册表，也不会继续为依赖本身注入。

use context_abstractions::{DependencyInjector, InstanceFactory};
use context_common::{InjectionError, TypeDescriptor};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 基于注入点元数据的字段注入器
#[derive(Clone)]
pub struct FieldInjector {
    factory: Arc<dyn InstanceFactory>,
}

impl FieldInjector {
    /// 创建新的字段注入器
    pub fn new(factory: Arc<dyn InstanceFactory>) -> Self {
        Self { factory }
    }
}

impl fmt::Debug for FieldInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInjector")
            .field("factory", &self.factory.name())
            .finish()
    }
}

impl DependencyInjector for FieldInjector {
    fn inject(
        &self,
        descriptor: &TypeDescriptor,
        instance: &mut (dyn Any + Send + Sync),
    ) -> Result<usize, InjectionError> {
        let mut injected = 0;

        for point in descriptor.injection_points() {
            let dependency = self
                .factory
                .create(&point.dependency_descriptor())
                .map_err(|source| InjectionError::DependencyUnresolved {
                    owner: point.owner_type,
                    field: point.field,
                    source,
                })?;

            point
                .assign(instance, dependency)
                .map_err(|source| InjectionError::FieldNotWritable {
                    owner: point.owner_type,
                    field: point.field,
                    source,
                })?;

            debug!(
                "注入依赖: {}.{} <- {}",
                point.owner_type, point.field, point.dependency_type
            );
            injected += 1;
        }

        Ok(injected)
    }
}
