//! 上下文构建器

use crate::context::SimpleApplicationContext;
use crate::factory::ConstructorFactory;
use context_abstractions::InstanceFactory;
use context_common::{Bean, ContextResult, ContextSettings, TypeDescriptor};
use std::sync::Arc;
use tracing::info;

/// 简单应用上下文构建器
pub struct ContextBuilder {
    descriptors: Vec<TypeDescriptor>,
    settings: ContextSettings,
    factory: Arc<dyn InstanceFactory>,
}

impl ContextBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            settings: ContextSettings::default(),
            factory: Arc::new(ConstructorFactory::new()),
        }
    }

    /// 注册 Bean 类型
    pub fn register<T: Bean>(self) -> Self {
        self.register_descriptor(T::descriptor())
    }

    /// 注册类型元数据
    pub fn register_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// 设置上下文配置
    pub fn settings(mut self, settings: ContextSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 替换实例工厂
    pub fn instance_factory(mut self, factory: Arc<dyn InstanceFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// 构建上下文
    pub fn build(self) -> ContextResult<SimpleApplicationContext> {
        info!(
            "构建应用上下文: {} 个类型, 工厂 {}",
            self.descriptors.len(),
            self.factory.name()
        );
        SimpleApplicationContext::from_parts(self.descriptors, &self.settings, self.factory)
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
