//! Bean 定义注册表
//!
//! 构造完成后只读。

use context_common::{
    resolve_name, BeanScope, ContextError, ContextResult, NameCollisionPolicy, TypeDescriptor,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Bean 定义
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    name: String,
    descriptor: TypeDescriptor,
    scope: BeanScope,
}

impl BeanDefinition {
    /// 从类型元数据创建 Bean 定义
    pub fn from_descriptor(descriptor: TypeDescriptor) -> Self {
        Self {
            name: resolve_name(&descriptor),
            scope: descriptor.scope(),
            descriptor,
        }
    }

    /// Bean 名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 类型元数据
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// 作用域
    pub fn scope(&self) -> BeanScope {
        self.scope
    }

    /// 完整类型名
    pub fn type_name(&self) -> &'static str {
        self.descriptor.type_name()
    }
}

/// Bean 定义注册表
#[derive(Debug, Default)]
pub struct BeanDefinitionRegistry {
    definitions: HashMap<String, BeanDefinition>,
    /// 注册顺序，决定单例的创建顺序
    order: Vec<String>,
}

impl BeanDefinitionRegistry {
    /// 从类型元数据列表构建注册表
    pub fn build<I>(descriptors: I, policy: NameCollisionPolicy) -> ContextResult<Self>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut registry = Self::default();

        for descriptor in descriptors {
            let definition = BeanDefinition::from_descriptor(descriptor);
            registry.insert(definition, policy)?;
        }

        info!("Bean 定义注册表构建完成，共 {} 个定义", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, definition: BeanDefinition, policy: NameCollisionPolicy) -> ContextResult<()> {
        if let Some(existing) = self.definitions.get(definition.name()) {
            match policy {
                NameCollisionPolicy::Reject => {
                    return Err(ContextError::DuplicateBeanName {
                        name: definition.name.clone(),
                        existing: existing.type_name(),
                        incoming: definition.type_name(),
                    });
                }
                NameCollisionPolicy::Overwrite => {
                    warn!(
                        "Bean 名称冲突: {}，{} 覆盖 {}",
                        definition.name(),
                        definition.type_name(),
                        existing.type_name()
                    );
                }
            }
        } else {
            self.order.push(definition.name.clone());
        }

        debug!(
            "注册 Bean 定义: {} ({}, {})",
            definition.name(),
            definition.type_name(),
            definition.scope()
        );
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// 按名称获取 Bean 定义
    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    /// 是否包含指定名称
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// 按注册顺序遍历所有定义
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.order.iter().filter_map(|name| self.definitions.get(name))
    }

    /// 按注册顺序遍历单例定义
    pub fn singletons(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.iter().filter(|definition| definition.scope().is_singleton())
    }

    /// 所有名称，按字典序排列
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.keys().cloned().collect();
        names.sort();
        names
    }

    /// 定义数量
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
