//! 简单应用上下文

use crate::builder::ContextBuilder;
use crate::factory::ConstructorFactory;
use crate::injector::FieldInjector;
use crate::registry::{BeanDefinition, BeanDefinitionRegistry};
use context_abstractions::{ApplicationContext, DependencyInjector, InstanceFactory};
use context_common::{
    BeanInstance, BeanScope, ContextError, ContextResult, ContextSettings, ContextState,
    SharedBean, TypeDescriptor,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 简单应用上下文
///
/// 构造时建立 Bean 定义注册表，`start()` 时创建并注入所有单例，
/// 之后单例从缓存返回，原型每次新建并注入。
pub struct SimpleApplicationContext {
    registry: BeanDefinitionRegistry,
    singletons: HashMap<String, SharedBean>,
    state: ContextState,
    factory: Arc<dyn InstanceFactory>,
    injector: Box<dyn DependencyInjector>,
}

impl SimpleApplicationContext {
    /// 使用默认配置创建上下文
    pub fn new<I>(types: I) -> ContextResult<Self>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        Self::with_settings(types, ContextSettings::default())
    }

    /// 使用指定配置创建上下文
    pub fn with_settings<I>(types: I, settings: ContextSettings) -> ContextResult<Self>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        Self::from_parts(types, &settings, Arc::new(ConstructorFactory::new()))
    }

    /// 创建上下文构建器
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub(crate) fn from_parts<I>(
        types: I,
        settings: &ContextSettings,
        factory: Arc<dyn InstanceFactory>,
    ) -> ContextResult<Self>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let registry = BeanDefinitionRegistry::build(types, settings.name_collision)?;
        let injector = Box::new(FieldInjector::new(Arc::clone(&factory)));

        Ok(Self {
            registry,
            singletons: HashMap::new(),
            state: ContextState::NotStarted,
            factory,
            injector,
        })
    }

    /// 按名称获取 Bean 定义
    pub fn bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.registry.get(name)
    }

    /// 已注册的 Bean 定义数量
    pub fn bean_count(&self) -> usize {
        self.registry.len()
    }

    fn ensure_running(&self) -> ContextResult<()> {
        match self.state {
            ContextState::Running => Ok(()),
            ContextState::NotStarted => Err(ContextError::ContextNotStarted),
        }
    }

    fn definition(&self, name: &str) -> ContextResult<&BeanDefinition> {
        self.registry
            .get(name)
            .ok_or_else(|| ContextError::no_such_bean(name))
    }

    /// 创建实例并注入依赖
    fn create_bean(&self, definition: &BeanDefinition) -> ContextResult<BeanInstance> {
        let descriptor = definition.descriptor();
        let mut instance = self.factory.create(descriptor)?;
        let injected = self.injector.inject(descriptor, &mut *instance)?;

        debug!(
            "创建 Bean: {} ({})，注入 {} 个字段",
            definition.name(),
            definition.scope(),
            injected
        );
        Ok(instance)
    }
}

impl ApplicationContext for SimpleApplicationContext {
    fn start(&mut self) -> ContextResult<()> {
        if self.state == ContextState::Running {
            warn!("应用上下文已启动，忽略重复的 start 调用");
            return Ok(());
        }

        info!("启动应用上下文，共 {} 个 Bean 定义", self.registry.len());

        // 全部单例创建成功后才提交到缓存
        let mut staged = HashMap::new();
        for definition in self.registry.singletons() {
            let instance = self.create_bean(definition)?;
            staged.insert(definition.name().to_string(), SharedBean::from(instance));
        }

        info!("应用上下文启动完成，创建 {} 个单例", staged.len());
        self.singletons = staged;
        self.state = ContextState::Running;
        Ok(())
    }

    fn state(&self) -> ContextState {
        self.state
    }

    fn contains_bean(&self, name: &str) -> ContextResult<bool> {
        self.ensure_running()?;
        Ok(self.registry.contains(name))
    }

    fn get_bean(&self, name: &str) -> ContextResult<SharedBean> {
        self.ensure_running()?;
        let definition = self.definition(name)?;

        match definition.scope() {
            BeanScope::Singleton => self
                .singletons
                .get(name)
                .cloned()
                .ok_or_else(|| ContextError::no_such_bean(name)),
            BeanScope::Prototype => {
                let instance = self.create_bean(definition)?;
                Ok(SharedBean::from(instance))
            }
        }
    }

    fn is_singleton(&self, name: &str) -> ContextResult<bool> {
        Ok(self.definition(name)?.scope().is_singleton())
    }

    fn is_prototype(&self, name: &str) -> ContextResult<bool> {
        Ok(self.definition(name)?.scope().is_prototype())
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry.names()
    }
}

impl fmt::Debug for SimpleApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleApplicationContext")
            .field("registry", &self.registry)
            .field("singletons", &self.singletons.keys().collect::<Vec<_>>())
            .field("state", &self.state)
            .field("factory", &self.factory.name())
            .finish()
    }
}
