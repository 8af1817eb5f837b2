//! 错误类型定义

use thiserror::Error;

/// 装箱的通用错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 应用上下文错误类型
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("应用上下文尚未启动")]
    ContextNotStarted,

    #[error("Bean 定义不存在: {name}")]
    NoSuchBeanDefinition { name: String },

    #[error("Bean 名称冲突: {name}, 已由 {existing} 声明, 又由 {incoming} 声明")]
    DuplicateBeanName {
        name: String,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("Bean 类型不匹配: {name}, 期望 {expected}")]
    BeanTypeMismatch { name: String, expected: &'static str },

    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    #[error(transparent)]
    Injection(#[from] InjectionError),
}

impl ContextError {
    /// 创建 Bean 定义不存在错误
    pub fn no_such_bean(name: impl Into<String>) -> Self {
        Self::NoSuchBeanDefinition { name: name.into() }
    }
}

/// 实例化错误类型
#[derive(Error, Debug)]
pub enum InstantiationError {
    #[error("类型没有可用的无参构造器: {type_name}")]
    NoDefaultConstructor { type_name: &'static str },

    #[error("实例构造失败: {type_name}, 原因: {source}")]
    ConstructorFailed {
        type_name: &'static str,
        source: BoxError,
    },
}

/// 注入错误类型
#[derive(Error, Debug)]
pub enum InjectionError {
    #[error("注入点无法写入: {owner}.{field}, 原因: {source}")]
    FieldNotWritable {
        owner: &'static str,
        field: &'static str,
        source: FieldAccessError,
    },

    #[error("注入点依赖创建失败: {owner}.{field}, 原因: {source}")]
    DependencyUnresolved {
        owner: &'static str,
        field: &'static str,
        source: InstantiationError,
    },
}

/// 字段写入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldAccessError {
    #[error("目标实例不是 {expected}")]
    OwnerTypeMismatch { expected: &'static str },

    #[error("依赖实例不是 {expected}")]
    ValueTypeMismatch { expected: &'static str },
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {source}")]
    LoadError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },
}

/// 结果类型别名
pub type ContextResult<T> = Result<T, ContextError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
