//! 上下文配置
//!
//! 配置来源依次为：可选的 TOML 文件、`BEAN_CONTEXT_` 前缀的环境变量。

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "BEAN_CONTEXT";

/// Bean 名称冲突策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCollisionPolicy {
    /// 构造上下文时报错
    #[default]
    Reject,
    /// 后注册的类型覆盖先注册的类型
    Overwrite,
}

/// 上下文配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSettings {
    /// 名称冲突策略
    pub name_collision: NameCollisionPolicy,
}

impl ContextSettings {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置名称冲突策略
    pub fn with_name_collision(mut self, policy: NameCollisionPolicy) -> Self {
        self.name_collision = policy;
        self
    }

    /// 从可选的配置文件和环境变量加载配置
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 从 TOML 文本加载配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
