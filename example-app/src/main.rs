//! # 示例应用程序
//!
//! 演示如何使用简单应用上下文注册、启动和获取 Bean

use anyhow::Context as _;
use bean_macros::Bean;
use clap::Parser;
use context_abstractions::ApplicationContext;
use context_common::{Bean as _, ContextSettings};
use context_impl::SimpleApplicationContext;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "简单应用上下文示例")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 问候语模板
#[derive(Debug, Bean)]
#[bean(factory = "Self::from_env")]
struct GreetingTemplate {
    template: String,
}

impl GreetingTemplate {
    fn from_env() -> Result<Self, std::env::VarError> {
        match std::env::var("GREETING_TEMPLATE") {
            Ok(template) => Ok(Self { template }),
            Err(std::env::VarError::NotPresent) => Ok(Self {
                template: "Hello, {}!".to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    fn render(&self, name: &str) -> String {
        self.template.replace("{}", name)
    }
}

/// 问候服务，单例
#[derive(Debug, Default, Bean)]
#[bean(name = "greeter")]
struct GreetingService {
    #[inject]
    template: Option<GreetingTemplate>,
}

impl GreetingService {
    fn greet(&self, name: &str) -> String {
        match &self.template {
            Some(template) => template.render(name),
            None => format!("Hello, {name}!"),
        }
    }
}

/// 请求对象，每次获取都是新实例
#[derive(Debug, Default, Bean)]
#[bean(prototype)]
struct GreetingRequest {
    #[inject]
    greeter: Option<Box<GreetingService>>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动简单应用上下文示例");

    let settings = ContextSettings::load(args.config.as_deref()).context("加载上下文配置失败")?;
    info!("上下文配置: {:?}", settings);

    let mut ctx = SimpleApplicationContext::with_settings(
        vec![
            GreetingTemplate::descriptor(),
            GreetingService::descriptor(),
            GreetingRequest::descriptor(),
        ],
        settings,
    )?;
    ctx.start()?;

    for name in ctx.bean_names() {
        info!(
            "Bean {}: singleton={}, prototype={}",
            name,
            ctx.is_singleton(&name)?,
            ctx.is_prototype(&name)?
        );
    }

    let greeter = ctx.get_bean_of::<GreetingService>()?;
    info!("{}", greeter.greet("world"));

    let first = ctx.get_bean_of::<GreetingRequest>()?;
    let second = ctx.get_bean_of::<GreetingRequest>()?;
    info!("原型实例不同: {}", !Arc::ptr_eq(&first, &second));

    // 注入的依赖总是新建的实例，注入只有一层
    if let Some(injected) = &first.greeter {
        info!("请求中的问候服务已注入模板: {}", injected.template.is_some());
    }

    Ok(())
}
