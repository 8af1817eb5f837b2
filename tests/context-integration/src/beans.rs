//! 示例 Bean
//!
//! `FirstBean` 为原型，`OtherBean` 和 `NotBean` 未标记（单例），
//! `AnotherBean` 显式命名并注入一个 `NotBean`。

use bean_macros::Bean;

/// 原型 Bean
#[derive(Debug, Default, Bean)]
#[bean(prototype)]
pub struct FirstBean;

impl FirstBean {
    /// 示例方法
    pub fn do_something(&self) -> &'static str {
        "Hi, I'm first bean"
    }
}

/// 未标记的 Bean
#[derive(Debug, Default, Bean)]
pub struct OtherBean;

impl OtherBean {
    /// 示例方法
    pub fn do_something(&self) -> &'static str {
        "Hi, I'm other bean"
    }
}

/// 未标记的普通类型，作为注入目标
#[derive(Debug, Default, Bean)]
pub struct NotBean;

impl NotBean {
    /// 示例方法
    pub fn do_something(&self) -> &'static str {
        "Hi, I'm not bean"
    }
}

/// 显式命名的单例，注入 `NotBean`
#[derive(Debug, Default, Bean)]
#[bean(singleton, name = "anotherBean")]
pub struct AnotherBean {
    #[inject]
    not_bean: Option<NotBean>,
}

impl AnotherBean {
    /// 示例方法
    pub fn do_something(&self) -> &'static str {
        "Hi, I'm another bean"
    }

    /// 调用注入的依赖
    pub fn do_something_with_not_bean(&self) -> Option<&'static str> {
        self.not_bean.as_ref().map(NotBean::do_something)
    }

    /// 注入的依赖
    pub fn not_bean(&self) -> Option<&NotBean> {
        self.not_bean.as_ref()
    }
}

/// 依赖链：`Outer` 注入 `AnotherBean`，用于验证注入只有一层
#[derive(Debug, Default, Bean)]
pub struct Outer {
    #[inject]
    inner: Option<Box<AnotherBean>>,
}

impl Outer {
    /// 注入的依赖
    pub fn inner(&self) -> Option<&AnotherBean> {
        self.inner.as_deref()
    }
}
