//! 应用上下文抽象接口

use context_common::{resolve_name, Bean, ContextError, ContextResult, ContextState, SharedBean};
use std::any::type_name;
use std::sync::Arc;

/// 应用上下文 trait
///
/// 查询和访问方法在 `start()` 之前调用会返回 [`ContextError::ContextNotStarted`]，
/// 作用域判断方法除外。
pub trait ApplicationContext {
    /// 启动上下文：创建所有单例并完成注入
    fn start(&mut self) -> ContextResult<()>;

    /// 当前生命周期状态
    fn state(&self) -> ContextState;

    /// 是否已启动
    fn is_running(&self) -> bool {
        self.state() == ContextState::Running
    }

    /// 是否注册了指定名称的 Bean
    fn contains_bean(&self, name: &str) -> ContextResult<bool>;

    /// 按名称获取 Bean
    fn get_bean(&self, name: &str) -> ContextResult<SharedBean>;

    /// 按类型获取 Bean
    ///
    /// 名称按 [`resolve_name`] 从类型推导，再委托给 [`get_bean`](Self::get_bean)。
    fn get_bean_of<T>(&self) -> ContextResult<Arc<T>>
    where
        T: Bean,
        Self: Sized,
    {
        let name = resolve_name(&T::descriptor());
        self.get_bean(&name)?
            .downcast::<T>()
            .map_err(|_| ContextError::BeanTypeMismatch {
                name,
                expected: type_name::<T>(),
            })
    }

    /// 指定名称的 Bean 是否为单例
    fn is_singleton(&self, name: &str) -> ContextResult<bool>;

    /// 指定名称的 Bean 是否为原型
    fn is_prototype(&self, name: &str) -> ContextResult<bool>;

    /// 所有已注册的 Bean 名称
    fn bean_names(&self) -> Vec<String>;
}
