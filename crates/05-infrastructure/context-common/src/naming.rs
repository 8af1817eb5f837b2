//! Bean 名称约定
//!
//! 有显式名称标记时使用标记名称，否则取类型名最后一段并把首字母小写。

use crate::descriptor::TypeDescriptor;

/// 解析 Bean 名称
pub fn resolve_name(descriptor: &TypeDescriptor) -> String {
    match descriptor.marker().and_then(|m| m.name.as_deref()) {
        Some(name) => name.to_string(),
        None => derive_bean_name(descriptor.type_name()),
    }
}

/// 从完整类型名推导 Bean 名称
///
/// `app::beans::FirstBean` -> `firstBean`，泛型参数不参与推导。
pub fn derive_bean_name(type_name: &str) -> String {
    lower_first(short_type_name(type_name))
}

/// 获取简短的类型名称（不包含模块路径和泛型参数）
pub fn short_type_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name);
    base.rsplit("::").next().unwrap_or(base)
}

/// 首字母小写
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
