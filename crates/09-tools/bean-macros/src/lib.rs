//! # Bean Macros
//!
//! 这个 crate 提供了生成 Bean 类型元数据的派生宏。
//!
//! ## 核心宏
//!
//! - [`Bean`](derive@Bean) - 为结构体实现 `context_common::Bean`
//!
//! ## 使用示例
//!
//! ```rust
//! use bean_macros::Bean;
//!
//! #[derive(Debug, Default, Bean)]
//! pub struct Repository;
//!
//! #[derive(Debug, Default, Bean)]
//! #[bean(name = "orders", scope = "prototype")]
//! pub struct OrderService {
//!     #[inject]
//!     repository: Option<Repository>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod bean;
mod utils;

/// Bean 派生宏
///
/// 生成 `context_common::Bean` 实现，提供名称标记、作用域、无参构造器和注入点。
///
/// # 类型属性 `#[bean(..)]`
///
/// - `singleton` / `prototype` - 作用域（默认单例）
/// - `scope = "singleton" | "prototype"` - 同上
/// - `name = "customName"` - 显式 Bean 名称
/// - `factory = "Self::try_new"` - 可失败的无参构造函数，返回 `Result<Self, E>`；
///   未声明时使用 `Default::default`
///
/// 没有 `#[bean]` 属性的类型视为未标记：名称按类型名推导，作用域为单例。
///
/// # 字段属性 `#[inject]`
///
/// 字段类型可以是 `T`、`Option<T>`、`Option<Box<T>>` 或 `Option<Arc<T>>`，`T` 必须实现 `Bean`。
///
/// # 示例
///
/// ```rust
/// use bean_macros::Bean;
///
/// #[derive(Debug, Default, Bean)]
/// pub struct Clock;
///
/// #[derive(Debug, Default, Bean)]
/// #[bean(singleton, name = "scheduler")]
/// pub struct Scheduler {
///     #[inject]
///     clock: Option<Clock>,
/// }
/// ```
#[proc_macro_derive(Bean, attributes(bean, inject))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bean::derive_bean_impl(input)
}
