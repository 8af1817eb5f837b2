//! Bean 派生宏实现

use crate::utils::{extract_generic_type, field_has_attribute, is_option_type, is_type_named};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Meta, Path, Result, Type};

/// Bean 作用域参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeanScopeArg {
    #[default]
    Singleton,
    Prototype,
}

impl BeanScopeArg {
    fn parse(value: &LitStr) -> Result<Self> {
        match value.value().as_str() {
            "singleton" => Ok(Self::Singleton),
            "prototype" => Ok(Self::Prototype),
            other => Err(syn::Error::new_spanned(
                value,
                format!("未知的作用域 `{other}`，可选 singleton 或 prototype"),
            )),
        }
    }

    fn to_tokens(self) -> TokenStream2 {
        match self {
            Self::Singleton => quote! { ::context_common::BeanScope::Singleton },
            Self::Prototype => quote! { ::context_common::BeanScope::Prototype },
        }
    }
}

/// `#[bean(..)]` 参数
#[derive(Debug, Clone, Default)]
pub struct BeanArgs {
    /// 是否声明了 `#[bean]`
    pub marked: bool,
    /// 作用域
    pub scope: BeanScopeArg,
    /// 显式名称
    pub name: Option<String>,
    /// 自定义构造函数
    pub factory: Option<Path>,
}

impl BeanArgs {
    /// 从类型属性中解析参数
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("bean")) {
            args.marked = true;
            if matches!(attr.meta, Meta::Path(_)) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("singleton") {
                    args.scope = BeanScopeArg::Singleton;
                } else if meta.path.is_ident("prototype") {
                    args.scope = BeanScopeArg::Prototype;
                } else if meta.path.is_ident("scope") {
                    let value: LitStr = meta.value()?.parse()?;
                    args.scope = BeanScopeArg::parse(&value)?;
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    args.name = Some(value.value());
                } else if meta.path.is_ident("factory") {
                    let value: LitStr = meta.value()?.parse()?;
                    args.factory = Some(value.parse()?);
                } else {
                    return Err(meta.error("不支持的 bean 参数"));
                }
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// 注入字段的包装形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldShape {
    Plain,
    Optional,
    OptionalBox,
    OptionalArc,
}

/// 解析出的注入字段
struct InjectField<'a> {
    ident: &'a Ident,
    dependency: &'a Type,
    shape: FieldShape,
}

impl<'a> InjectField<'a> {
    fn from_type(ident: &'a Ident, ty: &'a Type) -> Self {
        if is_option_type(ty) {
            if let Some(inner) = extract_generic_type(ty) {
                for (wrapper, shape) in [("Box", FieldShape::OptionalBox), ("Arc", FieldShape::OptionalArc)] {
                    if is_type_named(inner, wrapper) {
                        if let Some(dependency) = extract_generic_type(inner) {
                            return Self { ident, dependency, shape };
                        }
                    }
                }
                return Self {
                    ident,
                    dependency: inner,
                    shape: FieldShape::Optional,
                };
            }
        }

        Self {
            ident,
            dependency: ty,
            shape: FieldShape::Plain,
        }
    }

    fn to_tokens(&self) -> TokenStream2 {
        let ident = self.ident;
        let dependency = self.dependency;
        let field_name = ident.to_string();
        let value = match self.shape {
            FieldShape::Plain => quote! { dependency },
            FieldShape::Optional => quote! { ::std::option::Option::Some(dependency) },
            FieldShape::OptionalBox => {
                quote! { ::std::option::Option::Some(::std::boxed::Box::new(dependency)) }
            }
            FieldShape::OptionalArc => {
                quote! { ::std::option::Option::Some(::std::sync::Arc::new(dependency)) }
            }
        };

        quote! {
            .with_injection_point(::context_common::InjectionPoint::new::<Self, #dependency>(
                #field_name,
                |owner, dependency| {
                    owner.#ident = #value;
                },
            ))
        }
    }
}

/// 实现 #[derive(Bean)] 宏
pub fn derive_bean_impl(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

/// 生成 Bean 实现
pub fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Bean 不支持泛型参数",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Bean)] 只支持结构体",
            ))
        }
    };

    let args = BeanArgs::from_attrs(&input.attrs)?;
    let injection_points = injection_fields(fields)?
        .iter()
        .map(InjectField::to_tokens)
        .collect::<Vec<_>>();

    let marker = if args.marked {
        let scope = args.scope.to_tokens();
        let name = args.name.as_ref().map(|name| quote! { .with_name(#name) });
        quote! {
            .with_marker(::context_common::BeanMarker::new(#scope) #name)
        }
    } else {
        quote! {}
    };

    let constructor = match &args.factory {
        Some(factory) => quote! {
            || -> ::std::result::Result<::context_common::BeanInstance, ::context_common::BoxError> {
                match #factory() {
                    ::std::result::Result::Ok(bean) => ::std::result::Result::Ok(
                        ::std::boxed::Box::new(bean) as ::context_common::BeanInstance,
                    ),
                    ::std::result::Result::Err(err) => ::std::result::Result::Err(
                        ::std::convert::Into::<::context_common::BoxError>::into(err),
                    ),
                }
            }
        },
        None => quote! { ::context_common::default_constructor::<Self> },
    };

    Ok(quote! {
        impl ::context_common::Bean for #struct_name {
            fn descriptor() -> ::context_common::TypeDescriptor {
                ::context_common::TypeDescriptor::of::<Self>()
                    #marker
                    .with_constructor(#constructor)
                    #(#injection_points)*
            }
        }
    })
}

/// 收集标记了 #[inject] 的字段
fn injection_fields(fields: &Fields) -> Result<Vec<InjectField<'_>>> {
    let mut result = Vec::new();

    for field in fields.iter().filter(|field| field_has_attribute(field, "inject")) {
        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "#[inject] 只支持具名字段")
        })?;
        result.push(InjectField::from_type(ident, &field.ty));
    }

    Ok(result)
}
