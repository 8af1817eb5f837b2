//! 类型元数据定义
//!
//! 每个受管类型在注册期提供一张元数据表：名称标记、作用域、无参构造器以及注入点。
//! 上下文只依赖这张表工作，不需要运行时反射。

use crate::errors::{BoxError, FieldAccessError};
use crate::lifecycle::BeanScope;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 构建中的 Bean 实例，注入完成前独占可变
pub type BeanInstance = Box<dyn Any + Send + Sync>;

/// 已交付的 Bean 实例
pub type SharedBean = Arc<dyn Any + Send + Sync>;

/// 无参构造器
pub type Constructor = fn() -> Result<BeanInstance, BoxError>;

/// 类型擦除后的字段写入函数
pub type FieldSetter = Arc<
    dyn Fn(&mut (dyn Any + Send + Sync), BeanInstance) -> Result<(), FieldAccessError>
        + Send
        + Sync,
>;

/// 受管 Bean trait
///
/// 一般由 `#[derive(Bean)]` 生成实现。
pub trait Bean: Any + Send + Sync + Sized {
    /// 获取类型元数据
    fn descriptor() -> TypeDescriptor;
}

/// 基于 `Default` 的无参构造器
pub fn default_constructor<T>() -> Result<BeanInstance, BoxError>
where
    T: Default + Any + Send + Sync,
{
    Ok(Box::new(T::default()))
}

/// Bean 标记
///
/// 对应类型上的 `#[bean(..)]` 声明。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BeanMarker {
    /// 显式名称，未声明时按约定推导
    pub name: Option<String>,
    /// 作用域
    pub scope: BeanScope,
}

impl BeanMarker {
    /// 创建新的 Bean 标记
    pub fn new(scope: BeanScope) -> Self {
        Self { name: None, scope }
    }

    /// 设置显式名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// 注入点
///
/// 描述拥有者类型上一个标记了 `#[inject]` 的字段。
#[derive(Clone)]
pub struct InjectionPoint {
    /// 字段名
    pub field: &'static str,
    /// 拥有者类型名
    pub owner_type: &'static str,
    /// 依赖类型名
    pub dependency_type: &'static str,
    dependency: fn() -> TypeDescriptor,
    setter: FieldSetter,
}

impl InjectionPoint {
    /// 创建注入点
    ///
    /// `assign` 把已经创建好的依赖写入拥有者的字段。
    pub fn new<O, D>(field: &'static str, assign: fn(&mut O, D)) -> Self
    where
        O: Bean,
        D: Bean,
    {
        let setter: FieldSetter = Arc::new(
            move |owner: &mut (dyn Any + Send + Sync), value: BeanInstance| {
                let owner = owner
                    .downcast_mut::<O>()
                    .ok_or(FieldAccessError::OwnerTypeMismatch {
                        expected: type_name::<O>(),
                    })?;
                let value = value
                    .downcast::<D>()
                    .map_err(|_| FieldAccessError::ValueTypeMismatch {
                        expected: type_name::<D>(),
                    })?;
                assign(owner, *value);
                Ok(())
            },
        );

        Self {
            field,
            owner_type: type_name::<O>(),
            dependency_type: type_name::<D>(),
            dependency: D::descriptor,
            setter,
        }
    }

    /// 获取依赖类型的元数据
    pub fn dependency_descriptor(&self) -> TypeDescriptor {
        (self.dependency)()
    }

    /// 把依赖实例写入拥有者字段
    pub fn assign(
        &self,
        owner: &mut (dyn Any + Send + Sync),
        value: BeanInstance,
    ) -> Result<(), FieldAccessError> {
        (self.setter)(owner, value)
    }
}

impl fmt::Debug for InjectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionPoint")
            .field("field", &self.field)
            .field("owner_type", &self.owner_type)
            .field("dependency_type", &self.dependency_type)
            .field("setter", &"<function>")
            .finish()
    }
}

/// 类型元数据
#[derive(Clone)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    marker: Option<BeanMarker>,
    constructor: Option<Constructor>,
    injection_points: Vec<InjectionPoint>,
}

impl TypeDescriptor {
    /// 为类型创建空的元数据：无标记、无构造器、无注入点
    pub fn of<T: Any>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            marker: None,
            constructor: None,
            injection_points: Vec::new(),
        }
    }

    /// 设置 Bean 标记
    pub fn with_marker(mut self, marker: BeanMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// 设置无参构造器
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// 添加注入点
    pub fn with_injection_point(mut self, point: InjectionPoint) -> Self {
        self.injection_points.push(point);
        self
    }

    /// 类型ID
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// 完整类型名
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Bean 标记
    pub fn marker(&self) -> Option<&BeanMarker> {
        self.marker.as_ref()
    }

    /// 有效作用域：有标记取标记的作用域，否则为单例
    pub fn scope(&self) -> BeanScope {
        self.marker.as_ref().map(|m| m.scope).unwrap_or_default()
    }

    /// 无参构造器
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    /// 注入点列表
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("marker", &self.marker)
            .field("constructor", &self.constructor.map(|_| "<function>"))
            .field("injection_points", &self.injection_points)
            .finish()
    }
}
