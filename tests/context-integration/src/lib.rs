//! 集成测试使用的示例 Bean

pub mod beans;
