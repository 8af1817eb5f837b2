//! 应用上下文的场景测试

use context_abstractions::ApplicationContext;
use context_common::{Bean, ContextError, ContextSettings, NameCollisionPolicy};
use context_impl::SimpleApplicationContext;
use context_integration_tests::beans::{AnotherBean, FirstBean, NotBean, OtherBean, Outer};
use std::sync::Arc;

fn context() -> SimpleApplicationContext {
    SimpleApplicationContext::new(vec![
        FirstBean::descriptor(),
        OtherBean::descriptor(),
        NotBean::descriptor(),
        AnotherBean::descriptor(),
    ])
    .unwrap()
}

#[test]
fn test_is_running() {
    let mut ctx = context();

    assert!(!ctx.is_running());
    ctx.start().unwrap();
    assert!(ctx.is_running());
}

#[test]
fn test_context_contains_not_started() {
    let ctx = context();

    assert!(matches!(
        ctx.contains_bean("firstBean"),
        Err(ContextError::ContextNotStarted)
    ));
}

#[test]
fn test_context_contains_beans() {
    let mut ctx = context();
    ctx.start().unwrap();

    assert!(ctx.contains_bean("firstBean").unwrap());
    assert!(ctx.contains_bean("otherBean").unwrap());
    assert!(!ctx.contains_bean("randomName").unwrap());
    assert!(ctx.contains_bean("notBean").unwrap());
    assert!(!ctx.contains_bean("NotBean").unwrap());
}

#[test]
fn test_context_get_bean_not_started() {
    let ctx = context();

    assert!(matches!(
        ctx.get_bean("firstBean"),
        Err(ContextError::ContextNotStarted)
    ));
}

#[test]
fn test_get_bean_returns() {
    let mut ctx = context();
    ctx.start().unwrap();

    let first = ctx.get_bean("firstBean").unwrap();
    assert!(first.downcast_ref::<FirstBean>().is_some());

    let other = ctx.get_bean("otherBean").unwrap();
    assert!(other.downcast_ref::<OtherBean>().is_some());
}

#[test]
fn test_get_bean_throws() {
    let mut ctx = context();
    ctx.start().unwrap();

    assert!(matches!(
        ctx.get_bean("missingBean"),
        Err(ContextError::NoSuchBeanDefinition { ref name }) if name == "missingBean"
    ));
}

#[test]
fn test_is_singleton_returns() {
    let ctx = context();

    assert!(!ctx.is_singleton("firstBean").unwrap());
    assert!(ctx.is_singleton("otherBean").unwrap());
}

#[test]
fn test_is_singleton_throws() {
    let ctx = context();

    assert!(matches!(
        ctx.is_singleton("randomName"),
        Err(ContextError::NoSuchBeanDefinition { .. })
    ));
}

#[test]
fn test_is_prototype_returns() {
    let ctx = context();

    assert!(ctx.is_prototype("firstBean").unwrap());
    assert!(!ctx.is_prototype("otherBean").unwrap());
}

#[test]
fn test_is_prototype_throws() {
    let ctx = context();

    assert!(matches!(
        ctx.is_prototype("randomName"),
        Err(ContextError::NoSuchBeanDefinition { .. })
    ));
}

#[test]
fn test_correct_inject() {
    let mut ctx = context();
    ctx.start().unwrap();
    assert!(ctx.contains_bean("notBean").unwrap());
    assert!(ctx.contains_bean("anotherBean").unwrap());

    let not_bean = ctx.get_bean("notBean").unwrap();
    assert!(not_bean.downcast_ref::<NotBean>().is_some());

    let bean = ctx
        .get_bean("anotherBean")
        .unwrap()
        .downcast::<AnotherBean>()
        .unwrap();
    assert_eq!(bean.do_something(), "Hi, I'm another bean");
    assert!(bean.not_bean().is_some());
    assert_eq!(bean.do_something_with_not_bean(), Some("Hi, I'm not bean"));
}

#[test]
fn test_prototype_returns_distinct_instances() {
    let mut ctx = context();
    ctx.start().unwrap();

    let first = ctx.get_bean("firstBean").unwrap();
    let second = ctx.get_bean("firstBean").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_singleton_returns_same_instance() {
    let mut ctx = context();
    ctx.start().unwrap();

    let first = ctx.get_bean("otherBean").unwrap();
    let second = ctx.get_bean("otherBean").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_get_bean_by_type() {
    let mut ctx = context();
    ctx.start().unwrap();

    let other = ctx.get_bean_of::<OtherBean>().unwrap();
    assert_eq!(other.do_something(), "Hi, I'm other bean");
    assert!(Arc::ptr_eq(&other, &ctx.get_bean_of::<OtherBean>().unwrap()));

    let another = ctx.get_bean_of::<AnotherBean>().unwrap();
    assert!(another.not_bean().is_some());

    let first = ctx.get_bean_of::<FirstBean>().unwrap();
    assert_eq!(first.do_something(), "Hi, I'm first bean");
}

#[test]
fn test_injection_is_single_level() {
    let mut ctx = SimpleApplicationContext::new(vec![Outer::descriptor()]).unwrap();
    ctx.start().unwrap();

    let outer = ctx.get_bean_of::<Outer>().unwrap();
    let inner = outer.inner().unwrap();
    assert!(inner.not_bean().is_none());
}

#[test]
fn test_duplicate_names_are_rejected() {
    let result = SimpleApplicationContext::new(vec![
        OtherBean::descriptor(),
        OtherBean::descriptor(),
    ]);

    assert!(matches!(
        result,
        Err(ContextError::DuplicateBeanName { ref name, .. }) if name == "otherBean"
    ));
}

#[test]
fn test_duplicate_names_overwrite_when_configured() {
    let settings = ContextSettings::new().with_name_collision(NameCollisionPolicy::Overwrite);
    let mut ctx = SimpleApplicationContext::with_settings(
        vec![OtherBean::descriptor(), OtherBean::descriptor()],
        settings,
    )
    .unwrap();
    ctx.start().unwrap();

    assert_eq!(ctx.bean_names(), vec!["otherBean"]);
}

#[test]
fn test_context_without_singletons_is_running_after_start() {
    let mut ctx = SimpleApplicationContext::new(vec![FirstBean::descriptor()]).unwrap();
    ctx.start().unwrap();

    assert!(ctx.is_running());
    assert!(ctx.contains_bean("firstBean").unwrap());
}

#[test]
fn test_concurrent_reads_after_start() {
    let mut ctx = context();
    ctx.start().unwrap();
    let ctx = Arc::new(ctx);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || {
                let singleton = ctx.get_bean("otherBean").unwrap();
                let prototype = ctx.get_bean("firstBean").unwrap();
                (singleton, prototype)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let reference = ctx.get_bean("otherBean").unwrap();
    for (singleton, prototype) in &results {
        assert!(Arc::ptr_eq(singleton, &reference));
        assert!(prototype.downcast_ref::<FirstBean>().is_some());
    }
}
