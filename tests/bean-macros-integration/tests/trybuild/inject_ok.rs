use bean_macros::Bean;
use context_abstractions::ApplicationContext;
use context_common::Bean as _;
use context_impl::SimpleApplicationContext;

#[derive(Debug, Default, Bean)]
struct Dependency;

#[derive(Debug, Default, Bean)]
struct Consumer {
    #[inject]
    dependency: Option<Dependency>,
}

fn main() {
    let mut ctx = SimpleApplicationContext::new(vec![Consumer::descriptor()]).unwrap();
    ctx.start().unwrap();
    let consumer = ctx.get_bean_of::<Consumer>().unwrap();
    assert!(consumer.dependency.is_some());
}
