use bean_macros::Bean;
use context_common::{resolve_name, Bean as _, BeanScope};

#[derive(Debug, Default, Bean)]
#[bean(prototype, name = "okBean")]
struct OkBean;

fn main() {
    let descriptor = OkBean::descriptor();
    assert_eq!(resolve_name(&descriptor), "okBean");
    assert_eq!(descriptor.scope(), BeanScope::Prototype);
}
