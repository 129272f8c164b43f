// Field dispatch is resolved per concrete type

use envtag::Populate;

#[derive(Populate)]
struct Wrapper<T> {
    pub inner: T,
}

fn main() {
    let wrapper = Wrapper { inner: 1u8 };
    println!("{}", wrapper.inner);
}
