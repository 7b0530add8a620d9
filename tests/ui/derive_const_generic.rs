use type_label::TypeName;

#[allow(dead_code)]
#[derive(TypeName)]
struct Buffer<T, const N: usize>([T; N]);

fn main() {}
