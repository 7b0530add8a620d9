use type_label::{render, FixedName, TypeName};

// "i32" needs four bytes with its terminator.
#[allow(dead_code)]
const NAME: FixedName<3> = render::<3>(<i32 as TypeName>::SHAPE);

fn main() {}
