use type_label::TypeName;

#[allow(dead_code)]
#[derive(TypeName)]
union Bits {
    a: u32,
    b: f32,
}

fn main() {}
