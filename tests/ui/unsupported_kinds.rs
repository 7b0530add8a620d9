use type_label::type_id;

fn main() {
    let _ = type_id::<[u8; 4]>();
    let _ = type_id::<(i32, u8)>();
    let _ = type_id::<fn()>();
    let _ = type_id::<dyn std::fmt::Debug>();
}
