use tooldef_schema::describe;

#[describe]
/// Generic functions have no single signature.
fn generic_fn<T: ToString>(value: T) -> String {
    value.to_string()
}

fn main() {}
