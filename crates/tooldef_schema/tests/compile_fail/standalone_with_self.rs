use tooldef_schema::describe;

#[describe]
/// Free functions cannot take a receiver.
fn standalone(&self) -> String {
    String::new()
}

fn main() {}
