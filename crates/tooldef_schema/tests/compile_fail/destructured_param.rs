use tooldef_schema::describe;

#[describe]
/// Destructured parameters have no name to report.
fn sum_pair((a, b): (i64, i64)) -> String {
    (a + b).to_string()
}

fn main() {}
