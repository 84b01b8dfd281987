use toolspec_schema::tool_schema;

/// Adds one.
///
/// Args:
///     x: the input
#[tool_schema(strict)]
fn increment(x: i64) -> i64 {
    x + 1
}

fn main() {}
