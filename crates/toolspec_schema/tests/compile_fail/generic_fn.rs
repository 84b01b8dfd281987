use toolspec_schema::tool_schema;

/// Echoes a value.
///
/// Args:
///     value: anything
#[tool_schema]
fn echo<T>(value: T) -> T {
    value
}

fn main() {}
