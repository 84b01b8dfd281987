use toolspec_schema::tool_schema;

/// Greets someone.
///
/// Args:
///     name: who to greet
#[tool_schema]
fn greet(name: impl Into<String>) -> String {
    name.into()
}

fn main() {}
