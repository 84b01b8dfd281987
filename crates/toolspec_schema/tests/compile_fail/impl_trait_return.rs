use toolspec_schema::tool_schema;

/// Lists numbers.
#[tool_schema]
fn numbers() -> impl Iterator<Item = u32> {
    0..3
}

fn main() {}
