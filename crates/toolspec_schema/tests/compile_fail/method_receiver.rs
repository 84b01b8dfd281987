use toolspec_schema::tool_schema;

struct Counter;

impl Counter {
    /// Bumps the counter.
    #[tool_schema]
    fn bump(&self) {}
}

fn main() {
    let _ = Counter;
}
