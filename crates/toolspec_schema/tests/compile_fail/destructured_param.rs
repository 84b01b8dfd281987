use toolspec_schema::tool_schema;

/// Computes an area.
///
/// Args:
///     size: width and height
#[tool_schema]
fn area((width, height): (f64, f64)) -> f64 {
    width * height
}

fn main() {}
