//! 404 and 500 pages

use super::layout;

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        &[],
        r#"    <section class="error-page">
        <h1>404</h1>
        <p>The page you are looking for does not exist.</p>
        <p><a href="/">Back to home</a></p>
    </section>
"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        &[],
        r#"    <section class="error-page">
        <h1>500</h1>
        <p>Something went wrong on our end. Please try again later.</p>
        <p><a href="/">Back to home</a></p>
    </section>
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_pages() {
        assert!(not_found_page().contains("<h1>404</h1>"));
        assert!(server_error_page().contains("<h1>500</h1>"));
    }
}
