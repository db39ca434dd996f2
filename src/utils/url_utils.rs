/// `{base}/{path}` with exactly one slash between the two.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Base URL as stored by the client: trimmed, no trailing slash.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_a_single_slash() {
        assert_eq!(
            join_url("http://localhost:8000", "triage_chain"),
            "http://localhost:8000/triage_chain"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "/schedule"),
            "http://localhost:8000/schedule"
        );
    }

    #[test]
    fn keeps_a_base_path_prefix() {
        assert_eq!(
            join_url("https://care.example.org/api", "prescription/42"),
            "https://care.example.org/api/prescription/42"
        );
    }

    #[test]
    fn normalizes_base_urls() {
        assert_eq!(normalize_base_url(" http://10.0.2.2:8000// "), "http://10.0.2.2:8000");
    }
}
