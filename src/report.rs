use crate::types::ProbeResult;

pub const SEPARATOR_WIDTH: usize = 40;

/// Renders a result into the lines shared by the console and the log file.
pub fn render(result: &ProbeResult) -> Vec<String> {
    let mut lines = vec![
        "=".repeat(SEPARATOR_WIDTH),
        identification_line(),
        format!("Sending GET request to {}", result.url),
    ];

    if let Some(status) = result.status_code {
        lines.push(format!("Status Code: {}", status));
    }

    lines.push(format!("Response Time: {:.3} seconds", result.elapsed_seconds));

    if result.status_code.is_some() {
        lines.push("Response Headers:".to_string());
        for (name, value) in &result.headers {
            lines.push(format!("  {}: {}", name, value));
        }
    }

    if let Some(ref body) = result.body_excerpt {
        lines.push("Response Body:".to_string());
        for line in body.lines() {
            lines.push(format!("  {}", line));
        }
    }

    let last = match result.error {
        Some(ref error) => format!("Request failed: {}", error),
        None => result.classification().describe(),
    };
    lines.push(last);

    lines
}

fn identification_line() -> String {
    format!(
        "{} v{} | OAuth token endpoint reachability probe",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn result(status_code: Option<u16>, error: Option<&str>) -> ProbeResult {
        ProbeResult {
            timestamp: Local::now(),
            url: "https://accounts.spotify.com/api/token".into(),
            status_code,
            headers: if status_code.is_some() {
                vec![
                    ("Content-Type".into(), "text/html; charset=UTF-8".into()),
                    ("Content-Length".into(), "304".into()),
                ]
            } else {
                Vec::new()
            },
            elapsed_seconds: 0.4567,
            error: error.map(str::to_string),
            body_excerpt: None,
        }
    }

    #[test]
    fn forbidden_report_layout() {
        let lines = render(&result(Some(403), None));

        assert_eq!(lines[0], "=".repeat(40));
        assert!(lines[1].contains(env!("CARGO_PKG_NAME")));
        assert_eq!(
            lines[2],
            "Sending GET request to https://accounts.spotify.com/api/token"
        );
        assert_eq!(lines[3], "Status Code: 403");
        assert_eq!(lines[4], "Response Time: 0.457 seconds");
        assert_eq!(lines[5], "Response Headers:");
        assert_eq!(lines[6], "  Content-Type: text/html; charset=UTF-8");
        assert_eq!(lines[7], "  Content-Length: 304");

        let last = lines.last().unwrap();
        assert!(last.contains("Forbidden"));
        assert!(last.contains("blocked"));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn success_report_ends_with_allowed() {
        let lines = render(&result(Some(200), None));
        assert!(lines.last().unwrap().contains("OK/allowed"));
    }

    #[test]
    fn network_error_omits_status_and_headers() {
        let lines = render(&result(None, Some("error sending request: connection refused")));

        assert!(!lines.iter().any(|l| l.starts_with("Status Code:")));
        assert!(!lines.iter().any(|l| l == "Response Headers:"));
        assert!(lines.iter().any(|l| l.starts_with("Response Time:")));
        assert_eq!(
            lines.last().unwrap(),
            "Request failed: error sending request: connection refused"
        );
    }

    #[test]
    fn unexpected_status_lists_body_before_final_line() {
        let mut probe = result(Some(405), None);
        probe.body_excerpt = Some("{\"error\":\n\"method_not_allowed\"}".into());
        let lines = render(&probe);

        let body_at = lines.iter().position(|l| l == "Response Body:").unwrap();
        assert_eq!(lines[body_at + 1], "  {\"error\":");
        assert_eq!(lines[body_at + 2], "  \"method_not_allowed\"}");
        assert_eq!(body_at + 3, lines.len() - 1);
        assert!(lines.last().unwrap().contains("405"));
    }
}
