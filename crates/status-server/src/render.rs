//! HTML assembly for the diagnostics page.

use crate::database::ConnectivityReport;

pub struct PageContext<'a> {
    pub connectivity: &'a ConnectivityReport,
    pub server_version: &'a str,
    pub hostname: &'a str,
    pub timestamp: &'a str,
    pub session_id: &'a str,
    pub visits: u64,
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let connectivity = if ctx.connectivity.ok {
        format!(
            "<p style='color: green;'><strong>✓ {}</strong></p>",
            escape_html(&ctx.connectivity.detail)
        )
    } else {
        format!(
            "<p style='color: red;'><strong>✗ Error:</strong> {}</p>",
            escape_html(&ctx.connectivity.detail)
        )
    };

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Multi-Tier Status</title></head>\n\
         <body>\n\
         <h1>Multi-Tier Architecture with Docker - Load Balancing</h1>\n\
         <p>Web Server: <strong>Nginx (Load Balanced) ✓</strong></p>\n\
         <p>Load Balancer: <strong>HAProxy ✓</strong></p>\n\
         <p>Application Server: <strong>Axum (x3 instances) ✓</strong></p>\n\
         <p>Session Storage: <strong>Redis ✓</strong></p>\n\
         <p>Database Server: <strong>MySQL ✓</strong></p>\n\
         {connectivity}\n\
         <hr>\n\
         <h2>System Information</h2>\n\
         <p><strong>Server Version:</strong> {version}</p>\n\
         <p><strong>Hostname (App Server):</strong> {hostname}</p>\n\
         <p><strong>Date:</strong> {timestamp}</p>\n\
         <p><strong>Session ID:</strong> {session_id}</p>\n\
         <p><strong>Session Visits (Redis):</strong> {visits}</p>\n\
         <hr>\n\
         <h2>Try the Load Balancing</h2>\n\
         <p>Reload the page a few times. You will see:</p>\n\
         <ul>\n\
         <li><strong>Hostname:</strong> rotates across the app instances (round-robin)</li>\n\
         <li><strong>Session Visits:</strong> keeps increasing (shared Redis store)</li>\n\
         <li><strong>Session ID:</strong> stays the same (persistent session)</li>\n\
         </ul>\n\
         <form method=\"POST\">\n\
         <input type=\"submit\" value=\"Reload and continue\">\n\
         </form>\n\
         </body>\n\
         </html>\n",
        connectivity = connectivity,
        version = escape_html(ctx.server_version),
        hostname = escape_html(ctx.hostname),
        timestamp = ctx.timestamp,
        session_id = escape_html(ctx.session_id),
        visits = ctx.visits,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(report: &'a ConnectivityReport) -> PageContext<'a> {
        PageContext {
            connectivity: report,
            server_version: "0.1.0",
            hostname: "app1",
            timestamp: "2026-01-02 03:04:05",
            session_id: "abc-123",
            visits: 7,
        }
    }

    #[test]
    fn success_page_carries_green_indicator_and_metadata() {
        let report = ConnectivityReport {
            ok: true,
            detail: "Database connection established successfully!".to_string(),
        };
        let html = render_page(&context(&report));

        assert!(html.contains("color: green"));
        assert!(html.contains("✓ Database connection established successfully!"));
        assert!(html.contains("<strong>Hostname (App Server):</strong> app1"));
        assert!(html.contains("<strong>Session ID:</strong> abc-123"));
        assert!(html.contains("<strong>Session Visits (Redis):</strong> 7"));
        assert!(html.contains("<strong>Date:</strong> 2026-01-02 03:04:05"));
    }

    #[test]
    fn failure_page_carries_red_indicator_with_message() {
        let report = ConnectivityReport {
            ok: false,
            detail: "Connection refused (os error 111)".to_string(),
        };
        let html = render_page(&context(&report));

        assert!(html.contains("color: red"));
        assert!(html.contains("✗ Error:"));
        assert!(html.contains("Connection refused"));
        // The tier banner is fixed content, rendered on failure too.
        assert!(html.contains("HAProxy"));
    }

    #[test]
    fn dynamic_fields_are_escaped() {
        let report = ConnectivityReport {
            ok: false,
            detail: "unexpected <packet> & noise".to_string(),
        };
        let html = render_page(&context(&report));
        assert!(html.contains("unexpected &lt;packet&gt; &amp; noise"));
        assert!(!html.contains("<packet>"));
    }
}
