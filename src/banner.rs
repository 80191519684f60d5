//! Startup banner printed to the console.

use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Banner shown once the listener is bound
pub fn banner(port: u16, root: &Path) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let base = format!("http://localhost:{port}");
    [
        rule.clone(),
        "MapleQuest RPG Server".to_string(),
        rule.clone(),
        format!("Server running at: {base}"),
        format!("Serving directory: {}", root.display()),
        String::new(),
        "Open in browser:".to_string(),
        format!("   {base}/public/index.html"),
        String::new(),
        "Press Ctrl+C to stop the server".to_string(),
        rule,
    ]
    .join("\n")
}
