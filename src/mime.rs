//! Content-type overrides for served assets.
//!
//! Inference itself is `mime_guess`, done by the file service. The
//! overrides here are applied to its result afterwards.

/// Content type forced onto JavaScript sources and modules
pub const JAVASCRIPT: &str = "application/javascript";

/// Returns the forced content type for `path`, if its extension has one.
///
/// Matching is on the decoded path and is case-sensitive.
pub fn override_for(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") || path.ends_with(".mjs") {
        Some(JAVASCRIPT)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_overrides() {
        assert_eq!(override_for("/scripts/app.js"), Some(JAVASCRIPT));
        assert_eq!(override_for("/scripts/engine.mjs"), Some(JAVASCRIPT));
        assert_eq!(override_for("main.js"), Some("application/javascript"));
    }

    #[test]
    fn test_other_extensions_fall_through() {
        assert_eq!(override_for("/public/index.html"), None);
        assert_eq!(override_for("/data/jobs.json"), None);
        assert_eq!(override_for("/scripts/"), None);
        assert_eq!(override_for("/scripts/app.jsx"), None);
        assert_eq!(override_for("/scripts/app.js.map"), None);
    }

    #[test]
    fn test_override_differs_from_inference() {
        let inferred = mime_guess::from_path("scripts/app.js").first_or_octet_stream();
        assert_ne!(inferred.essence_str(), JAVASCRIPT);
        let html = mime_guess::from_path("index.html").first_or_octet_stream();
        assert_eq!(html.essence_str(), "text/html");
    }

    #[test]
    fn test_override_is_case_sensitive() {
        assert_eq!(override_for("/SCRIPTS/APP.JS"), None);
    }
}
