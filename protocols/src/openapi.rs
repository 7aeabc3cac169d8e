use serde_json::Value;

use crate::http::ProbeError;

/// Marker a page carries when it renders the Swagger UI.
pub const SWAGGER_UI_MARKER: &str = "swagger-ui";

/// Keys of the `paths` object of an OpenAPI (or Swagger 2) document.
pub fn api_paths(document: &Value) -> Result<Vec<String>, ProbeError> {
    let paths = document
        .get("paths")
        .and_then(Value::as_object)
        .ok_or(ProbeError::MissingPaths)?;

    Ok(paths.keys().cloned().collect())
}

pub fn serves_swagger_ui(body: &str) -> bool {
    body.contains(SWAGGER_UI_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_every_path_in_document_order() {
        let text = r#"{"openapi": "3.0.2", "paths": {"/v2.0/ui/": {}, "/latest/ui/": {}, "/v1.0/ui/": {}}}"#;
        let document: Value = serde_json::from_str(text).unwrap();
        let paths = api_paths(&document).unwrap();
        assert_eq!(paths, ["/v2.0/ui/", "/latest/ui/", "/v1.0/ui/"]);
    }

    #[test]
    fn document_without_paths_is_rejected() {
        assert!(matches!(api_paths(&json!({"openapi": "3.0.2"})), Err(ProbeError::MissingPaths)));
        assert!(matches!(api_paths(&json!({"paths": []})), Err(ProbeError::MissingPaths)));
    }

    #[test]
    fn detects_swagger_pages() {
        assert!(serves_swagger_ui(r#"<div id="swagger-ui"></div>"#));
        assert!(!serves_swagger_ui("<div id=\"redoc\"></div>"));
    }
}
