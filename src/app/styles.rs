use bootstrap::{StyleLayer, StylesheetResource};
use shared_constants::{APPLICATION_STYLESHEET, FEATURE_STYLESHEET, FRAMEWORK_STYLESHEET};

/// Global stylesheets bundled into the binary, in cascade order.
pub fn bundled_stylesheets() -> [StylesheetResource; 3] {
    [
        StylesheetResource::bundled(
            FRAMEWORK_STYLESHEET,
            StyleLayer::Framework,
            include_str!("../../styles/framework.css"),
        ),
        StylesheetResource::bundled(
            APPLICATION_STYLESHEET,
            StyleLayer::Application,
            include_str!("../../styles/style.css"),
        ),
        StylesheetResource::bundled(
            FEATURE_STYLESHEET,
            StyleLayer::Feature,
            include_str!("../../styles/clock.css"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use bootstrap::{apply_stylesheets, MemoryDocument, StylesheetSet};

    use super::*;

    #[test]
    fn test_bundled_stylesheets_cascade() {
        let document = MemoryDocument::new();
        let set: StylesheetSet = bundled_stylesheets().into_iter().collect();

        assert_eq!(apply_stylesheets(&document, &set), Ok(3));

        let order: Vec<String> = document
            .stylesheets()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(order, vec!["framework.css", "style.css", "clock.css"]);
        assert_eq!(
            document.computed_style(".clock", "color").as_deref(),
            Some("#0d6efd")
        );
        assert_eq!(
            document.computed_style(".clock", "font-family").as_deref(),
            Some("monospace")
        );
        assert_eq!(
            document.computed_style(".clock", "font-size").as_deref(),
            Some("2.5rem")
        );
    }
}
