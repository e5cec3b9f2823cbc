//! Minimal CSS rule reader used by [`crate::MemoryDocument`] to resolve the
//! cascade by registration order.
//!
//! Only plain `selector-list { property: value; ... }` rules are read.
//! At-rules are skipped: block at-rules (`@media`, `@font-face`, ...)
//! together with their block, statement at-rules (`@charset`, `@import`)
//! up to their `;`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn matches(&self, selector: &str) -> bool {
        let selector = normalize_selector(selector);
        self.selectors.iter().any(|s| *s == selector)
    }

    /// Value of the last declaration of `property` in this rule.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property.eq_ignore_ascii_case(property))
            .map(|d| d.value.as_str())
    }
}

fn normalize_selector(selector: &str) -> String {
    selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Returns the index just past the `}` closing the block opened at `open`.
fn block_end(source: &str, open: usize) -> usize {
    let mut depth = 0usize;
    for (i, c) in source[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return open + i + 1;
                }
            }
            _ => {}
        }
    }
    source.len()
}

fn parse_declarations(block: &str) -> Vec<Declaration> {
    block
        .split(';')
        .filter_map(|d| d.split_once(':'))
        .map(|(property, value)| Declaration {
            property: property.trim().to_string(),
            value: value.trim().to_string(),
        })
        .filter(|d| !d.property.is_empty() && !d.value.is_empty())
        .collect()
}

/// Length of the leading block-less at-rules (`@charset`, `@import`,
/// `@namespace`, ...) of `source`, each terminated by `;`.
fn statements_len(source: &str) -> usize {
    let mut len = 0;
    loop {
        let rest = &source[len..];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('@') {
            return len;
        }
        let start = len + rest.len() - trimmed.len();
        match (trimmed.find(';'), trimmed.find('{')) {
            (Some(semi), Some(open)) if semi < open => len = start + semi + 1,
            (Some(semi), None) => len = start + semi + 1,
            _ => return len,
        }
    }
}

/// Reads the style rules of `source` in source order.
pub fn parse_rules(source: &str) -> Vec<StyleRule> {
    let source = strip_comments(source);
    let mut rules = Vec::new();
    let mut cursor = 0;

    loop {
        cursor += statements_len(&source[cursor..]);
        let Some(offset) = source[cursor..].find('{') else {
            break;
        };
        let open = cursor + offset;
        let end = block_end(&source, open);
        let prelude = source[cursor..open].trim();

        if !prelude.starts_with('@') {
            let body = source[open + 1..end].trim_end_matches('}');
            let selectors: Vec<String> = prelude
                .split(',')
                .map(normalize_selector)
                .filter(|s| !s.is_empty())
                .collect();
            if !selectors.is_empty() {
                rules.push(StyleRule {
                    selectors,
                    declarations: parse_declarations(body),
                });
            }
        }
        cursor = end;
    }
    rules
}
