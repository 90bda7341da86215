//! Case conversion from kebab-case slugs to the naming conventions used in
//! generated TypeScript, SQL and docs.
//!
//! All functions are total: malformed input (leading hyphen, empty segments,
//! empty string) produces degenerate output but never panics.

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `grant-review` -> `grantReview`
pub fn to_camel_case(slug: &str) -> String {
    let mut parts = slug.split('-');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

/// `grant-review` -> `GrantReview`
pub fn to_pascal_case(slug: &str) -> String {
    slug.split('-').map(capitalize).collect()
}

/// `grant-review` -> `grant_review`
pub fn to_snake_case(slug: &str) -> String {
    slug.replace('-', "_")
}

/// `grant-review` -> `GRANT_REVIEW`
pub fn to_upper_snake(slug: &str) -> String {
    to_snake_case(slug).to_uppercase()
}

/// `grant-review` -> `Grant Review`
pub fn to_title(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Every derived form of one slug, computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    pub slug: String,
    pub camel: String,
    pub pascal: String,
    pub snake: String,
    pub upper_snake: String,
    pub title: String,
}

impl NameVariants {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            camel: to_camel_case(slug),
            pascal: to_pascal_case(slug),
            snake: to_snake_case(slug),
            upper_snake: to_upper_snake(slug),
            title: to_title(slug),
        }
    }
}
