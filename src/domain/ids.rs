use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of random characters appended after the kind prefix.
const ID_RANDOM_LEN: usize = 21;

/// Kind of record an identifier is minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Shop,
    Menu,
    Collection,
    Item,
    Variant,
}

impl IdKind {
    /// Prefix placed in front of identifiers of this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Shop => "shop",
            IdKind::Menu => "menu",
            IdKind::Collection => "col",
            IdKind::Item => "item",
            IdKind::Variant => "var",
        }
    }
}

/// Generate a fresh, URL-safe identifier such as `item_V1StGXR8Z5jdHi6BmyT3a`.
pub fn new_id(kind: IdKind) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(ID_RANDOM_LEN)
        .map(char::from)
        .collect();
    format!("{}_{suffix}", kind.prefix())
}

/// Turn a display name into a lowercase, dash separated URL segment.
///
/// Falls back to `fallback` when nothing URL-safe is left.
pub fn slugify(input: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_uses_kind_prefix() {
        let id = new_id(IdKind::Collection);

        assert!(id.starts_with("col_"));
        assert_eq!(id.len(), "col_".len() + ID_RANDOM_LEN);
        assert!(id.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'));
    }

    #[test]
    fn new_id_does_not_repeat() {
        assert_ne!(new_id(IdKind::Item), new_id(IdKind::Item));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Starters & Main dishes! ", "menu"), "starters-main-dishes");
        assert_eq!(slugify("Café 24", "menu"), "caf-24");
    }

    #[test]
    fn slugify_uses_fallback_for_symbols_only() {
        assert_eq!(slugify("***", "menu"), "menu");
    }
}
