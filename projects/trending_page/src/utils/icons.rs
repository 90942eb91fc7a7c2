use crate::trending::extract::LANGUAGE_FALLBACK;

pub const ICON_BASE_URL: &str = "https://skillicons.dev/icons?i=";

// Languages whose icon name differs from the lowercased tag.
const ICON_ALIASES: &[(&str, &str)] = &[
    ("typescript", "ts"),
    ("javascript", "js"),
    ("shell", "bash"),
    ("python", "py"),
    ("jupyter notebook", "py"),
    ("c++", "cpp"),
    ("c#", "cs"),
    ("objective-c", "apple"),
    ("vim script", "vim"),
    ("dockerfile", "docker"),
    ("makefile", "cmake"),
];

/// Lowercased, alias-substituted icon name; `None` for the "no language" placeholder.
pub fn icon_key(language: &str) -> Option<String> {
    let lowered = language.trim().to_lowercase();
    if lowered.is_empty() || lowered == LANGUAGE_FALLBACK.to_lowercase() {
        return None;
    }

    let key = ICON_ALIASES
        .iter()
        .find(|(tag, _)| *tag == lowered)
        .map(|(_, alias)| alias.to_string())
        .unwrap_or(lowered);

    Some(key)
}

/// Best-effort icon location; an unknown key just produces a broken image the page hides.
pub fn icon_url(base_url: &str, language: &str) -> Option<String> {
    icon_key(language).map(|key| format!("{base_url}{key}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_apply_after_lowercasing() {
        assert_eq!(icon_key("TypeScript").as_deref(), Some("ts"));
        assert_eq!(icon_key("JavaScript").as_deref(), Some("js"));
        assert_eq!(icon_key("Shell").as_deref(), Some("bash"));
        assert_eq!(icon_key("C++").as_deref(), Some("cpp"));
    }

    #[test]
    fn unaliased_tags_are_lowercased() {
        assert_eq!(icon_key("Rust").as_deref(), Some("rust"));
        assert_eq!(icon_key("Go").as_deref(), Some("go"));
    }

    #[test]
    fn placeholder_language_has_no_icon() {
        assert_eq!(icon_key(LANGUAGE_FALLBACK), None);
        assert_eq!(icon_key("  "), None);
        assert_eq!(icon_url(ICON_BASE_URL, LANGUAGE_FALLBACK), None);
    }

    #[test]
    fn url_joins_base_and_key() {
        assert_eq!(
            icon_url(ICON_BASE_URL, "Python").as_deref(),
            Some("https://skillicons.dev/icons?i=py")
        );
    }
}
