/// Normalize a declared name for hashing and emission.
///
/// Concatenates the word-constituent runs (alphanumeric or `_`) of
/// `prefix + name` in order, dropping punctuation and whitespace. When
/// `uppercase` is set each run is upper-cased before joining.
pub fn normalize_name(prefix: &str, name: &str, uppercase: bool) -> String {
    let raw = format!("{prefix}{name}");
    let mut out = String::with_capacity(raw.len());

    for word in raw.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if word.is_empty() {
            continue;
        }
        if uppercase {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(word);
        }
    }

    out
}

/// Name of the reserved zero-valued enumeration entry
pub fn sentinel_name(prefix: &str, uppercase: bool) -> String {
    normalize_name(prefix, "Unknown", uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(normalize_name("", "LoginReq", false), "LoginReq");
    }

    #[test]
    fn test_prefix_is_part_of_the_normalized_name() {
        assert_eq!(normalize_name("P", "LoginReq", false), "PLoginReq");
    }

    #[test]
    fn test_uppercase_applies_to_every_word() {
        assert_eq!(normalize_name("", "fooReq", true), "FOOREQ");
        assert_eq!(normalize_name("p", "loginReq", true), "PLOGINREQ");
    }

    #[test]
    fn test_punctuation_and_whitespace_are_dropped() {
        assert_eq!(normalize_name("", "Foo.Bar-Req", false), "FooBarReq");
        assert_eq!(normalize_name("", "  Login Req ", false), "LoginReq");
    }

    #[test]
    fn test_underscores_are_word_constituents() {
        assert_eq!(normalize_name("", "Gate_LoginReq", false), "Gate_LoginReq");
    }

    #[test]
    fn test_sentinel_name_honors_prefix_and_uppercase() {
        assert_eq!(sentinel_name("", false), "Unknown");
        assert_eq!(sentinel_name("P", false), "PUnknown");
        assert_eq!(sentinel_name("P", true), "PUNKNOWN");
    }
}
