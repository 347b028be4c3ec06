use msgidgen_common::{CommonError, CommonResult};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Keyword that introduces a declaration line
pub const MESSAGE_KEYWORD: &str = "message";

/// Name suffixes that mark a declaration as a routable message
pub const MESSAGE_SUFFIXES: [&str; 3] = ["Req", "Rsp", "Ntf"];

/// Token prefix carrying a dispatch tag
const TAG_PREFIX: &str = "tag:";

/// Extension of declaration files
const DECL_EXTENSION: &str = "proto";

/// A `message` declaration recognized in an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared name as written in the source
    pub name: String,

    /// Dispatch tag from a `tag:<value>` token on the same line.
    /// `Some("")` when the token is a bare `tag:`, which still counts as tagged.
    pub tag: Option<String>,
}

/// Declarations collected from one directory walk, in walk-then-line order
#[derive(Debug, Default)]
pub struct ScanResult {
    pub declarations: Vec<Declaration>,
    pub files_scanned: usize,
}

/// Parse one source line into a declaration, if it qualifies.
///
/// Lines are whitespace-tokenized, not parsed structurally: token 0 must be
/// the `message` keyword and token 1 a name with a recognized suffix. Any
/// token on the line may carry the tag annotation.
pub fn parse_line(line: &str) -> Option<Declaration> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let keyword = tokens[0];
    let name = tokens[1];

    if keyword != MESSAGE_KEYWORD {
        return None;
    }
    if !MESSAGE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return None;
    }

    let tag = tokens
        .iter()
        .find(|token| token.starts_with(TAG_PREFIX))
        .map(|token| {
            token
                .splitn(2, ':')
                .nth(1)
                .unwrap_or_default()
                .to_string()
        });

    Some(Declaration {
        name: name.to_string(),
        tag,
    })
}

/// Recursively collect qualifying declarations under `root`.
///
/// Entries are visited in lexical order so repeated runs over an unchanged
/// tree yield identical output. Files named `skip_file_name` (the generated
/// enumeration itself) and files without the `.proto` extension are skipped.
/// Walk and read errors abort the scan.
pub fn scan_dir(root: &Path, skip_file_name: &str) -> CommonResult<ScanResult> {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name() == OsStr::new(skip_file_name) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(DECL_EXTENSION) {
            continue;
        }

        let source = fs::read_to_string(path).map_err(|err| {
            CommonError::Generic(format!("failed to read {}: {err}", path.display()))
        })?;

        result.files_scanned += 1;
        let before = result.declarations.len();

        for line in source.lines() {
            if let Some(declaration) = parse_line(line) {
                result.declarations.push(declaration);
            }
        }

        debug!(
            file = %path.display(),
            messages = result.declarations.len() - before,
            "scanned declaration file"
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_suffix_qualifies() {
        let decl = parse_line("message LoginReq {").unwrap();
        assert_eq!(decl.name, "LoginReq");
        assert_eq!(decl.tag, None);
    }

    #[test]
    fn test_all_three_suffixes_qualify() {
        assert!(parse_line("message FooReq").is_some());
        assert!(parse_line("message FooRsp").is_some());
        assert!(parse_line("message FooNtf").is_some());
    }

    #[test]
    fn test_unrecognized_suffix_is_excluded() {
        assert!(parse_line("message FooBar {").is_none());
        assert!(parse_line("message Login").is_none());
    }

    #[test]
    fn test_matching_is_a_suffix_test_not_a_full_match() {
        assert!(parse_line("message SubFooReq").is_some());
    }

    #[test]
    fn test_non_message_keyword_is_excluded() {
        assert!(parse_line("enum LoginReq").is_none());
        assert!(parse_line("// message LoginReq").is_none());
    }

    #[test]
    fn test_short_lines_are_skipped() {
        assert!(parse_line("").is_none());
        assert!(parse_line("message").is_none());
        assert!(parse_line("   ").is_none());
    }

    #[test]
    fn test_tag_token_is_extracted() {
        let decl = parse_line("message PingReq tag:net").unwrap();
        assert_eq!(decl.tag, Some("net".to_string()));
    }

    #[test]
    fn test_tag_may_appear_anywhere_on_the_line() {
        let decl = parse_line("message PingReq { tag:gateway").unwrap();
        assert_eq!(decl.tag, Some("gateway".to_string()));
    }

    #[test]
    fn test_tag_value_is_everything_after_the_first_colon() {
        let decl = parse_line("message PingReq tag:scene:battle").unwrap();
        assert_eq!(decl.tag, Some("scene:battle".to_string()));
    }

    #[test]
    fn test_bare_tag_token_counts_as_an_empty_tag() {
        let decl = parse_line("message PingReq tag:").unwrap();
        assert_eq!(decl.tag, Some(String::new()));
    }

    #[test]
    fn test_extra_whitespace_between_tokens_is_tolerated() {
        let decl = parse_line("  message   LoginReq   tag:auth  ").unwrap();
        assert_eq!(decl.name, "LoginReq");
        assert_eq!(decl.tag, Some("auth".to_string()));
    }
}
