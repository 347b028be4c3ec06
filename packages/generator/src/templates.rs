//! Fixed output skeletons.
//!
//! The skeleton bytes are kept identical to what consumers of previously
//! generated files already have checked in, stray double space in the
//! `go_package` option included. Substitution is infallible: the skeletons
//! are compile-time constants, so there is no template-parse failure mode.

/// File name of the generated enumeration artifact
pub const MSG_ID_FILE: &str = "msgid.proto";

/// File name of the generated tag-table artifact
pub const MSG_TAG_FILE: &str = "msgtag.go";

/// Skeleton of the enumeration artifact
pub const MSG_ID_TEMPLATE: &str = r#"//Code generated by msgidgen. DO NOT EDIT.
syntax = "proto3";
package {package};
option  go_package = "/{package}";

enum Msg {
    {content}}
"#;

/// Skeleton of the tag-table artifact
pub const MSG_TAG_TEMPLATE: &str = r#"//Code generated by msgidgen. DO NOT EDIT.

package {package}

var MsgIDTags = map[int32]string{
{content}}
"#;

/// Substitute the package name and accumulated content into a skeleton
pub fn render(template: &str, package: &str, content: &str) -> String {
    template
        .replace("{package}", package)
        .replace("{content}", content)
}
