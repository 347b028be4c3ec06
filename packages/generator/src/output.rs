/// Accumulating text buffer for generated entries.
///
/// Entries are appended in discovery order and never reordered or
/// deduplicated; the buffer contents are substituted verbatim into a
/// template skeleton at render time.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append the reserved zero-valued entry: `<name> = 0;`
    ///
    /// No leading indent; the skeleton supplies it for the first line.
    pub fn push_sentinel_entry(&mut self, name: &str) {
        self.add(&format!("{name} = 0;\n"));
    }

    /// Append one enumeration entry: `    <name> = <id>;`
    ///
    /// A tagged entry gets its dispatch comment glued directly after the
    /// semicolon; that byte layout is part of the regeneration contract.
    pub fn push_enum_entry(&mut self, name: &str, id: i32, tag: Option<&str>) {
        self.add(&format!("    {name} = {id};"));
        if let Some(tag) = tag {
            self.add(&format!("// dispatch to {tag}"));
        }
        self.add("\n");
    }

    /// Append one tag-table entry: `    <id> : "<tag>",`
    pub fn push_tag_entry(&mut self, id: i32, tag: &str) {
        self.add(&format!("    {id} : \"{tag}\",\n"));
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_entry_has_no_leading_indent() {
        let mut buffer = OutputBuffer::new();
        buffer.push_sentinel_entry("Unknown");
        assert_eq!(buffer.as_str(), "Unknown = 0;\n");
    }

    #[test]
    fn test_untagged_enum_entry() {
        let mut buffer = OutputBuffer::new();
        buffer.push_enum_entry("PingNtf", 1229488543, None);
        assert_eq!(buffer.as_str(), "    PingNtf = 1229488543;\n");
    }

    #[test]
    fn test_tagged_enum_entry_glues_the_comment_to_the_semicolon() {
        let mut buffer = OutputBuffer::new();
        buffer.push_enum_entry("LoginReq", 220807908, Some("auth"));
        assert_eq!(
            buffer.as_str(),
            "    LoginReq = 220807908;// dispatch to auth\n"
        );
    }

    #[test]
    fn test_tag_entry_format() {
        let mut buffer = OutputBuffer::new();
        buffer.push_tag_entry(220807908, "auth");
        assert_eq!(buffer.as_str(), "    220807908 : \"auth\",\n");
    }

    #[test]
    fn test_entries_accumulate_in_append_order() {
        let mut buffer = OutputBuffer::new();
        buffer.push_sentinel_entry("Unknown");
        buffer.push_enum_entry("BReq", 2, None);
        buffer.push_enum_entry("AReq", 1, None);
        assert_eq!(
            buffer.as_str(),
            "Unknown = 0;\n    BReq = 2;\n    AReq = 1;\n"
        );
    }
}
