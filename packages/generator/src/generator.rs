use crate::config::GeneratorConfig;
use crate::hash::message_id;
use crate::normalize::{normalize_name, sentinel_name};
use crate::output::OutputBuffer;
use crate::scanner::scan_dir;
use crate::templates::{render, MSG_ID_FILE, MSG_ID_TEMPLATE, MSG_TAG_FILE, MSG_TAG_TEMPLATE};
use msgidgen_common::{CommonResult, FileSystem};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Summary of one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateStats {
    /// Declaration files read
    pub files_scanned: usize,

    /// Qualifying message declarations found
    pub messages: usize,

    /// Declarations carrying a dispatch tag
    pub tags: usize,

    /// Path of the written enumeration file
    pub enum_path: PathBuf,

    /// Path of the written tag table, when any tags were found
    pub tag_path: Option<PathBuf>,
}

/// Run one generation pass: scan, normalize, hash, render, write.
///
/// The enumeration file is always written, sentinel first, then one entry
/// per declaration in scan order. The tag table is written only when at
/// least one declaration carried a tag.
pub fn generate(config: &GeneratorConfig, fs: &impl FileSystem) -> CommonResult<GenerateStats> {
    config.validate()?;

    let scan = scan_dir(&config.input_dir, MSG_ID_FILE)?;

    let mut enum_content = OutputBuffer::new();
    let mut tag_content = OutputBuffer::new();
    let mut seen: HashMap<i32, String> = HashMap::new();
    let mut tags = 0;

    enum_content.push_sentinel_entry(&sentinel_name(&config.prefix, config.uppercase));

    for declaration in &scan.declarations {
        let normalized = normalize_name(&config.prefix, &declaration.name, config.uppercase);
        let id = message_id(&normalized);

        if let Some(previous) = seen.insert(id, normalized.clone()) {
            if previous != normalized {
                // Both entries are still emitted with the same identifier.
                warn!(id, first = %previous, second = %normalized, "identifier collision");
            }
        }

        enum_content.push_enum_entry(&normalized, id, declaration.tag.as_deref());
        if let Some(tag) = &declaration.tag {
            tag_content.push_tag_entry(id, tag);
            tags += 1;
        }
    }

    let enum_path = config.input_dir.join(MSG_ID_FILE);
    fs.write(
        &enum_path,
        &render(MSG_ID_TEMPLATE, &config.package_name, enum_content.as_str()),
    )?;
    debug!(file = %enum_path.display(), "wrote enumeration");

    let tag_path = if tag_content.is_empty() {
        None
    } else {
        fs.create_dir_all(&config.tag_output_dir)?;
        let path = config.tag_output_dir.join(MSG_TAG_FILE);
        fs.write(
            &path,
            &render(MSG_TAG_TEMPLATE, &config.package_name, tag_content.as_str()),
        )?;
        debug!(file = %path.display(), "wrote tag table");
        Some(path)
    };

    Ok(GenerateStats {
        files_scanned: scan.files_scanned,
        messages: scan.declarations.len(),
        tags,
        enum_path,
        tag_path,
    })
}
