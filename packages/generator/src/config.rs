use msgidgen_common::{CommonError, CommonResult};
use std::path::PathBuf;

/// Options for a single generation pass
///
/// Built once at startup and passed into [`crate::generate`]; nothing here
/// changes while a pass is running.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory scanned for declaration files
    pub input_dir: PathBuf,

    /// Directory receiving the generated tag table
    pub tag_output_dir: PathBuf,

    /// Package name substituted into both generated files
    pub package_name: String,

    /// Upper-case extracted name words before hashing
    pub uppercase: bool,

    /// Prefix prepended to every declared name before normalization
    pub prefix: String,
}

impl GeneratorConfig {
    /// Reject configurations that cannot produce valid output.
    ///
    /// Runs before any scanning; a missing package name is fatal.
    pub fn validate(&self) -> CommonResult<()> {
        if self.package_name.is_empty() {
            return Err(CommonError::Config(
                "package name is required, --pack=".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            tag_output_dir: PathBuf::from("."),
            package_name: String::new(),
            uppercase: false,
            prefix: String::new(),
        }
    }
}
