//! Serializable description of one archive operation.

use std::fs;
use std::path::{Path, PathBuf};

use catalogue::{ROOT_PATH, append_path};
use logging::VerbosityConfig;
use masks::{ListMask, Mask, MaskBuilder, Selection};
use policy::{Action, parse_policy};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::operation::Operation;

/// Selection masks, overwriting policy and verbosity of one operation.
///
/// Every field has a default, so a configuration document only names what it
/// changes. Patterns stay as text until [`build`](Self::build) compiles them.
///
/// # Examples
///
/// ```
/// use dar_engine::OperationConfig;
///
/// let config = OperationConfig::from_json_str(r#"{
///     "exclude_names": ["*.o"],
///     "exclude_subtrees": ["/tmp"],
///     "overwrite_policy": "{R}[Pp]Oo",
///     "hourshift": 1
/// }"#)?;
/// let operation = config.build()?;
/// assert!(!operation.selection().includes_entry("/src/main.o", false));
/// assert!(!operation.selection().includes_entry("/tmp", true));
/// assert!(operation.selection().includes_entry("/src/main.c", false));
/// # Ok::<(), dar_engine::EngineError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperationConfig {
    /// Globs a file name must match; empty keeps every name.
    pub include_names: Vec<String>,
    /// Globs that reject a file name.
    pub exclude_names: Vec<String>,
    /// Regular expressions a file name must match; empty keeps every name.
    pub include_regex: Vec<String>,
    /// Regular expressions that reject a file name.
    pub exclude_regex: Vec<String>,
    /// Subtrees to operate on; empty means the whole tree. Ancestors of a
    /// listed subtree stay selected so that it can be reached.
    pub include_subtrees: Vec<String>,
    /// Directories pruned with everything beneath them.
    pub exclude_subtrees: Vec<String>,
    /// File listing the paths to operate on, one per line.
    pub include_list_file: Option<PathBuf>,
    /// File listing paths to leave out, one per line.
    pub exclude_list_file: Option<PathBuf>,
    /// Absolute prefix completing relative lines of the list files.
    pub list_prefix: String,
    /// Case sensitivity of every pattern and path.
    pub case_sensitive: bool,
    /// Overwriting policy in its textual form; `None` leaves every axis to
    /// the defaults.
    pub overwrite_policy: Option<String>,
    /// Whole hours by which two dates may differ and still compare equal.
    pub hourshift: u64,
    /// Verbosity level, `0..=3`.
    pub verbosity: u8,
    /// Per-category adjustments such as `"policy3"` or `"mask"`.
    pub debug_flags: Vec<String>,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            include_names: Vec::new(),
            exclude_names: Vec::new(),
            include_regex: Vec::new(),
            exclude_regex: Vec::new(),
            include_subtrees: Vec::new(),
            exclude_subtrees: Vec::new(),
            include_list_file: None,
            exclude_list_file: None,
            list_prefix: ROOT_PATH.to_owned(),
            case_sensitive: true,
            overwrite_policy: None,
            hourshift: 0,
            verbosity: 0,
            debug_flags: Vec::new(),
        }
    }
}

impl OperationConfig {
    /// Parses a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compiles every pattern and the policy into an [`Operation`].
    ///
    /// All pattern and policy errors surface here.
    pub fn build(&self) -> Result<Operation, EngineError> {
        let selection = Selection::new(self.name_mask()?, self.subtree_mask()?);
        let policy = match &self.overwrite_policy {
            Some(text) => parse_policy(text, self.hourshift)?,
            None => Action::default(),
        };
        Ok(Operation::new(selection, policy).with_verbosity(self.verbosity_config()?))
    }

    /// Verbosity level with the debug flags applied.
    pub fn verbosity_config(&self) -> Result<VerbosityConfig, EngineError> {
        let mut config = VerbosityConfig::from_verbose_level(self.verbosity);
        for flag in &self.debug_flags {
            config.apply_flag(flag).map_err(EngineError::DebugFlag)?;
        }
        Ok(config)
    }

    fn name_mask(&self) -> Result<Mask, EngineError> {
        let cs = self.case_sensitive;
        let mut all = MaskBuilder::all();

        let mut included = MaskBuilder::any();
        for pattern in &self.include_names {
            included.add_mask(Mask::glob(pattern.as_str(), cs)?);
        }
        for pattern in &self.include_regex {
            included.add_mask(Mask::regex(pattern, cs)?);
        }
        if !included.is_empty() {
            all.add_mask(included.build());
        }

        let mut excluded = MaskBuilder::any();
        for pattern in &self.exclude_names {
            excluded.add_mask(Mask::glob(pattern.as_str(), cs)?);
        }
        for pattern in &self.exclude_regex {
            excluded.add_mask(Mask::regex(pattern, cs)?);
        }
        if !excluded.is_empty() {
            all.add_mask(!excluded.build());
        }

        Ok(if all.is_empty() { Mask::ALWAYS } else { all.build() })
    }

    fn subtree_mask(&self) -> Result<Mask, EngineError> {
        let cs = self.case_sensitive;
        let mut all = MaskBuilder::all();

        let mut included = MaskBuilder::any();
        for path in &self.include_subtrees {
            included.add_mask(Mask::subtree_of(absolute(path), cs));
        }
        if let Some(file) = &self.include_list_file {
            included.add_mask(Mask::List(ListMask::from_file(
                file,
                &self.list_prefix,
                true,
                cs,
            )?));
        }
        if !included.is_empty() {
            all.add_mask(included.build());
        }

        let mut excluded = MaskBuilder::any();
        for path in &self.exclude_subtrees {
            excluded.add_mask(Mask::under_dir(absolute(path), cs));
        }
        if let Some(file) = &self.exclude_list_file {
            excluded.add_mask(Mask::List(ListMask::from_file(
                file,
                &self.list_prefix,
                false,
                cs,
            )?));
        }
        if !excluded.is_empty() {
            all.add_mask(!excluded.build());
        }

        Ok(if all.is_empty() { Mask::ALWAYS } else { all.build() })
    }
}

/// Anchors a relative subtree at the catalogue root.
fn absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        append_path(ROOT_PATH, path)
    }
}
