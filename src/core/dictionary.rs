//! Side-car dictionaries mapping generated keys to the original text.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::error::RomakeyError;
use crate::utils::write_atomic;

/// Serialization format of the side-car file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideCarFormat {
    Json,
    Yaml,
}

impl SideCarFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SideCarFormat::Json => "json",
            SideCarFormat::Yaml => "yml",
        }
    }

    /// Serializes `value` with a trailing newline.
    pub fn render(&self, value: &Value) -> Result<String> {
        let mut content = match self {
            SideCarFormat::Json => {
                serde_json::to_string_pretty(value).context("Failed to serialize JSON")?
            }
            SideCarFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML")?,
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(content)
    }

    fn parse(&self, content: &str, path: &Path) -> Result<Value> {
        match self {
            SideCarFormat::Json => serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display())),
            SideCarFormat::Yaml => serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse YAML: {}", path.display())),
        }
    }
}

/// Keys generated during one run, grouped under the run's namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    namespace: String,
    nested: bool,
    entries: Map<String, Value>,
}

impl TranslationBundle {
    /// A bundle stored under `namespace` as a single key, or, when `nested`,
    /// under one level per dot-separated segment.
    pub fn new(namespace: impl Into<String>, nested: bool) -> Self {
        Self {
            namespace: namespace.into(),
            nested,
            entries: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records `key -> text` and returns the text it replaced, if any.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: &str, text: &str) -> Option<String> {
        self.entries
            .insert(key.to_string(), Value::String(text.to_string()))
            .and_then(|previous| previous.as_str().map(str::to_string))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Path of the namespace inside the dictionary.
    fn namespace_path(&self) -> Vec<&str> {
        if self.nested {
            self.namespace.split('.').filter(|s| !s.is_empty()).collect()
        } else {
            vec![self.namespace.as_str()]
        }
    }

    /// Merges the entries into `root` under the namespace.
    ///
    /// Existing keys outside this bundle are preserved; keys in the bundle
    /// overwrite their previous values in place.
    pub fn merge_into(&self, root: &mut Map<String, Value>) {
        let table = namespace_table(root, &self.namespace_path());
        for (key, text) in &self.entries {
            table.insert(key.clone(), text.clone());
        }
    }
}

/// Walks `path` from `root`, creating objects as needed, and returns the
/// innermost one. Non-object values on the way are replaced.
fn namespace_table<'m>(root: &'m mut Map<String, Value>, path: &[&str]) -> &'m mut Map<String, Value> {
    let Some((first, rest)) = path.split_first() else {
        return root;
    };

    let next = root
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !next.is_object() {
        *next = Value::Object(Map::new());
    }
    match next {
        Value::Object(inner) => namespace_table(inner, rest),
        _ => unreachable!("replaced with an object above"),
    }
}

/// Where and how the side-car file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideCar {
    pub path: PathBuf,
    pub format: SideCarFormat,
}

impl SideCar {
    /// Locates the side-car for `source`.
    ///
    /// The file name is the source stem, then `suffix`, then `.<lang>` when a
    /// language is given, then the format extension. With `dest` the file
    /// goes into `cwd/dest`, otherwise next to the source.
    pub fn locate(
        source: &Path,
        dest: Option<&Path>,
        cwd: &Path,
        suffix: &str,
        lang: Option<&str>,
        format: SideCarFormat,
    ) -> Self {
        let stem = source.file_stem().unwrap_or_default().to_string_lossy();
        let mut file_name = format!("{stem}{suffix}");
        if let Some(lang) = lang.filter(|l| !l.is_empty()) {
            file_name.push('.');
            file_name.push_str(lang);
        }
        file_name.push('.');
        file_name.push_str(format.extension());

        let dir = match dest {
            Some(dest) => cwd.join(dest),
            None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
        };

        Self {
            path: dir.join(file_name),
            format,
        }
    }

    /// Merges `bundle` into the file's existing content and renders the
    /// result without writing anything.
    pub fn render(&self, bundle: &TranslationBundle) -> Result<String> {
        let mut root = self.load()?;
        bundle.merge_into(&mut root);
        self.format.render(&Value::Object(root))
    }

    /// Replaces the file with `content`, creating missing directories.
    pub fn persist(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        write_atomic(&self.path, content)
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match self.format.parse(&content, &self.path)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(RomakeyError::InvalidSideCar {
                path: self.path.clone(),
            }
            .into()),
        }
    }
}
