//! Lookup expressions written in place of extracted text.
//!
//! Each destination file type has its own syntax. The syntax is chosen once
//! per run from the source file extension.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use super::dictionary::SideCarFormat;
use crate::error::RomakeyError;

/// Renders the expression that looks up a qualified key at runtime.
#[enum_dispatch]
pub trait LookupExpression {
    /// Expression text for `qualified_key` (`namespace.key`).
    fn expression(&self, qualified_key: &str) -> String;

    /// Whether a quoted string literal holding exactly the extracted text is
    /// replaced together with its quotes.
    fn replaces_string_literals(&self) -> bool {
        false
    }
}

/// Template filter for HTML views: `{{ 'ns.key' | translate }}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFilter;

/// Runtime translation call for scripts: `$translate.instant('ns.key')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionCall;

/// Translation helper for Ruby views and code: `t('ns.key')`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperCall;

impl LookupExpression for TemplateFilter {
    fn expression(&self, qualified_key: &str) -> String {
        format!("{{{{ '{qualified_key}' | translate }}}}")
    }
}

impl LookupExpression for FunctionCall {
    fn expression(&self, qualified_key: &str) -> String {
        format!("$translate.instant('{qualified_key}')")
    }

    fn replaces_string_literals(&self) -> bool {
        true
    }
}

impl LookupExpression for HelperCall {
    fn expression(&self, qualified_key: &str) -> String {
        format!("t('{qualified_key}')")
    }

    fn replaces_string_literals(&self) -> bool {
        true
    }
}

#[enum_dispatch(LookupExpression)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    TemplateFilter(TemplateFilter),
    FunctionCall(FunctionCall),
    HelperCall(HelperCall),
}

impl Syntax {
    /// Selects the syntax for a source file by its extension.
    pub fn for_path(path: &Path) -> Result<Self, RomakeyError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "html" => Ok(TemplateFilter.into()),
            "js" => Ok(FunctionCall.into()),
            "rb" => Ok(HelperCall.into()),
            _ => Err(RomakeyError::UnsupportedExtension(ext)),
        }
    }

    /// Side-car format paired with this syntax.
    pub fn side_car_format(&self) -> SideCarFormat {
        match self {
            Syntax::TemplateFilter(_) | Syntax::FunctionCall(_) => SideCarFormat::Json,
            Syntax::HelperCall(_) => SideCarFormat::Yaml,
        }
    }
}
