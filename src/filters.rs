// ABOUTME: Table selection filters for narrowing which tables get converted
// ABOUTME: Supports an include list or an exclude list, never both

use crate::error::{ConvertError, Result};
use crate::utils::sanitize_identifier;

/// Selects tables by exact, case-sensitive name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    include_tables: Option<Vec<String>>,
    exclude_tables: Option<Vec<String>>,
}

impl TableFilter {
    /// Build a filter from optional include/exclude lists
    ///
    /// Empty lists count as absent. Supplying both lists is rejected since
    /// the result would depend on which one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqlite_sql_converter::filters::TableFilter;
    /// let filter = TableFilter::new(None, Some(vec!["audit_log".to_string()])).unwrap();
    /// assert!(filter.should_convert("users"));
    /// assert!(!filter.should_convert("audit_log"));
    ///
    /// assert!(TableFilter::new(Some(vec!["a".into()]), Some(vec!["b".into()])).is_err());
    /// ```
    pub fn new(
        include_tables: Option<Vec<String>>,
        exclude_tables: Option<Vec<String>>,
    ) -> Result<Self> {
        let include_tables = include_tables.filter(|t| !t.is_empty());
        let exclude_tables = exclude_tables.filter(|t| !t.is_empty());

        if include_tables.is_some() && exclude_tables.is_some() {
            return Err(ConvertError::Config(
                "Cannot use both --include-tables and --exclude-tables".to_string(),
            ));
        }

        Ok(Self {
            include_tables,
            exclude_tables,
        })
    }

    /// Filter that keeps every table
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.include_tables.is_none() && self.exclude_tables.is_none()
    }

    pub fn should_convert(&self, table: &str) -> bool {
        if let Some(include) = &self.include_tables {
            return include.iter().any(|t| t == table);
        }
        if let Some(exclude) = &self.exclude_tables {
            return !exclude.iter().any(|t| t == table);
        }
        true
    }

    /// Keep the selected tables, preserving the source order
    ///
    /// Included names that the source does not have are logged and skipped.
    pub fn apply(&self, tables: Vec<String>) -> Vec<String> {
        if let Some(include) = &self.include_tables {
            for wanted in include.iter().filter(|w| !tables.contains(*w)) {
                tracing::warn!(
                    "⚠ Table '{}' was requested but does not exist in the source",
                    sanitize_identifier(wanted)
                );
            }
        }

        tables
            .into_iter()
            .filter(|t| self.should_convert(t))
            .collect()
    }
}
