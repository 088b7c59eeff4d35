// src/validation.rs
//! Whole-body structural checks that block constructors cannot make.
//!
//! Table row widths and column span totals are accepted by the content
//! types themselves. Whether a mismatch is ignored, reported or refused is
//! a [`ValidationPolicy`] decision taken here.

use crate::analytics::walk_body;
use crate::constants::COLUMN_GRID_UNITS;
use crate::model::{Article, Columns, Content, Table};
use crate::types::{ValidationError, Warning, WarningLevel};
use log::warn;
use serde::{Deserialize, Serialize};

/// What to do when a structural rule is broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PolicyAction {
    /// Accept silently.
    Tolerate,
    /// Accept and report a warning.
    #[default]
    Warn,
    /// Fail with a `ValidationError`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationPolicy {
    /// Rows whose cell count differs from the header count.
    pub table_shape: PolicyAction,
    /// Column groups whose spans add up to more than the grid.
    pub column_span_total: PolicyAction,
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        Self {
            table_shape: PolicyAction::Reject,
            column_span_total: PolicyAction::Reject,
        }
    }

    pub fn lenient() -> Self {
        Self {
            table_shape: PolicyAction::Tolerate,
            column_span_total: PolicyAction::Tolerate,
        }
    }
}

fn table_findings(table: &Table) -> Vec<ValidationError> {
    let expected = table.headers.len();
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != expected)
        .map(|(row, cells)| ValidationError::TableShape {
            row,
            expected,
            actual: cells.len(),
        })
        .collect()
}

fn column_findings(columns: &Columns) -> Option<ValidationError> {
    let total: u32 = columns.columns.iter().map(|c| c.span.get() as u32).sum();
    let max = COLUMN_GRID_UNITS as u32;
    (total > max).then_some(ValidationError::ColumnSpanOverflow { total, max })
}

/// Check every block, nested ones included, against `policy`.
///
/// Returns the warnings raised under [`PolicyAction::Warn`], or the first
/// finding under [`PolicyAction::Reject`].
pub fn validate_body(
    body: &[Content],
    policy: &ValidationPolicy,
) -> Result<Vec<Warning>, ValidationError> {
    let mut warnings = Vec::new();

    for (position, (block, _)) in walk_body(body).into_iter().enumerate() {
        let (findings, action) = match block {
            Content::Table(table) => (table_findings(table), policy.table_shape),
            Content::Columns(columns) => (
                column_findings(columns).into_iter().collect(),
                policy.column_span_total,
            ),
            Content::RichText(_)
            | Content::Heading(_)
            | Content::ContentList(_)
            | Content::Media(_)
            | Content::CodeBlock(_)
            | Content::Quote(_)
            | Content::Callout(_)
            | Content::Accordion(_)
            | Content::Divider
            | Content::Embed(_)
            | Content::FootnoteRef(_) => continue,
        };

        for finding in findings {
            match action {
                PolicyAction::Tolerate => {}
                PolicyAction::Warn => {
                    let warning = Warning::new(WarningLevel::Warning, finding.to_string())
                        .with_context(format!("{} block #{}", block.kind(), position));
                    warn!("{}", warning);
                    warnings.push(warning);
                }
                PolicyAction::Reject => return Err(finding),
            }
        }
    }

    Ok(warnings)
}

/// [`validate_body`] over an article's sections, with the article id in
/// each warning's context.
pub fn validate_article(
    article: &Article,
    policy: &ValidationPolicy,
) -> Result<Vec<Warning>, ValidationError> {
    let warnings = validate_body(article.sections(), policy)?;
    Ok(warnings
        .into_iter()
        .map(|w| {
            let context = match &w.context {
                Some(ctx) => format!("{}: {}", article.id(), ctx),
                None => article.id().to_string(),
            };
            w.with_context(context)
        })
        .collect())
}
