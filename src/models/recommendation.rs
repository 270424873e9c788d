use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 3;

/// One ranked product recommendation
///
/// Only constructed by [`RankedResult::parse`]; there are no setters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedResult {
    rank: u8,
    product_name: String,
    description: String,
    source_link: String,
}

impl RankedResult {
    /// Validates one raw backend record
    ///
    /// The rank may arrive as an integer, an integral float or a numeric
    /// string and must land in `MIN_RANK..=MAX_RANK`. The product name must be
    /// a non-blank string. `source_link` must be present but is not checked
    /// further; `description` defaults to empty.
    pub fn parse(raw: &Value) -> AppResult<Self> {
        let record = raw.as_object().ok_or_else(|| AppError::validation("record"))?;

        let rank = record
            .get("rank")
            .and_then(coerce_rank)
            .ok_or_else(|| AppError::validation("rank"))?;

        let product_name = match record.get("product_name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            _ => return Err(AppError::validation("product_name")),
        };

        let description = match record.get("description") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(_) => return Err(AppError::validation("description")),
        };

        let source_link = match record.get("source_link") {
            Some(Value::String(link)) => link.clone(),
            _ => return Err(AppError::validation("source_link")),
        };

        Ok(Self {
            rank,
            product_name,
            description,
            source_link,
        })
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source_link(&self) -> &str {
        &self.source_link
    }
}

fn coerce_rank(value: &Value) -> Option<u8> {
    let rank = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 {
                    return None;
                }
                f as i64
            }
        },
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    u8::try_from(rank)
        .ok()
        .filter(|r| (MIN_RANK..=MAX_RANK).contains(r))
}

/// Parses a backend `data` array into a result set ordered by rank
///
/// Any invalid record fails the whole set. When two records share a rank the
/// later one in input order is kept.
pub fn parse_collection(records: &[Value]) -> AppResult<Vec<RankedResult>> {
    let mut by_rank = BTreeMap::new();
    for raw in records {
        let result = RankedResult::parse(raw)?;
        if let Some(replaced) = by_rank.insert(result.rank, result) {
            tracing::debug!(
                rank = replaced.rank,
                dropped = %replaced.product_name,
                "Duplicate rank in payload, keeping later entry"
            );
        }
    }
    Ok(by_rank.into_values().collect())
}
