use std::collections::HashMap;
use std::str::FromStr;

/// Filter operator for query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals (default)
    Gte, // greater than or equal
    Lte, // less than or equal
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" | "goe" => Ok(FilterOperator::Gte),
            "lte" | "loe" => Ok(FilterOperator::Lte),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

/// Parsed filter parameters
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u64,
    pub limit: u64,
}

impl PaginationParams {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            offset: offset.unwrap_or(0),
            limit: limit.unwrap_or(20).clamp(1, 100), // Default 20, max 100
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Filter and pagination parameters of a list endpoint
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - offset=0, limit=20
    ///
    /// Unknown operators and unparsable pagination values are ignored.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut offset: Option<u64> = None;
        let mut limit: Option<u64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(end_bracket) = filter_key.find(']') {
                    let field = filter_key[..end_bracket].to_string();
                    let remaining = &filter_key[end_bracket + 1..];

                    if remaining.is_empty() {
                        filter.conditions.push(FilterCondition {
                            field,
                            operator: FilterOperator::Eq,
                            value: value.clone(),
                        });
                    } else if let Some(operator_str) = remaining
                        .strip_prefix('[')
                        .and_then(|rest| rest.strip_suffix(']'))
                        && let Ok(operator) = operator_str.parse::<FilterOperator>()
                    {
                        filter.conditions.push(FilterCondition {
                            field,
                            operator,
                            value: value.clone(),
                        });
                    }
                }
            } else if key == "offset" {
                offset = value.parse::<u64>().ok();
            } else if key == "limit" {
                limit = value.parse::<u64>().ok();
            }
        }

        // HashMap iteration order is unspecified; keep conditions stable.
        filter
            .conditions
            .sort_by(|a, b| a.field.cmp(&b.field));

        Self {
            filter,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}
