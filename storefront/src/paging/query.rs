//! Filter and sort parameters that define one product result stream.

use crate::core::error::{AppError, Result};
use shared::ProductSortBy;

/// Immutable filter/sort combination passed to the loader.
///
/// Two values that compare equal describe the same result stream. Any change
/// invalidates previously loaded pages; consumers restart from page 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_commission: Option<f64>,
    pub search: Option<String>,
    pub sort_by: ProductSortBy,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: Option<impl Into<String>>) -> Self {
        Self { category: non_blank(category.map(Into::into)), ..self }
    }

    pub fn with_price_range(self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        Self { min_price, max_price, ..self }
    }

    pub fn with_min_commission(self, min_commission: Option<f64>) -> Self {
        Self { min_commission, ..self }
    }

    /// Blank or whitespace-only searches clear the search filter.
    pub fn with_search(self, search: Option<impl Into<String>>) -> Self {
        Self { search: non_blank(search.map(Into::into)), ..self }
    }

    pub fn with_sort(self, sort_by: ProductSortBy) -> Self {
        Self { sort_by, ..self }
    }

    pub fn has_filters(&self) -> bool {
        self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_commission.is_some()
            || self.search.is_some()
    }

    /// Check local invariants before a query is issued.
    ///
    /// Rejects non-finite or negative amounts and `min_price > max_price`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_price", self.min_price),
            ("max_price", self.max_price),
            ("min_commission", self.min_commission),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AppError::Validation(format!("{} must be a finite number", name)));
                }
                if v < 0.0 {
                    return Err(AppError::Validation(format!("{} cannot be negative", name)));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(AppError::Validation(format!(
                    "min_price ({}) cannot exceed max_price ({})",
                    min, max
                )));
            }
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
