/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use urlencoding::encode;

/// Ordered list of query-string pairs
///
/// Keys and values are stored raw and URL-encoded when rendered. Repeated
/// keys are allowed and keep their insertion order. Encoding follows
/// RFC 3986, so a space renders as `%20` rather than `+`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends a `filter` pair holding the JSON encoding of `filter`, unless it is empty
    pub fn push_filter(&mut self, filter: &Map<String, Value>) -> Result<&mut Self, AppError> {
        if !filter.is_empty() {
            let encoded = serde_json::to_string(filter)?;
            self.push("filter", encoded);
        }
        Ok(self)
    }

    /// Returns the raw pairs
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Checks whether no pair was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `k=v&k=v` with every key and value URL-encoded
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Pagination of the report endpoints
///
/// The API accepts either an offset window or a page window, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pagination {
    /// Rows `offset..offset + limit`
    Offset {
        /// Index of the first row
        offset: u64,
        /// Maximum number of rows
        limit: u64,
    },
    /// Page `page` of `size` rows
    Page {
        /// Zero-based page index
        page: u64,
        /// Rows per page
        size: u64,
    },
}

impl Pagination {
    /// Offset-based window
    #[must_use]
    pub fn offset(offset: u64, limit: u64) -> Self {
        Self::Offset { offset, limit }
    }

    /// Page-based window
    #[must_use]
    pub fn page(page: u64, size: u64) -> Self {
        Self::Page { page, size }
    }

    /// Reads a pagination object such as `{"offset": 0, "limit": 100}`
    ///
    /// `offset`/`limit` win when both hold unsigned integers. Otherwise
    /// `page`/`size` are tried; null or non-integer values count as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let pair = |a: &str, b: &str| Some((obj.get(a)?.as_u64()?, obj.get(b)?.as_u64()?));

        pair("offset", "limit")
            .map(|(offset, limit)| Self::Offset { offset, limit })
            .or_else(|| pair("page", "size").map(|(page, size)| Self::Page { page, size }))
    }

    fn append_to(&self, params: &mut QueryParams) {
        match self {
            Self::Offset { offset, limit } => {
                params.push("offset", offset).push("limit", limit);
            }
            Self::Page { page, size } => {
                params.push("page", page).push("size", size);
            }
        }
    }
}

/// Query of the campaign and keyword performance report endpoints
///
/// # Example
/// ```
/// use sedotmp_client::model::requests::{Pagination, ReportQuery};
///
/// let query = ReportQuery::new()
///     .with_dimensions(["DATE", "COUNTRY"])
///     .with_sort("CLICKS,asc")
///     .with_pagination(Pagination::page(0, 10));
/// let params = query.to_query_params().unwrap();
/// assert_eq!(
///     params.to_query_string(),
///     "dimensions=DATE&dimensions=COUNTRY&sort=CLICKS%2Casc&page=0&size=10"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Grouping dimensions, e.g. `DATE`, `COUNTRY`
    #[serde(default)]
    pub dimensions: Vec<String>,
    /// Filter object, sent JSON-encoded
    #[serde(default)]
    pub filter: Map<String, Value>,
    /// Sort expression, e.g. `CLICKS,asc`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Row window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl ReportQuery {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the dimensions
    #[must_use]
    pub fn with_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one dimension
    #[must_use]
    pub fn add_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimensions.push(dimension.into());
        self
    }

    /// Replaces the filter object
    #[must_use]
    pub fn with_filter(mut self, filter: Map<String, Value>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets one filter entry
    #[must_use]
    pub fn filter_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    /// Restricts the report to `start..=end` using `startDate`/`endDate` filter entries
    #[must_use]
    pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.filter_entry("startDate", date_filter_value(start))
            .filter_entry("endDate", date_filter_value(end))
    }

    /// Sets the sort expression
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the row window
    #[must_use]
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Builds the query parameters in the order the API documents them:
    /// dimensions, filter, sort, pagination
    pub fn to_query_params(&self) -> Result<QueryParams, AppError> {
        let mut params = QueryParams::new();
        for dimension in &self.dimensions {
            params.push("dimensions", dimension);
        }
        params.push_filter(&self.filter)?;
        if let Some(sort) = &self.sort {
            params.push("sort", sort);
        }
        if let Some(pagination) = &self.pagination {
            pagination.append_to(&mut params);
        }
        Ok(params)
    }
}

/// Query of the tracking-data template listings (postback and traffic source)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateQuery {
    /// Filter object, sent JSON-encoded
    #[serde(default)]
    pub filter: Map<String, Value>,
    /// Zero-based page index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Sort expression, e.g. `name,asc`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl TemplateQuery {
    /// Creates an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the filter object
    #[must_use]
    pub fn with_filter(mut self, filter: Map<String, Value>) -> Self {
        self.filter = filter;
        self
    }

    /// Sets one filter entry
    #[must_use]
    pub fn filter_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    /// Sets the page index
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the sort expression
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Builds the query parameters: filter, page, size, sort
    pub fn to_query_params(&self) -> Result<QueryParams, AppError> {
        let mut params = QueryParams::new();
        params.push_filter(&self.filter)?;
        if let Some(page) = self.page {
            params.push("page", page);
        }
        if let Some(size) = self.size {
            params.push("size", size);
        }
        if let Some(sort) = &self.sort {
            params.push("sort", sort);
        }
        Ok(params)
    }
}

/// Date object in the shape the reporting filters expect
#[must_use]
pub fn date_filter_value(date: NaiveDate) -> Value {
    json!({
        "year": date.year(),
        "month": date.month(),
        "day": date.day(),
    })
}
