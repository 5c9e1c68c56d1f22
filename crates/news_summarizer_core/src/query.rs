//! crates/news_summarizer_core/src/query.rs
//!
//! The validated search-query model sent to the news source, and its
//! conversion to and from the flat string map used as an HTTP query string.

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const Q: &str = "q";
const SEARCH_IN: &str = "searchIn";
const SOURCES: &str = "sources";
const DOMAINS: &str = "domains";
const EXCLUDE_DOMAINS: &str = "excludeDomains";
const FROM: &str = "from";
const TO: &str = "to";
const LANGUAGE: &str = "language";
const SORT_BY: &str = "sortBy";
const PAGE_SIZE: &str = "pageSize";
const PAGE: &str = "page";

const MAX_QUERY_CHARS: usize = 500;
const MAX_SEARCH_IN: usize = 3;
const MAX_SOURCES: usize = 20;
const MAX_PAGE_SIZE: u32 = 100;
const DATE_FORMAT: &str = "%Y-%m-%d";

fn language_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]{2}(,[a-z]{2})*$").expect("language pattern is valid"))
}

//=========================================================================================
// Errors
//=========================================================================================

/// Errors raised while building or decoding query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("invalid value for `{field}`: '{value}'")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("invalid date for `{field}`: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid number for `{field}`: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

impl QueryError {
    fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        QueryError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

//=========================================================================================
// Wire enums
//=========================================================================================

/// Article fields the full-text search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIn {
    Title,
    Description,
    Content,
}

impl SearchIn {
    const TOKENS: [(&'static str, SearchIn); 3] = [
        ("title", SearchIn::Title),
        ("description", SearchIn::Description),
        ("content", SearchIn::Content),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIn::Title => "title",
            SearchIn::Description => "description",
            SearchIn::Content => "content",
        }
    }
}

impl FromStr for SearchIn {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(SEARCH_IN, &Self::TOKENS, s)
    }
}

impl fmt::Display for SearchIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering supported by the news source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    #[serde(rename = "relevancy")]
    Relevancy,
    #[serde(rename = "popularity")]
    Popularity,
    #[serde(rename = "publishedAt")]
    PublishedAt,
}

impl SortBy {
    const TOKENS: [(&'static str, SortBy); 3] = [
        ("relevancy", SortBy::Relevancy),
        ("popularity", SortBy::Popularity),
        ("publishedAt", SortBy::PublishedAt),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(SORT_BY, &Self::TOKENS, s)
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn lookup<T: Copy>(field: &'static str, table: &[(&str, T)], raw: &str) -> Result<T, QueryError> {
    let token = raw.trim();
    table
        .iter()
        .find(|(wire, _)| wire.eq_ignore_ascii_case(token))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| QueryError::InvalidEnumValue {
            field,
            value: token.to_string(),
        })
}

//=========================================================================================
// QueryParams
//=========================================================================================

/// Validated search criteria for the news source.
///
/// Only obtainable through [`QueryParamsBuilder::build`] or [`QueryParams::from_map`],
/// so every instance satisfies the field constraints. Unset list fields are
/// empty vectors; an empty list and an absent map key mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    q: String,
    search_in: Vec<SearchIn>,
    sources: Vec<String>,
    domains: Vec<String>,
    exclude_domains: Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    language: Option<String>,
    sort_by: Option<SortBy>,
    page_size: Option<u32>,
    page: Option<u32>,
}

impl QueryParams {
    /// Starts a builder; `q` is the only mandatory field.
    pub fn builder(q: impl Into<String>) -> QueryParamsBuilder {
        QueryParamsBuilder::new(q)
    }

    /// Returns a builder seeded with this instance's values.
    pub fn to_builder(&self) -> QueryParamsBuilder {
        QueryParamsBuilder {
            q: self.q.clone(),
            search_in: self.search_in.clone(),
            sources: self.sources.clone(),
            domains: self.domains.clone(),
            exclude_domains: self.exclude_domains.clone(),
            from: self.from,
            to: self.to,
            language: self.language.clone(),
            sort_by: self.sort_by,
            page_size: self.page_size,
            page: self.page,
        }
    }

    pub fn q(&self) -> &str {
        &self.q
    }

    pub fn search_in(&self) -> &[SearchIn] {
        &self.search_in
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn exclude_domains(&self) -> &[String] {
        &self.exclude_domains
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn sort_by(&self) -> Option<SortBy> {
        self.sort_by
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// Flattens the parameters into query-string pairs, omitting unset and empty fields.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(Q.to_string(), self.q.clone());

        let mut put_list = |key: &str, values: Vec<&str>| {
            if !values.is_empty() {
                map.insert(key.to_string(), values.join(","));
            }
        };
        put_list(SEARCH_IN, self.search_in.iter().map(SearchIn::as_str).collect());
        put_list(SOURCES, self.sources.iter().map(String::as_str).collect());
        put_list(DOMAINS, self.domains.iter().map(String::as_str).collect());
        put_list(EXCLUDE_DOMAINS, self.exclude_domains.iter().map(String::as_str).collect());

        if let Some(from) = self.from {
            map.insert(FROM.to_string(), from.format(DATE_FORMAT).to_string());
        }
        if let Some(to) = self.to {
            map.insert(TO.to_string(), to.format(DATE_FORMAT).to_string());
        }
        if let Some(language) = &self.language {
            map.insert(LANGUAGE.to_string(), language.trim().to_string());
        }
        if let Some(sort_by) = self.sort_by {
            map.insert(SORT_BY.to_string(), sort_by.as_str().to_string());
        }
        if let Some(page_size) = self.page_size {
            map.insert(PAGE_SIZE.to_string(), page_size.to_string());
        }
        if let Some(page) = self.page {
            map.insert(PAGE.to_string(), page.to_string());
        }
        map
    }

    /// Rebuilds validated parameters from query-string pairs.
    ///
    /// Blank values count as absent. List values are split on commas and
    /// trimmed; enum tokens are matched case-insensitively.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, QueryError> {
        Self::decode(map)?.build()
    }

    fn decode(map: &BTreeMap<String, String>) -> Result<QueryParamsBuilder, QueryError> {
        let value = |key: &str| non_blank(map, key);

        let mut builder = QueryParamsBuilder::new(map.get(Q).cloned().unwrap_or_default());

        if let Some(raw) = value(SEARCH_IN) {
            builder = builder.search_in(
                split_csv(raw)
                    .map(str::parse::<SearchIn>)
                    .collect::<Result<Vec<_>, _>>()?,
            );
        }
        if let Some(raw) = value(SOURCES) {
            builder = builder.sources(split_csv(raw));
        }
        if let Some(raw) = value(DOMAINS) {
            builder = builder.domains(split_csv(raw));
        }
        if let Some(raw) = value(EXCLUDE_DOMAINS) {
            builder = builder.exclude_domains(split_csv(raw));
        }
        if let Some(raw) = value(FROM) {
            builder = builder.from(parse_date(FROM, raw)?);
        }
        if let Some(raw) = value(TO) {
            builder = builder.to(parse_date(TO, raw)?);
        }
        if let Some(raw) = value(LANGUAGE) {
            builder = builder.language(raw);
        }
        if let Some(raw) = value(SORT_BY) {
            builder = builder.sort_by(raw.parse()?);
        }
        if let Some(raw) = value(PAGE_SIZE) {
            builder = builder.page_size(parse_number(PAGE_SIZE, raw)?);
        }
        if let Some(raw) = value(PAGE) {
            builder = builder.page(parse_number(PAGE, raw)?);
        }
        Ok(builder)
    }
}

fn non_blank<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| QueryError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, QueryError> {
    raw.parse::<u32>().map_err(|_| QueryError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

//=========================================================================================
// Builder
//=========================================================================================

/// Step-by-step construction of [`QueryParams`]. Nothing is checked until `build`.
#[derive(Debug, Clone)]
pub struct QueryParamsBuilder {
    q: String,
    search_in: Vec<SearchIn>,
    sources: Vec<String>,
    domains: Vec<String>,
    exclude_domains: Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    language: Option<String>,
    sort_by: Option<SortBy>,
    page_size: Option<u32>,
    page: Option<u32>,
}

impl QueryParamsBuilder {
    fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            search_in: Vec::new(),
            sources: Vec::new(),
            domains: Vec::new(),
            exclude_domains: Vec::new(),
            from: None,
            to: None,
            language: None,
            sort_by: None,
            page_size: None,
            page: None,
        }
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self
    }

    pub fn search_in(mut self, fields: impl IntoIterator<Item = SearchIn>) -> Self {
        self.search_in = fields.into_iter().collect();
        self
    }

    pub fn sources<S: Into<String>>(mut self, sources: impl IntoIterator<Item = S>) -> Self {
        self.sources = collect_trimmed(sources);
        self
    }

    pub fn domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = collect_trimmed(domains);
        self
    }

    pub fn exclude_domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.exclude_domains = collect_trimmed(domains);
        self
    }

    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into().trim().to_string());
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Validates against today's UTC date.
    pub fn build(self) -> Result<QueryParams, QueryError> {
        self.build_at(Utc::now().date_naive())
    }

    /// Validates with `today` as the latest acceptable `from`/`to` date.
    pub fn build_at(self, today: NaiveDate) -> Result<QueryParams, QueryError> {
        if self.q.trim().is_empty() {
            return Err(QueryError::validation(Q, "the search query is mandatory"));
        }
        if self.q.chars().count() > MAX_QUERY_CHARS {
            return Err(QueryError::validation(
                Q,
                format!("must be at most {} characters", MAX_QUERY_CHARS),
            ));
        }

        if self.search_in.len() > MAX_SEARCH_IN {
            return Err(QueryError::validation(
                SEARCH_IN,
                format!("at most {} fields allowed", MAX_SEARCH_IN),
            ));
        }
        for (i, field) in self.search_in.iter().enumerate() {
            if self.search_in[..i].contains(field) {
                return Err(QueryError::validation(
                    SEARCH_IN,
                    format!("'{}' listed more than once", field),
                ));
            }
        }

        if self.sources.len() > MAX_SOURCES {
            return Err(QueryError::validation(
                SOURCES,
                format!("at most {} sources allowed", MAX_SOURCES),
            ));
        }
        check_elements(SOURCES, &self.sources)?;
        check_elements(DOMAINS, &self.domains)?;
        check_elements(EXCLUDE_DOMAINS, &self.exclude_domains)?;

        for (field, date) in [(FROM, self.from), (TO, self.to)] {
            if let Some(date) = date {
                if date > today {
                    return Err(QueryError::validation(
                        field,
                        format!("{} is in the future", date.format(DATE_FORMAT)),
                    ));
                }
            }
        }

        if let Some(language) = &self.language {
            if !language_pattern().is_match(language) {
                return Err(QueryError::validation(
                    LANGUAGE,
                    "must be 2-letter ISO codes separated by commas",
                ));
            }
        }

        if let Some(page_size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(QueryError::validation(
                    PAGE_SIZE,
                    format!("must be between 1 and {}", MAX_PAGE_SIZE),
                ));
            }
        }
        if self.page == Some(0) {
            return Err(QueryError::validation(PAGE, "must be at least 1"));
        }

        Ok(QueryParams {
            q: self.q,
            search_in: self.search_in,
            sources: self.sources,
            domains: self.domains,
            exclude_domains: self.exclude_domains,
            from: self.from,
            to: self.to,
            language: self.language,
            sort_by: self.sort_by,
            page_size: self.page_size,
            page: self.page,
        })
    }
}

fn collect_trimmed<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Vec<String> {
    values.into_iter().map(|v| v.into().trim().to_string()).collect()
}

// Elements are comma-joined on the wire, so a comma inside one cannot survive a round trip.
fn check_elements(field: &'static str, values: &[String]) -> Result<(), QueryError> {
    for value in values {
        if value.is_empty() {
            return Err(QueryError::validation(field, "entries must not be blank"));
        }
        if value.contains(',') {
            return Err(QueryError::validation(
                field,
                format!("entry '{}' must not contain a comma", value),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn field_of(err: QueryError) -> &'static str {
        match err {
            QueryError::Validation { field, .. }
            | QueryError::InvalidEnumValue { field, .. }
            | QueryError::InvalidDate { field, .. }
            | QueryError::InvalidNumber { field, .. } => field,
        }
    }

    #[test]
    fn blank_query_is_rejected() {
        for q in ["", "   ", "\n\t"] {
            let err = QueryParams::builder(q).build_at(today()).unwrap_err();
            assert_eq!(field_of(err), "q");
        }
    }

    #[test]
    fn overlong_query_is_rejected() {
        let q = "x".repeat(501);
        assert!(QueryParams::builder(q).build_at(today()).is_err());
        let q = "x".repeat(500);
        assert!(QueryParams::builder(q).build_at(today()).is_ok());
    }

    #[test]
    fn page_size_bounds() {
        for bad in [0, 101] {
            let err = QueryParams::builder("ai").page_size(bad).build_at(today()).unwrap_err();
            assert_eq!(field_of(err), "pageSize");
        }
        for good in [1, 100] {
            assert!(QueryParams::builder("ai").page_size(good).build_at(today()).is_ok());
        }
    }

    #[test]
    fn page_must_be_positive() {
        let err = QueryParams::builder("ai").page(0).build_at(today()).unwrap_err();
        assert_eq!(field_of(err), "page");
        assert!(QueryParams::builder("ai").page(1).build_at(today()).is_ok());
    }

    #[test]
    fn language_pattern_is_enforced() {
        assert!(QueryParams::builder("ai").language("en,fr").build_at(today()).is_ok());
        assert!(QueryParams::builder("ai").language("de").build_at(today()).is_ok());
        for bad in ["EN", "en,fr2", "eng", "en,", "en fr"] {
            let err = QueryParams::builder("ai").language(bad).build_at(today()).unwrap_err();
            assert_eq!(field_of(err), "language", "{bad} should be rejected");
        }
    }

    #[test]
    fn list_limits() {
        let too_many: Vec<String> = (0..21).map(|i| format!("source-{i}")).collect();
        let err = QueryParams::builder("ai").sources(too_many).build_at(today()).unwrap_err();
        assert_eq!(field_of(err), "sources");

        let err = QueryParams::builder("ai")
            .search_in([SearchIn::Title, SearchIn::Title])
            .build_at(today())
            .unwrap_err();
        assert_eq!(field_of(err), "searchIn");

        let err = QueryParams::builder("ai").domains(["bbc.co.uk", " "]).build_at(today()).unwrap_err();
        assert_eq!(field_of(err), "domains");

        let err = QueryParams::builder("ai")
            .exclude_domains(["a.com,b.com"])
            .build_at(today())
            .unwrap_err();
        assert_eq!(field_of(err), "excludeDomains");
    }

    #[test]
    fn future_dates_are_rejected() {
        let tomorrow = today().succ_opt().unwrap();
        let err = QueryParams::builder("ai").from(tomorrow).build_at(today()).unwrap_err();
        assert_eq!(field_of(err), "from");
        let err = QueryParams::builder("ai").to(tomorrow).build_at(today()).unwrap_err();
        assert_eq!(field_of(err), "to");
        assert!(QueryParams::builder("ai").to(today()).build_at(today()).is_ok());
    }

    #[test]
    fn to_map_omits_unset_fields() {
        let params = QueryParams::builder("rust").build_at(today()).unwrap();
        assert_eq!(params.to_map(), map(&[("q", "rust")]));
    }

    #[test]
    fn to_map_encodes_every_field() {
        let params = QueryParams::builder("ai chips")
            .search_in([SearchIn::Title, SearchIn::Description])
            .sources(["bbc-news", "the-verge"])
            .domains(["bbc.co.uk"])
            .exclude_domains(["example.com", "spam.net"])
            .from(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .to(today())
            .language("en,fr")
            .sort_by(SortBy::PublishedAt)
            .page_size(10)
            .page(2)
            .build_at(today())
            .unwrap();

        assert_eq!(
            params.to_map(),
            map(&[
                ("q", "ai chips"),
                ("searchIn", "title,description"),
                ("sources", "bbc-news,the-verge"),
                ("domains", "bbc.co.uk"),
                ("excludeDomains", "example.com,spam.net"),
                ("from", "2025-06-01"),
                ("to", "2025-06-15"),
                ("language", "en,fr"),
                ("sortBy", "publishedAt"),
                ("pageSize", "10"),
                ("page", "2"),
            ])
        );
    }

    #[test]
    fn from_map_reverses_to_map() {
        let params = QueryParams::builder("ai")
            .search_in([SearchIn::Content])
            .sources(["bbc-news"])
            .from(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .sort_by(SortBy::Popularity)
            .page_size(100)
            .build()
            .unwrap();
        assert_eq!(QueryParams::from_map(&params.to_map()).unwrap(), params);

        let bare = QueryParams::builder("only q").build().unwrap();
        assert_eq!(QueryParams::from_map(&bare.to_map()).unwrap(), bare);
    }

    #[test]
    fn from_map_trims_and_ignores_case() {
        let params = QueryParams::from_map(&map(&[
            ("q", "ai"),
            ("searchIn", " TITLE , Description "),
            ("sources", " bbc-news ,, the-verge "),
            ("sortBy", " PUBLISHEDAT "),
            ("pageSize", " 20 "),
            ("language", ""),
        ]))
        .unwrap();

        assert_eq!(params.search_in(), &[SearchIn::Title, SearchIn::Description]);
        assert_eq!(params.sources(), &["bbc-news".to_string(), "the-verge".to_string()]);
        assert_eq!(params.sort_by(), Some(SortBy::PublishedAt));
        assert_eq!(params.page_size(), Some(20));
        assert_eq!(params.language(), None);
    }

    #[test]
    fn from_map_names_the_bad_enum_token() {
        let err = QueryParams::from_map(&map(&[("q", "ai"), ("sortBy", "newest")])).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidEnumValue {
                field: "sortBy",
                value: "newest".into()
            }
        );

        let err = QueryParams::from_map(&map(&[("q", "ai"), ("searchIn", "title,body")])).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidEnumValue {
                field: "searchIn",
                value: "body".into()
            }
        );
    }

    #[test]
    fn from_map_rejects_bad_scalars() {
        let err = QueryParams::from_map(&map(&[("q", "ai"), ("from", "15/06/2025")])).unwrap_err();
        assert!(matches!(err, QueryError::InvalidDate { field: "from", .. }));

        let err = QueryParams::from_map(&map(&[("q", "ai"), ("page", "-1")])).unwrap_err();
        assert!(matches!(err, QueryError::InvalidNumber { field: "page", .. }));

        let err = QueryParams::from_map(&map(&[("sortBy", "popularity")])).unwrap_err();
        assert_eq!(field_of(err), "q");
    }

    #[test]
    fn to_builder_produces_a_modified_copy() {
        let original = QueryParams::builder("ai").page(1).build_at(today()).unwrap();
        let next = original.to_builder().page(2).build_at(today()).unwrap();
        assert_eq!(original.page(), Some(1));
        assert_eq!(next.page(), Some(2));
        assert_eq!(next.q(), "ai");
    }

    #[test]
    fn enum_tokens_parse_case_insensitively() {
        assert_eq!(" TITLE ".parse::<SearchIn>().unwrap(), SearchIn::Title);
        assert_eq!("Relevancy".parse::<SortBy>().unwrap(), SortBy::Relevancy);
        assert_eq!(SortBy::PublishedAt.to_string(), "publishedAt");
    }
}
