//! Typed store filters and the pure functions that build them from query parameters.
//!
//! Every list route maps its raw parameters to one of these values and hands it
//! to the repository unchanged. A builder returning `None` means the request can
//! match nothing (for example `country_id=abc`) and the store is not consulted.

use crate::core::error::{AppError, Result};
use crate::features::geo::dtos::{CityListQuery, CountryListQuery, SearchQuery, StateListQuery};
use crate::shared::constants::{DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT};
use crate::shared::types::{resolve_limit, resolve_offset, Page};
use crate::shared::validation::{non_empty, parse_leading_int};

pub const SEARCH_QUERY_REQUIRED: &str = "Search query (q) parameter is required";

/// Case-insensitive literal substring match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    term: String,
}

impl TextMatch {
    /// `None` for an empty term, which filters nothing
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// `ILIKE` pattern for this term, escaped with `\` so `%` and `_` match literally
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 2);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// A numeric filter taken from the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdParam {
    Absent,
    Id(i64),
    /// Present but not a number; can never match
    Invalid,
}

impl IdParam {
    fn parse(raw: Option<&str>) -> Self {
        match non_empty(raw) {
            None => IdParam::Absent,
            Some(raw) => parse_leading_int(raw).map_or(IdParam::Invalid, IdParam::Id),
        }
    }

    fn into_filter(self) -> Option<Option<i64>> {
        match self {
            IdParam::Absent => Some(None),
            IdParam::Id(id) => Some(Some(id)),
            IdParam::Invalid => None,
        }
    }
}

// ==================== Region ====================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    /// Matched against `name` and, when `lang` is set, `translations[lang]`
    pub text: Option<TextMatch>,
    pub lang: Option<String>,
    pub page: Page,
}

impl RegionFilter {
    pub fn all() -> Self {
        Self::default()
    }
}

// ==================== Country ====================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    pub region_id: Option<i64>,
    /// Matched against `name`, `native` and, when `lang` is set, `translations[lang]`
    pub text: Option<TextMatch>,
    /// Also match `text` against `iso2` and `iso3`
    pub match_codes: bool,
    pub lang: Option<String>,
    pub page: Page,
}

impl CountryFilter {
    pub fn by_region(region_id: i64) -> Self {
        Self {
            region_id: Some(region_id),
            ..Self::default()
        }
    }

    /// `/countries?name=..&lang=..`; `lang` must already be resolved against the default
    pub fn from_query(query: &CountryListQuery, lang: Option<&str>) -> Self {
        Self {
            text: non_empty(query.name.as_deref()).and_then(TextMatch::new),
            lang: lang.map(str::to_string),
            ..Self::default()
        }
    }
}

/// How a single country is addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryLookup {
    Id(i64),
    Iso2(String),
}

impl CountryLookup {
    /// ISO2 codes are stored uppercase
    pub fn iso2(code: &str) -> Self {
        CountryLookup::Iso2(code.trim().to_uppercase())
    }
}

// ==================== State ====================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateFilter {
    pub country_id: Option<i64>,
    pub text: Option<TextMatch>,
    pub page: Page,
}

impl StateFilter {
    pub fn by_country(country_id: i64) -> Self {
        Self {
            country_id: Some(country_id),
            ..Self::default()
        }
    }

    pub fn from_query(query: &StateListQuery) -> Option<Self> {
        let country_id = IdParam::parse(query.country_id.as_deref()).into_filter()?;
        Some(Self {
            country_id,
            text: None,
            page: Page {
                limit: Some(resolve_limit(query.limit.as_deref(), DEFAULT_LIST_LIMIT)),
                offset: resolve_offset(query.offset.as_deref()),
            },
        })
    }
}

// ==================== City ====================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityFilter {
    pub country_id: Option<i64>,
    pub state_id: Option<i64>,
    pub text: Option<TextMatch>,
    pub page: Page,
}

impl CityFilter {
    pub fn by_country(country_id: i64, page: Page) -> Self {
        Self {
            country_id: Some(country_id),
            page,
            ..Self::default()
        }
    }

    pub fn by_state(state_id: i64, page: Page) -> Self {
        Self {
            state_id: Some(state_id),
            page,
            ..Self::default()
        }
    }

    pub fn from_query(query: &CityListQuery) -> Option<Self> {
        let country_id = IdParam::parse(query.country_id.as_deref()).into_filter()?;
        let state_id = IdParam::parse(query.state_id.as_deref()).into_filter()?;
        Some(Self {
            country_id,
            state_id,
            text: non_empty(query.name.as_deref()).and_then(TextMatch::new),
            page: Page {
                limit: Some(resolve_limit(query.limit.as_deref(), DEFAULT_LIST_LIMIT)),
                offset: resolve_offset(query.offset.as_deref()),
            },
        })
    }
}

// ==================== Search ====================

/// Categories a search may cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    Countries,
    States,
    Cities,
    Regions,
}

/// Which categories a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    All,
    Only(SearchCategory),
    /// Unrecognised `type`; every category comes back empty
    Nothing,
}

impl SearchTarget {
    pub fn parse(kind: Option<&str>) -> Self {
        match non_empty(kind) {
            None => SearchTarget::All,
            Some("countries") => SearchTarget::Only(SearchCategory::Countries),
            Some("states") => SearchTarget::Only(SearchCategory::States),
            Some("cities") => SearchTarget::Only(SearchCategory::Cities),
            Some("regions") => SearchTarget::Only(SearchCategory::Regions),
            Some(_) => SearchTarget::Nothing,
        }
    }

    pub fn includes(self, category: SearchCategory) -> bool {
        match self {
            SearchTarget::All => true,
            SearchTarget::Only(only) => only == category,
            SearchTarget::Nothing => false,
        }
    }
}

/// Validated `/search` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub text: TextMatch,
    pub target: SearchTarget,
    pub lang: Option<String>,
    pub limit: i64,
}

impl SearchParams {
    /// `lang` must already be resolved against the default language
    pub fn from_query(query: &SearchQuery, lang: Option<&str>) -> Result<Self> {
        let text = non_empty(query.q.as_deref())
            .and_then(TextMatch::new)
            .ok_or_else(|| AppError::BadRequest(SEARCH_QUERY_REQUIRED.to_string()))?;

        Ok(Self {
            text,
            target: SearchTarget::parse(query.kind.as_deref()),
            lang: lang.map(str::to_string),
            limit: resolve_limit(query.limit.as_deref(), DEFAULT_SEARCH_LIMIT),
        })
    }

    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter {
            text: Some(self.text.clone()),
            lang: self.lang.clone(),
            page: Page::first(self.limit),
        }
    }

    pub fn country_filter(&self) -> CountryFilter {
        CountryFilter {
            region_id: None,
            text: Some(self.text.clone()),
            match_codes: true,
            lang: self.lang.clone(),
            page: Page::first(self.limit),
        }
    }

    pub fn state_filter(&self) -> StateFilter {
        StateFilter {
            country_id: None,
            text: Some(self.text.clone()),
            page: Page::first(self.limit),
        }
    }

    pub fn city_filter(&self) -> CityFilter {
        CityFilter {
            country_id: None,
            state_id: None,
            text: Some(self.text.clone()),
            page: Page::first(self.limit),
        }
    }
}

// ==================== In-process evaluation ====================

#[cfg(test)]
mod predicates {
    use super::*;
    use crate::features::geo::models::{City, Country, Region, State};
    use crate::features::geo::translation::Localized;

    impl TextMatch {
        pub fn matches(&self, haystack: &str) -> bool {
            haystack.to_lowercase().contains(&self.term.to_lowercase())
        }
    }

    fn translated<'a>(item: &'a impl Localized, lang: Option<&str>) -> Option<&'a String> {
        lang.and_then(|lang| item.translations().and_then(|t| t.get(lang)))
    }

    impl RegionFilter {
        pub fn matches(&self, region: &Region) -> bool {
            self.text.as_ref().map_or(true, |text| {
                text.matches(&region.name)
                    || translated(region, self.lang.as_deref()).is_some_and(|t| text.matches(t))
            })
        }
    }

    impl CountryFilter {
        pub fn matches(&self, country: &Country) -> bool {
            if self.region_id.is_some_and(|id| id != country.region_id) {
                return false;
            }
            self.text.as_ref().map_or(true, |text| {
                text.matches(&country.name)
                    || country.native.as_deref().is_some_and(|n| text.matches(n))
                    || (self.match_codes
                        && (text.matches(&country.iso2) || text.matches(&country.iso3)))
                    || translated(country, self.lang.as_deref()).is_some_and(|t| text.matches(t))
            })
        }
    }

    impl CountryLookup {
        pub fn matches(&self, country: &Country) -> bool {
            match self {
                CountryLookup::Id(id) => country.id == *id,
                CountryLookup::Iso2(code) => country.iso2 == *code,
            }
        }
    }

    impl StateFilter {
        pub fn matches(&self, state: &State) -> bool {
            self.country_id.map_or(true, |id| id == state.country_id)
                && self.text.as_ref().map_or(true, |t| t.matches(&state.name))
        }
    }

    impl CityFilter {
        pub fn matches(&self, city: &City) -> bool {
            self.country_id.map_or(true, |id| id == city.country_id)
                && self.state_id.map_or(true, |id| id == city.state_id)
                && self.text.as_ref().map_or(true, |t| t.matches(&city.name))
        }
    }
}
