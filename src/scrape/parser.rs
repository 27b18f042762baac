// src/scrape/parser.rs
use super::JobListing;
use crate::config::SelectorConfig;
use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};

/// Fields that degrade to a fallback string when extraction misses.
/// Salary is not listed: it degrades to `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Company,
    Location,
    Description,
}

/// The declared fallback table. A missing or unmatched field never drops the
/// block; it is replaced by the value here.
pub const FIELD_FALLBACKS: [(ListingField, &str); 4] = [
    (ListingField::Title, "No Title"),
    (ListingField::Company, "No Company"),
    (ListingField::Location, "No Location"),
    (ListingField::Description, ""),
];

pub fn fallback_for(field: ListingField) -> &'static str {
    FIELD_FALLBACKS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, value)| *value)
        .unwrap_or("")
}

/// Selector-driven extraction of posting blocks into normalized records.
///
/// Selectors are compiled once at construction; a bad selector string is a
/// startup error, never a per-request one.
pub struct ListingParser {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    description: Selector,
}

impl ListingParser {
    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            container: compile_selector(&config.container)?,
            title: compile_selector(&config.title)?,
            company: compile_selector(&config.company)?,
            location: compile_selector(&config.location)?,
            salary: compile_selector(&config.salary)?,
            description: compile_selector(&config.description)?,
        })
    }

    /// Extract every posting block in document order. Fields are extracted
    /// independently; zero matching blocks yield an empty vec, not an error.
    pub fn parse(&self, html: &str) -> Vec<JobListing> {
        let document = Html::parse_document(html);

        document
            .select(&self.container)
            .enumerate()
            .map(|(index, block)| JobListing {
                id: index + 1,
                title: self.field_or_fallback(&block, &self.title, ListingField::Title),
                description: self.field_or_fallback(
                    &block,
                    &self.description,
                    ListingField::Description,
                ),
                company: self.field_or_fallback(&block, &self.company, ListingField::Company),
                location: self.field_or_fallback(&block, &self.location, ListingField::Location),
                salary: extract_text(&block, &self.salary),
            })
            .collect()
    }

    fn field_or_fallback(
        &self,
        block: &ElementRef,
        selector: &Selector,
        field: ListingField,
    ) -> String {
        extract_text(block, selector).unwrap_or_else(|| fallback_for(field).to_string())
    }
}

fn compile_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| anyhow!("invalid selector '{}': {}", raw, e))
}

fn extract_text(block: &ElementRef, selector: &Selector) -> Option<String> {
    let element = block.select(selector).next()?;
    let text = clean_text(&element.text().collect::<Vec<_>>().join(" "));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn clean_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
