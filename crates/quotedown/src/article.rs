//! One selected piece of content plus its title, link and publication date.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::Node;
use crate::render::render_children;
use crate::{Error, Result};

/// Sentinel title when the heading text could not be resolved
pub const NO_TITLE: &str = "<no title detected>";
/// Sentinel link when no anchor href could be resolved
pub const NO_LINK: &str = "<no link detected>";

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("date pattern is valid"));

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// An article extracted from a page: title, source link, optional explicit
/// timestamp, and the content subtree the renderer is seeded with.
///
/// Title and link degrade to sentinel placeholders when missing; only a
/// structurally absent content subtree fails construction.
pub struct Article<'a> {
    title: String,
    link: String,
    timestamp: Option<String>,
    body: &'a Node,
}

impl<'a> Article<'a> {
    /// Build an article from one matched entry element (a changelog
    /// `<article>` and the like).
    ///
    /// Fixed structural extraction: the first `h1`–`h3` descendant supplies
    /// the title and (through its first anchor) the link, the first `div`
    /// descendant is the content body, and a `<time datetime>` descendant
    /// supplies an explicit timestamp when present.
    pub fn from_entry(entry: &'a Node) -> Result<Self> {
        let body = entry
            .descendants()
            .find(|n| n.tag_name() == "div")
            .ok_or_else(|| Error::MissingContent(entry.tag_name().to_string()))?;

        let heading = entry
            .descendants()
            .find(|n| matches!(n.tag_name(), "h1" | "h2" | "h3"));

        let link = heading
            .and_then(|h| h.descendants().find(|n| n.tag_name() == "a"))
            .or_else(|| entry.descendants().find(|n| n.tag_name() == "a"))
            .and_then(|a| a.attr("href"))
            .map(str::to_string)
            .unwrap_or_else(|| NO_LINK.to_string());

        Ok(Self {
            title: heading_title(heading),
            link,
            timestamp: explicit_timestamp(entry),
            body,
        })
    }

    /// Build an article from a whole fetched page (single full page mode).
    ///
    /// The page's own address becomes the link; the first `article` or
    /// `main` descendant (falling back to `body`) is the content body.
    pub fn from_page(page: &'a Node, url: &str) -> Result<Self> {
        let body = page
            .descendants()
            .find(|n| matches!(n.tag_name(), "article" | "main"))
            .or_else(|| page.descendants().find(|n| n.tag_name() == "body"))
            .ok_or_else(|| Error::MissingContent(page.tag_name().to_string()))?;

        let heading = page.descendants().find(|n| n.tag_name() == "h1");

        Ok(Self {
            title: heading_title(heading),
            link: url.to_string(),
            timestamp: explicit_timestamp(page),
            body,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// The publication period at month-and-year granularity, e.g.
    /// `"May. 2023"`.
    ///
    /// Prefers the explicit `<time datetime>` value, then a `YYYY-MM-DD`
    /// pattern embedded in the link. On failure returns a sentinel embedding
    /// the raw link so the result stays diagnosable.
    pub fn period(&self) -> String {
        let captures = self
            .timestamp
            .as_deref()
            .and_then(|ts| DATE_RE.captures(ts))
            .or_else(|| DATE_RE.captures(&self.link));

        let month_year = captures.and_then(|caps| {
            let month: usize = caps[2].parse().ok()?;
            let abbrev = MONTH_ABBREV.get(month.checked_sub(1)?)?;
            Some(format!("{}. {}", abbrev, &caps[1]))
        });

        month_year.unwrap_or_else(|| format!("<no date in {}>", self.link))
    }

    /// Render the header line followed by the converted content body.
    pub fn render(&self) -> String {
        format!(
            "> ## [{}]({}) ({})\n{}",
            self.title,
            self.link,
            self.period(),
            render_children(self.body)
        )
    }
}

fn heading_title(heading: Option<&Node>) -> String {
    heading
        .map(|h| h.text_content().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn explicit_timestamp(root: &Node) -> Option<String> {
    root.descendants()
        .find(|n| n.tag_name() == "time")
        .and_then(|t| t.attr("datetime"))
        .map(str::to_string)
}
