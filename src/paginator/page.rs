use std::cmp::Ordering;
use std::ops::Add;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::book::{Book, BookOptions};
use super::error::{PaginatorError, Result};

/// Discord rejects embeds carrying more fields than this.
pub const MAX_FIELDS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

/// The author block shown at the top left of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// One displayable unit of a [`Book`].
///
/// A page is plain data: it knows its slot and what to show, nothing about the
/// book it ends up in. Slot uniqueness is enforced by the book, see
/// [`Book::set_page_index`] for reassigning the slot of a page that is already bound.
///
/// Pages compare by slot only. A page without a slot is not comparable with anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    index: Option<usize>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub url: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub author: Option<PageAuthor>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub footer: Option<String>,
    fields: Vec<PageField>,
}

#[allow(dead_code)]
impl Page {
    /// Creates an empty page without a slot. Books auto-index such pages by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty page bound to the given slot.
    pub fn indexed(index: i64) -> Result<Self> {
        let mut page = Self::new();
        page.set_index(index)?;
        Ok(page)
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Sets the slot of a page that is not part of a book yet.
    ///
    /// Negative slots are rejected. Uniqueness can only be checked by the book.
    pub fn set_index(&mut self, index: i64) -> Result<()> {
        self.index = Some(validate_index(index)?);
        Ok(())
    }

    pub fn clear_index(&mut self) {
        self.index = None;
    }

    pub(crate) fn assign_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn fields(&self) -> &[PageField] {
        &self.fields
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn author(mut self, author: PageAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Appends a field, failing once the page already holds [`MAX_FIELDS`] fields.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Result<Self> {
        if self.fields.len() >= MAX_FIELDS {
            return Err(PaginatorError::TooManyFields);
        }
        self.fields.push(PageField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        Ok(self)
    }

    /// Builds a page from a JSON object.
    ///
    /// ```json
    /// {"index": 2, "title": "Rules", "fields": [{"name": "1", "value": "Be nice"}]}
    /// ```
    ///
    /// Anything other than an object yields [`PaginatorError::NotAPage`].
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(PaginatorError::NotAPage(json_type_name(value).to_string()));
        }
        let raw: RawPage = serde_json::from_value(value.clone())?;
        Page::try_from(raw)
    }

    /// Parses either a single page object or an array of page objects.
    pub fn many_from_json(input: &str) -> Result<Vec<Self>> {
        let value: Value = serde_json::from_str(input)?;
        match &value {
            Value::Array(items) => items.iter().map(Page::from_json).collect(),
            Value::Object(_) => Ok(vec![Page::from_json(&value)?]),
            other => Err(PaginatorError::NotAPage(json_type_name(other).to_string())),
        }
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.index, other.index), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for Page {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.index, other.index) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

/// `page + page` starts a new auto-indexing book holding both pages.
impl Add for Page {
    type Output = Result<Book>;

    fn add(self, other: Page) -> Result<Book> {
        if let (Some(a), Some(b)) = (self.index, other.index)
            && a == b
        {
            return Err(PaginatorError::DuplicateIndex(a));
        }
        Book::new(vec![self, other], BookOptions::default())
    }
}

fn validate_index(index: i64) -> Result<usize> {
    usize::try_from(index).map_err(|_| PaginatorError::InvalidIndex(index))
}

fn validate_url(raw: Option<String>) -> Result<Option<String>> {
    match raw {
        Some(raw) => match Url::parse(&raw) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "attachment") => {
                Ok(Some(raw))
            }
            Ok(_) => Err(PaginatorError::InvalidUrl(format!("{raw} must use http, https or attachment"))),
            Err(e) => Err(PaginatorError::InvalidUrl(format!("{raw}: {e}"))),
        },
        None => Ok(None),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unvalidated wire shape of a page, signed index included so negative slots can be reported.
#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    index: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    color: Option<u32>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    author: Option<PageAuthor>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    footer: Option<String>,
    #[serde(default)]
    fields: Vec<PageField>,
}

impl TryFrom<RawPage> for Page {
    type Error = PaginatorError;

    fn try_from(raw: RawPage) -> Result<Self> {
        if raw.fields.len() > MAX_FIELDS {
            return Err(PaginatorError::TooManyFields);
        }

        let author = match raw.author {
            Some(author) => Some(PageAuthor {
                url: validate_url(author.url)?,
                icon_url: validate_url(author.icon_url)?,
                name: author.name,
            }),
            None => None,
        };

        Ok(Page {
            index: raw.index.map(validate_index).transpose()?,
            title: raw.title,
            description: raw.description,
            color: raw.color,
            url: validate_url(raw.url)?,
            timestamp: raw.timestamp,
            author,
            image_url: validate_url(raw.image_url)?,
            thumbnail_url: validate_url(raw.thumbnail_url)?,
            footer: raw.footer,
            fields: raw.fields,
        })
    }
}
