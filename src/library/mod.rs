//! In-memory book repository.

pub mod samples;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BookId(u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ReadStatus {
    #[default]
    Available,
    Reading,
    Finished,
}

impl ReadStatus {
    pub const ALL: [ReadStatus; 3] = [ReadStatus::Available, ReadStatus::Reading, ReadStatus::Finished];

    pub fn next(self) -> Self {
        match self {
            ReadStatus::Available => ReadStatus::Reading,
            ReadStatus::Reading => ReadStatus::Finished,
            ReadStatus::Finished => ReadStatus::Available,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadStatus::Available => "Available",
            ReadStatus::Reading => "Reading",
            ReadStatus::Finished => "Finished",
        }
    }

    /// Label of the action that moves a book out of this status.
    pub fn action_label(self) -> &'static str {
        match self {
            ReadStatus::Available => "Read",
            ReadStatus::Reading => "Finish",
            ReadStatus::Finished => "Unread",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ReadStatus::Available => 0,
            ReadStatus::Reading => 1,
            ReadStatus::Finished => 2,
        }
    }
}

impl FromStr for ReadStatus {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(ReadStatus::Available),
            "reading" => Ok(ReadStatus::Reading),
            "finished" => Ok(ReadStatus::Finished),
            _ => Err(BookError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("title is required")]
    MissingTitle,
    #[error("author is required")]
    MissingAuthor,
    #[error("invalid year: {0:?}")]
    InvalidYear(String),
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
    #[error("no book with id {0}")]
    NotFound(BookId),
}

/// Fields for a book that has not been added yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year_published: Option<i32>,
    pub status: ReadStatus,
    pub cover: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year_published = Some(year);
        self
    }

    pub fn status(mut self, status: ReadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year_published: Option<i32>,
    status: ReadStatus,
    cover: Option<String>,
}

impl Book {
    fn create(id: BookId, new: NewBook) -> Result<Self, BookError> {
        let title = new.title.trim();
        let author = new.author.trim();
        if title.is_empty() {
            return Err(BookError::MissingTitle);
        }
        if author.is_empty() {
            return Err(BookError::MissingAuthor);
        }
        let cover = new
            .cover
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year_published: new.year_published,
            status: new.status,
            cover,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year_published(&self) -> Option<i32> {
        self.year_published
    }

    pub fn status(&self) -> ReadStatus {
        self.status
    }

    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }
}

/// Ordered collection of books. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
    next_id: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        let mut lib = Self::new();
        for book in samples::sample_books() {
            if let Err(e) = lib.add(book) {
                tracing::warn!(error = %e, "skipping sample book");
            }
        }
        lib
    }

    pub fn add(&mut self, new: NewBook) -> Result<BookId, BookError> {
        let id = BookId(self.next_id);
        let book = Book::create(id, new)?;
        self.next_id += 1;
        tracing::debug!(%id, title = book.title(), "book added");
        self.books.push(book);
        Ok(id)
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Advance a book to its next status and return the new one.
    pub fn toggle_status(&mut self, id: BookId) -> Result<ReadStatus, BookError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(BookError::NotFound(id))?;
        book.status = book.status.next();
        Ok(book.status)
    }

    pub fn by_status(&self, status: ReadStatus) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(move |b| b.status == status)
    }

    pub fn count(&self, status: ReadStatus) -> usize {
        self.by_status(status).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
