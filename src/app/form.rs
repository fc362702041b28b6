//! Add-book form state.

use crate::library::{BookError, NewBook, ReadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Year,
    Status,
    Cover,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Year,
        FormField::Status,
        FormField::Cover,
    ];

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Author,
            FormField::Author => FormField::Year,
            FormField::Year => FormField::Status,
            FormField::Status => FormField::Cover,
            FormField::Cover => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Cover,
            FormField::Author => FormField::Title,
            FormField::Year => FormField::Author,
            FormField::Status => FormField::Year,
            FormField::Cover => FormField::Status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Year => "Year published",
            FormField::Status => "Status",
            FormField::Cover => "Cover image",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: ReadStatus,
    pub cover: String,
    pub field: FormField,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text shown for a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Year => &self.year,
            FormField::Status => self.status.label(),
            FormField::Cover => &self.cover,
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Year => Some(&mut self.year),
            FormField::Cover => Some(&mut self.cover),
            FormField::Status => None,
        }
    }

    pub fn input(&mut self, c: char) {
        if self.field == FormField::Year && !(c.is_ascii_digit() || c == '-') {
            return;
        }
        match self.text_mut() {
            Some(text) => text.push(c),
            None if c == ' ' => self.cycle_status(),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    pub fn cycle_status(&mut self) {
        self.status = self.status.next();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Validate the entered values. Title and author are checked when the
    /// book is created.
    pub fn to_new_book(&self) -> Result<NewBook, BookError> {
        let year = self.year.trim();
        let year_published = if year.is_empty() {
            None
        } else {
            Some(
                year.parse::<i32>()
                    .map_err(|_| BookError::InvalidYear(year.to_string()))?,
            )
        };

        Ok(NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            year_published,
            status: self.status,
            cover: Some(self.cover.clone()),
        })
    }
}
