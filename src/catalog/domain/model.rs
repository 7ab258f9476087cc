use crate::books::domain::model::Title;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

// CatalogEntry keeps the counters for one distinct title. lent_out never exceeds copies.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    title: Title,
    copies: usize,
    lent_out: usize,
}

impl CatalogEntry {
    pub fn new(title: Title) -> Self {
        Self {
            title,
            copies: 1,
            lent_out: 0,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    pub fn lent_out(&self) -> usize {
        self.lent_out
    }

    pub fn available(&self) -> usize {
        self.copies - self.lent_out
    }

    pub(crate) fn add_copy(&mut self) {
        self.copies += 1;
    }

    pub(crate) fn lend(&mut self) -> LibraryResult<()> {
        if self.copies > self.lent_out {
            self.lent_out += 1;
            Ok(())
        } else {
            Err(LibraryError::no_copies_available(
                format!("all {} copies of {} are lent out", self.copies, self.title).as_str()))
        }
    }

    pub(crate) fn give_back(&mut self) -> LibraryResult<()> {
        if self.lent_out > 0 {
            self.lent_out -= 1;
            Ok(())
        } else {
            Err(LibraryError::none_checked_out(
                format!("no copies of {} are lent out", self.title).as_str()))
        }
    }
}

impl From<&CatalogEntry> for BookDto {
    fn from(other: &CatalogEntry) -> Self {
        BookDto::new(other.title.author().name(), other.title.title(), other.copies, other.lent_out)
    }
}
