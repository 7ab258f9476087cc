use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{debug, info, warn};
use crate::books::domain::model::{Author, Title};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::CatalogEntry;
use crate::catalog::domain::status::CatalogStatus;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog is the in-memory catalog. Lookups scan the entries by title equality, which keeps
// insertion order as the only ordering that matters.
#[derive(Debug, Clone)]
pub struct Catalog {
    branch_id: String,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(config: &Configuration) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            entries: Vec::with_capacity(config.initial_capacity),
        }
    }

    pub fn branch_id(&self) -> &str {
        self.branch_id.as_str()
    }

    fn position(&self, title: &Title) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title() == title)
    }

    fn not_found(&self, title: &Title) -> LibraryError {
        warn!(branch_id = %self.branch_id, title = %title, "book not found");
        LibraryError::not_found(format!("book {} not found", title).as_str())
    }

    fn listing<'a, I>(entries: I) -> String
        where I: Iterator<Item=&'a CatalogEntry> {
        entries.map(|entry| format!("{}\n", entry.title())).collect()
    }
}

impl CatalogService for Catalog {
    fn add_book(&mut self, title: Title) -> &CatalogEntry {
        let ndx = match self.position(&title) {
            Some(ndx) => {
                self.entries[ndx].add_copy();
                ndx
            }
            None => {
                info!(branch_id = %self.branch_id, title = %title, "added new title");
                self.entries.push(CatalogEntry::new(title));
                self.entries.len() - 1
            }
        };
        let entry = &self.entries[ndx];
        debug!(branch_id = %self.branch_id, title = %entry.title(), copies = entry.copies(), "added copy");
        entry
    }

    fn add_books(&mut self, titles: Vec<Title>) {
        for title in titles {
            self.add_book(title);
        }
    }

    fn lend_book(&mut self, title: &Title) -> LibraryResult<&CatalogEntry> {
        let ndx = self.position(title).ok_or_else(|| self.not_found(title))?;
        let entry = &mut self.entries[ndx];
        if let Err(err) = entry.lend() {
            warn!(branch_id = %self.branch_id, title = %title, copies = entry.copies(), "no copies available");
            return Err(err);
        }
        debug!(branch_id = %self.branch_id, title = %title, lent_out = entry.lent_out(), "lent book");
        Ok(&*entry)
    }

    fn return_book(&mut self, title: &Title) -> LibraryResult<&CatalogEntry> {
        let ndx = self.position(title).ok_or_else(|| self.not_found(title))?;
        let entry = &mut self.entries[ndx];
        if let Err(err) = entry.give_back() {
            warn!(branch_id = %self.branch_id, title = %title, "no copies checked out");
            return Err(err);
        }
        debug!(branch_id = %self.branch_id, title = %title, lent_out = entry.lent_out(), "returned book");
        Ok(&*entry)
    }

    fn delete_book(&mut self, title: &Title) -> LibraryResult<CatalogEntry> {
        let ndx = self.position(title).ok_or_else(|| self.not_found(title))?;
        // Vec::remove shifts the tail left so display indices of later entries stay in order
        let removed = self.entries.remove(ndx);
        info!(branch_id = %self.branch_id, title = %title, copies = removed.copies(), "removed title");
        Ok(removed)
    }

    fn find(&self, title: &Title) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.title() == title)
    }

    fn entries(&self) -> &[CatalogEntry] {
        self.entries.as_slice()
    }

    fn find_by_author(&self, author: &Author) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|entry| entry.title().author().is_same(author)).collect()
    }

    fn find_by_title_substring(&self, fragment: &str) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|entry| entry.title().title_contains(fragment)).collect()
    }

    fn unique_titles(&self) -> usize {
        self.entries.len()
    }

    fn total_copies(&self) -> usize {
        self.entries.iter().map(CatalogEntry::copies).sum()
    }

    fn total_checked_out(&self) -> usize {
        self.entries.iter().map(CatalogEntry::lent_out).sum()
    }

    fn status(&self) -> CatalogStatus {
        CatalogStatus {
            unique_titles: self.unique_titles(),
            total_copies: self.total_copies(),
            total_checked_out: self.total_checked_out(),
        }
    }

    fn status_summary(&self) -> String {
        self.status().to_string()
    }

    fn count_by_author(&self, author: &Author) -> usize {
        self.find_by_author(author).len()
    }

    fn list_by_author(&self, author: &Author) -> String {
        let matches = self.find_by_author(author);
        if matches.is_empty() {
            format!("No books by {}.", author)
        } else {
            Self::listing(matches.into_iter())
        }
    }

    fn list_by_title_substring(&self, fragment: &str) -> String {
        let matches = self.find_by_title_substring(fragment);
        if matches.is_empty() {
            format!("No books with \"{}\" in the title.", fragment)
        } else {
            Self::listing(matches.into_iter())
        }
    }

    fn render(&self) -> String {
        let mut res: String = self.entries.iter().enumerate()
            .map(|(i, entry)| format!("{}. {} : {}/{}\n", i, entry.title(), entry.available(), entry.copies()))
            .collect();
        res.push('\n');
        res.push_str(self.status_summary().as_str());
        res
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
