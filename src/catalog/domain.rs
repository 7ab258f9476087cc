pub mod model;
pub mod service;
pub mod status;

use crate::books::domain::model::{Author, Title};
use crate::books::dto::BookDto;
use crate::catalog::domain::model::CatalogEntry;
use crate::catalog::domain::status::CatalogStatus;
use crate::core::library::LibraryResult;

// CatalogService tracks the copies owned and lent out for every distinct title. Entries are
// kept in insertion order, which is also the order of listings and display indices.
pub trait CatalogService {
    fn add_book(&mut self, title: Title) -> &CatalogEntry;
    fn add_books(&mut self, titles: Vec<Title>);
    fn lend_book(&mut self, title: &Title) -> LibraryResult<&CatalogEntry>;
    fn return_book(&mut self, title: &Title) -> LibraryResult<&CatalogEntry>;
    fn delete_book(&mut self, title: &Title) -> LibraryResult<CatalogEntry>;

    fn find(&self, title: &Title) -> Option<&CatalogEntry>;
    fn entries(&self) -> &[CatalogEntry];
    fn find_by_author(&self, author: &Author) -> Vec<&CatalogEntry>;
    fn find_by_title_substring(&self, fragment: &str) -> Vec<&CatalogEntry>;

    fn unique_titles(&self) -> usize;
    fn total_copies(&self) -> usize;
    fn total_checked_out(&self) -> usize;
    fn status(&self) -> CatalogStatus;
    fn status_summary(&self) -> String;

    fn count_by_author(&self, author: &Author) -> usize;
    fn list_by_author(&self, author: &Author) -> String;
    fn list_by_title_substring(&self, fragment: &str) -> String;
    fn render(&self) -> String;

    fn snapshot(&self) -> Vec<BookDto> {
        self.entries().iter().map(BookDto::from).collect()
    }
}
