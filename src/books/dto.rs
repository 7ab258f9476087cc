use serde::{Deserialize, Serialize};
use crate::books::domain::model::{Author, Title};

// BookDto is a data transfer object for one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub author: String,
    pub title: String,
    pub copies: usize,
    pub lent_out: usize,
    pub available: usize,
}

impl BookDto {
    pub fn new(author: &str, title: &str, copies: usize, lent_out: usize) -> BookDto {
        BookDto {
            author: author.to_string(),
            title: title.to_string(),
            copies,
            lent_out,
            available: copies.saturating_sub(lent_out),
        }
    }

    pub fn build_title(&self) -> Title {
        Title::new(Author::new(self.author.as_str()), self.title.as_str())
    }
}
