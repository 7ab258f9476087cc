use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// CatalogStatus summarizes the catalog counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatus {
    pub unique_titles: usize,
    pub total_copies: usize,
    pub total_checked_out: usize,
}

impl Display for CatalogStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Total unique books: {}\nTotal number of copies: {}\nTotal checked out: {}",
               self.unique_titles, self.total_copies, self.total_checked_out)
    }
}
