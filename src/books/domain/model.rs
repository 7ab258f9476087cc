use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

// Author identifies the writer of a title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    name: String,
}

impl Author {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_same(&self, other: &Author) -> bool {
        self.name == other.name
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// Title is the identity of a book in the catalog. Every copy of the same title is
// tracked by a single catalog entry.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Title {
    author: Author,
    title: String,
}

impl Title {
    pub fn new(author: Author, title: &str) -> Self {
        Self {
            author,
            title: title.to_string(),
        }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn title_contains(&self, fragment: &str) -> bool {
        self.title.to_lowercase().contains(fragment.to_lowercase().as_str())
    }
}

impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        self.author.is_same(&other.author) && self.title == other.title
    }
}

impl Hash for Title {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.author.name.hash(state);
        self.title.hash(state);
    }
}

impl Display for Title {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}
