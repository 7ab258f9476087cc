use serde::{Deserialize, Serialize};
use crate::books::domain::model::Author;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindBooksCommandRequest {
    ByAuthor { author: String },
    ByTitle { fragment: String },
}

// listing is the rendered text, or the no-match message when books is empty
#[derive(Debug, Serialize)]
pub struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub listing: String,
}

impl<'a> Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand<'a> {
    fn execute(&mut self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let res = match req {
            FindBooksCommandRequest::ByAuthor { author } => {
                let author = Author::new(author.as_str());
                FindBooksCommandResponse {
                    books: self.catalog_service.find_by_author(&author).into_iter().map(BookDto::from).collect(),
                    listing: self.catalog_service.list_by_author(&author),
                }
            }
            FindBooksCommandRequest::ByTitle { fragment } => {
                FindBooksCommandResponse {
                    books: self.catalog_service.find_by_title_substring(fragment.as_str())
                        .into_iter().map(BookDto::from).collect(),
                    listing: self.catalog_service.list_by_title_substring(fragment.as_str()),
                }
            }
        };
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{Author, Title};
    use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_find_books_by_author() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_books(vec![
            Title::new(Author::new("Asimov"), "Foundation"),
            Title::new(Author::new("Asimov"), "I, Robot"),
        ]);
        let mut cmd = FindBooksCommand::new(svc.as_ref());

        let req: FindBooksCommandRequest = serde_json::from_str(r#"{"by_author": {"author": "Asimov"}}"#)
            .expect("should parse request");
        let res = cmd.execute(req).expect("should find books");
        assert_eq!(2, res.books.len());
        assert_eq!("Foundation by Asimov\nI, Robot by Asimov\n", res.listing.as_str());

        let res = cmd.execute(FindBooksCommandRequest::ByAuthor { author: "Tolkien".to_string() })
            .expect("should find books");
        assert!(res.books.is_empty());
        assert_eq!("No books by Tolkien.", res.listing.as_str());
    }

    #[test]
    fn test_should_find_books_by_title() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(Title::new(Author::new("Tolkien"), "The Hobbit"));
        let mut cmd = FindBooksCommand::new(svc.as_ref());

        let res = cmd.execute(FindBooksCommandRequest::ByTitle { fragment: "HOBBIT".to_string() })
            .expect("should find books");
        assert_eq!(1, res.books.len());
        assert_eq!("Tolkien", res.books[0].author.as_str());
    }
}
