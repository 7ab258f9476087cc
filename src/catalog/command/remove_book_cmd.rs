use serde::{Deserialize, Serialize};
use crate::books::domain::model::{Author, Title};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const REMOVED_MESSAGE: &str = "Book removed.";

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub author: String,
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(author: &str, title: &str) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
        }
    }

    pub fn build_title(&self) -> Title {
        Title::new(Author::new(self.author.as_str()), self.title.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
            message: REMOVED_MESSAGE.to_string(),
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.delete_book(&req.build_title())
            .map_err(CommandError::from).map(|entry| RemoveBookCommandResponse::new(BookDto::from(&entry)))
    }
}
