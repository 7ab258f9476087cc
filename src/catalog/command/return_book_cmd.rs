use serde::{Deserialize, Serialize};
use crate::books::domain::model::{Author, Title};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const RETURNED_MESSAGE: &str = "Checked in!";

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub author: String,
    pub title: String,
}

impl ReturnBookCommandRequest {
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
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
            message: RETURNED_MESSAGE.to_string(),
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.catalog_service.return_book(&req.build_title())
            .map_err(CommandError::from).map(|entry| ReturnBookCommandResponse::new(BookDto::from(entry)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{Author, Title};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, RETURNED_MESSAGE};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_return_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let dune = Title::new(Author::new("Herbert"), "Dune");
        svc.add_book(dune.clone());
        svc.lend_book(&dune).expect("should lend book");
        let mut cmd = ReturnBookCommand::new(svc.as_mut());

        let res = cmd.execute(ReturnBookCommandRequest::new("Herbert", "Dune")).expect("should return book");
        assert_eq!(RETURNED_MESSAGE, res.message.as_str());
        assert_eq!(0, res.book.lent_out);

        let err = cmd.execute(ReturnBookCommandRequest::new("Herbert", "Dune")).expect_err("should have none out");
        assert!(matches!(err, CommandError::Conflict { .. }));
    }
}
