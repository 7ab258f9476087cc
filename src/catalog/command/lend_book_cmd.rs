use serde::{Deserialize, Serialize};
use crate::books::domain::model::{Author, Title};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub const LENT_MESSAGE: &str = "Checked out!";

pub struct LendBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> LendBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LendBookCommandRequest {
    pub author: String,
    pub title: String,
}

impl LendBookCommandRequest {
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
pub struct LendBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl LendBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
            message: LENT_MESSAGE.to_string(),
        }
    }
}

impl<'a> Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand<'a> {
    fn execute(&mut self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        self.catalog_service.lend_book(&req.build_title())
            .map_err(CommandError::from).map(|entry| LendBookCommandResponse::new(BookDto::from(entry)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{Author, Title};
    use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest, LENT_MESSAGE};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_lend_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        svc.add_book(Title::new(Author::new("Herbert"), "Dune"));
        let mut cmd = LendBookCommand::new(svc.as_mut());

        let res = cmd.execute(LendBookCommandRequest::new("Herbert", "Dune")).expect("should lend book");
        assert_eq!(LENT_MESSAGE, res.message.as_str());
        assert_eq!(1, res.book.lent_out);

        let err = cmd.execute(LendBookCommandRequest::new("Herbert", "Dune")).expect_err("should be unavailable");
        assert!(matches!(err, CommandError::Unavailable { retryable: true, .. }));

        let err = cmd.execute(LendBookCommandRequest::new("Unknown", "Nowhere")).expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
