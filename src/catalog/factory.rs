use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::Catalog;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    Box::new(Catalog::new(config))
}
