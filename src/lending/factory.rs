use crate::catalog::domain::model::Catalog;
use crate::core::domain::Configuration;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LibrarianService;

// Builds a lending service over a fresh, empty catalog. The catalog lives
// inside the service; callers wanting one catalog per process hold one
// service per process.
pub fn create_lending_service(config: &Configuration) -> Box<dyn LendingService> {
    create_lending_service_with_catalog(config, Catalog::new())
}

// Builds a lending service over a caller-prepared catalog, e.g. one seeded
// with books and members ahead of time.
pub fn create_lending_service_with_catalog(config: &Configuration, library: Catalog) -> Box<dyn LendingService> {
    Box::new(LibrarianService::new(config, library))
}
