use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::lending::dto::LoanDto;
use crate::members::dto::MemberDto;

pub mod model;
pub mod service;

// LendingService is the sole authority for validated, invariant-preserving
// operations on the catalog. Every method either completes with an
// observable state change or fails with a typed error leaving all state
// untouched. Execution is synchronous and single-threaded; a caller that
// shares the service across threads must wrap it in its own lock.
pub trait LendingService {
    fn add_book(&mut self, title: &str, author: &str, year: i32, quantity: i32) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, title: &str) -> LibraryResult<()>;
    fn update_book_quantity(&mut self, title: &str, quantity: i32) -> LibraryResult<BookDto>;
    fn add_member(&mut self, name: &str, id: &str) -> LibraryResult<MemberDto>;
    fn remove_member(&mut self, id: &str) -> LibraryResult<()>;
    fn lend_book(&mut self, title: &str, member_id: &str) -> LibraryResult<LoanDto>;
    fn return_book(&mut self, title: &str, member_id: &str) -> LibraryResult<LoanDto>;
    fn rate_book(&mut self, title: &str, rating: f64) -> LibraryResult<BookDto>;
    fn book_rating(&self, title: &str) -> LibraryResult<f64>;
    fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    fn find_member_by_id(&self, id: &str) -> LibraryResult<MemberDto>;
    fn user_loans(&self, member_id: &str) -> LibraryResult<Vec<BookDto>>;
    fn list_books(&self) -> Vec<BookDto>;
    fn summary(&self) -> String;
}
