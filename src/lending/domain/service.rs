use std::sync::Arc;
use tracing::debug;
use crate::books::domain::model::{BookEntity, CatalogEntry};
use crate::books::dto::BookDto;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::Configuration;
use crate::core::events::LoggingListener;
use crate::core::library::{LibraryError, LibraryResult};
use crate::lending::domain::LendingService;
use crate::lending::domain::model::LoanEntity;
use crate::lending::dto::LoanDto;
use crate::members::domain::model::Member;
use crate::members::dto::MemberDto;

// LibrarianService implements the lending operations over an explicitly
// injected catalog. It validates every operation completely before touching
// any state, so a failed operation leaves the catalog, its books, its
// members and the loan counters exactly as they were.
pub struct LibrarianService {
    max_book_quantity: i32,
    max_rating: f64,
    staff_name: String,
    library: Catalog,
}

impl LibrarianService {
    pub fn new(config: &Configuration, library: Catalog) -> Self {
        Self {
            max_book_quantity: config.max_book_quantity,
            max_rating: config.max_rating,
            staff_name: config.staff_name.to_string(),
            library,
        }
    }

    pub fn library(&self) -> &Catalog {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Catalog {
        &mut self.library
    }

    fn entry_position(&self, title: &str) -> Option<usize> {
        self.library.books().iter().position(|e| e.matches_title(title))
    }

    fn member_position(&self, id: &str) -> Option<usize> {
        self.library.members().iter().position(|m| m.member_id == id)
    }

    fn book_not_found(title: &str) -> LibraryError {
        LibraryError::not_found(format!("Book not found: {}", title).as_str())
    }

    fn member_not_found(id: &str) -> LibraryError {
        LibraryError::not_found(format!("Member not found: {}", id).as_str())
    }
}

impl LendingService for LibrarianService {
    // Quantity is deliberately not validated at creation time; the 0..=20
    // policy is applied only on updates, matching the historical behavior.
    fn add_book(&mut self, title: &str, author: &str, year: i32, quantity: i32) -> LibraryResult<BookDto> {
        let mut book = BookEntity::new(title, author, year, quantity);
        book.subscribe(Arc::new(LoggingListener::new(self.staff_name.as_str())));
        let entry = CatalogEntry::Plain(book);
        let dto = BookDto::from(&entry);
        self.library.add_book(entry);
        debug!("added book {} with {} copies", title, quantity);
        Ok(dto)
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<()> {
        let pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        if self.library.books()[pos].book().borrowed_quantity > 0 {
            return Err(LibraryError::invalid_state(
                format!("Cannot remove book with active loans: {}", title).as_str()));
        }
        self.library.remove_book(pos);
        debug!("removed book {}", title);
        Ok(())
    }

    // The new total may legally land below the borrowed count, in which
    // case the availability of the title goes negative until enough copies
    // come back.
    fn update_book_quantity(&mut self, title: &str, quantity: i32) -> LibraryResult<BookDto> {
        if quantity < 0 || quantity > self.max_book_quantity {
            return Err(LibraryError::validation(
                format!("Quantity must be between 0 and {}: {}", self.max_book_quantity, quantity).as_str(), None));
        }
        let pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        self.library.books_mut()[pos].book_mut().set_total_quantity(quantity);
        Ok(BookDto::from(&self.library.books()[pos]))
    }

    fn add_member(&mut self, name: &str, id: &str) -> LibraryResult<MemberDto> {
        if self.member_position(id).is_some() {
            return Err(LibraryError::duplicate_key(format!("ID already taken: {}", id).as_str()));
        }
        let mut member = Member::new(name, id);
        member.subscribe(Arc::new(LoggingListener::new(name)));
        let dto = MemberDto::from(&member);
        self.library.add_member(member);
        debug!("added member {}", id);
        Ok(dto)
    }

    fn remove_member(&mut self, id: &str) -> LibraryResult<()> {
        let pos = self.member_position(id).ok_or_else(|| Self::member_not_found(id))?;
        if self.library.members()[pos].has_active_loans() {
            return Err(LibraryError::invalid_state(
                format!("Cannot remove member with active loans: {}", id).as_str()));
        }
        self.library.remove_member(pos);
        debug!("removed member {}", id);
        Ok(())
    }

    fn lend_book(&mut self, title: &str, member_id: &str) -> LibraryResult<LoanDto> {
        let book_pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        let member_pos = self.member_position(member_id).ok_or_else(|| Self::member_not_found(member_id))?;
        if !self.library.books()[book_pos].book().is_available() {
            return Err(LibraryError::invalid_state(
                format!("No available copies of the book: {}", title).as_str()));
        }
        let display_title = self.library.books()[book_pos].display_title();
        let loan = LoanEntity::new(self.library.books()[book_pos].book().title.as_str(), member_id);
        {
            let book = self.library.books_mut()[book_pos].book_mut();
            book.lend_copy();
            book.add_loan(loan.clone());
        }
        self.library.members_mut()[member_pos].add_loan(loan.clone());
        self.library.increment_loan_counters();
        self.library.books()[book_pos].book().notify(
            format!("Book lent: {}", display_title).as_str());
        self.library.members()[member_pos].notify(
            format!("Borrowed book: {}", display_title).as_str());
        debug!("lent {} to member {}", display_title, member_id);
        Ok(LoanDto::from(&loan))
    }

    fn return_book(&mut self, title: &str, member_id: &str) -> LibraryResult<LoanDto> {
        let book_pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        let member_pos = self.member_position(member_id).ok_or_else(|| Self::member_not_found(member_id))?;
        let book_title = self.library.books()[book_pos].book().title.to_string();
        let display_title = self.library.books()[book_pos].display_title();
        let loan_id = match self.library.members()[member_pos].find_loan_by_book(book_title.as_str()) {
            Some(loan) => loan.loan_id.to_string(),
            None => return Err(LibraryError::invalid_state(
                format!("No borrowed copy to return: {}", title).as_str())),
        };
        let mut closed = match self.library.members_mut()[member_pos].remove_loan(loan_id.as_str()) {
            Some(loan) => loan,
            None => return Err(LibraryError::invalid_state(
                format!("No borrowed copy to return: {}", title).as_str())),
        };
        closed.close();
        {
            let book = self.library.books_mut()[book_pos].book_mut();
            let _ = book.remove_loan(loan_id.as_str());
            book.return_copy();
        }
        self.library.decrement_loan_counters();
        self.library.books()[book_pos].book().notify(
            format!("Book returned: {}", display_title).as_str());
        self.library.members()[member_pos].notify(
            format!("Returned book: {}", display_title).as_str());
        debug!("returned {} from member {}", display_title, member_id);
        Ok(LoanDto::from(&closed))
    }

    // Rating a plain entry swaps it for a rated entry at the same catalog
    // position; rating a rated entry only replaces the rating value.
    fn rate_book(&mut self, title: &str, rating: f64) -> LibraryResult<BookDto> {
        if !(0.0..=self.max_rating).contains(&rating) {
            return Err(LibraryError::validation(
                format!("Rating must be between 0 and {}: {}", self.max_rating, rating).as_str(), None));
        }
        let pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        let rated = match self.library.remove_book(pos) {
            CatalogEntry::Plain(book) => CatalogEntry::Rated { book, rating },
            CatalogEntry::Rated { book, .. } => CatalogEntry::Rated { book, rating },
        };
        let dto = BookDto::from(&rated);
        self.library.insert_book(pos, rated);
        debug!("rated {} at {}", title, rating);
        Ok(dto)
    }

    // A book that exists but has never been rated reports 0.0.
    fn book_rating(&self, title: &str) -> LibraryResult<f64> {
        let pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        Ok(self.library.books()[pos].rating().unwrap_or(0.0))
    }

    fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        let pos = self.entry_position(title).ok_or_else(|| Self::book_not_found(title))?;
        Ok(BookDto::from(&self.library.books()[pos]))
    }

    fn find_member_by_id(&self, id: &str) -> LibraryResult<MemberDto> {
        let pos = self.member_position(id).ok_or_else(|| Self::member_not_found(id))?;
        Ok(MemberDto::from(&self.library.members()[pos]))
    }

    fn user_loans(&self, member_id: &str) -> LibraryResult<Vec<BookDto>> {
        let pos = self.member_position(member_id).ok_or_else(|| Self::member_not_found(member_id))?;
        let books = self.library.members()[pos].loans.iter()
            .filter_map(|loan| self.library.books().iter()
                .find(|e| e.book().title == loan.book_title))
            .map(BookDto::from)
            .collect();
        Ok(books)
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.library.books().iter().map(BookDto::from).collect()
    }

    fn summary(&self) -> String {
        self.library.summary()
    }
}
