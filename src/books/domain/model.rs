use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::events::{ListenerSet, StatusListener};
use crate::lending::domain::model::LoanEntity;
use crate::utils::date::serializer;

// BookEntity is a catalog entry for one title with a fungible pool of
// copies. Copies are tracked only by count: total_quantity is the size of
// the pool and borrowed_quantity how many copies are currently out.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub total_quantity: i32,
    pub borrowed_quantity: i32,
    pub loan_history: Vec<LoanEntity>,
    #[serde(skip)]
    pub listeners: ListenerSet,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, quantity: i32) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            total_quantity: quantity,
            borrowed_quantity: 0,
            loan_history: Vec::new(),
            listeners: ListenerSet::new(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Can go negative when the total is lowered below the borrowed count.
    pub fn available_quantity(&self) -> i32 {
        self.total_quantity - self.borrowed_quantity
    }

    pub fn is_available(&self) -> bool {
        self.available_quantity() > 0
    }

    // Takes one copy out of the pool. Availability is checked by the
    // lending service before this is called.
    pub fn lend_copy(&mut self) {
        self.borrowed_quantity += 1;
        self.updated_at = Utc::now().naive_utc();
    }

    // Puts one copy back, never dropping the borrowed count below zero.
    pub fn return_copy(&mut self) {
        if self.borrowed_quantity > 0 {
            self.borrowed_quantity -= 1;
        }
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn set_total_quantity(&mut self, quantity: i32) {
        self.total_quantity = quantity;
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn add_loan(&mut self, loan: LoanEntity) {
        self.loan_history.push(loan);
    }

    pub fn remove_loan(&mut self, loan_id: &str) -> Option<LoanEntity> {
        let pos = self.loan_history.iter().position(|l| l.loan_id == loan_id)?;
        Some(self.loan_history.remove(pos))
    }

    pub fn subscribe(&mut self, listener: Arc<dyn StatusListener>) {
        self.listeners.subscribe(listener);
    }

    pub fn unsubscribe(&mut self, listener: &Arc<dyn StatusListener>) {
        self.listeners.unsubscribe(listener);
    }

    pub fn notify(&self, message: &str) {
        self.listeners.notify(message);
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

// CatalogEntry is what the catalog actually stores: either a plain book or a
// book overlaid with a rating. Rating a book swaps the catalog entry rather
// than mutating a field, so the decorated form is a distinct catalog object
// carrying the same underlying book, counts and history.
#[derive(Debug, Serialize, Deserialize)]
pub enum CatalogEntry {
    Plain(BookEntity),
    Rated { book: BookEntity, rating: f64 },
}

impl CatalogEntry {
    pub fn book(&self) -> &BookEntity {
        match self {
            CatalogEntry::Plain(book) => book,
            CatalogEntry::Rated { book, .. } => book,
        }
    }

    pub fn book_mut(&mut self) -> &mut BookEntity {
        match self {
            CatalogEntry::Plain(book) => book,
            CatalogEntry::Rated { book, .. } => book,
        }
    }

    pub fn rating(&self) -> Option<f64> {
        match self {
            CatalogEntry::Plain(_) => None,
            CatalogEntry::Rated { rating, .. } => Some(*rating),
        }
    }

    // Rated entries render their rating into the visible title.
    pub fn display_title(&self) -> String {
        match self {
            CatalogEntry::Plain(book) => book.title.to_string(),
            CatalogEntry::Rated { book, rating } => {
                format!("{} (Rated: {})", book.title.as_str(), rating)
            }
        }
    }

    // Inherited lookup rule, preserved for compatibility: a plain entry
    // matches any substring of its title, while a rated entry matches only
    // the exact decorated title.
    pub fn matches_title(&self, title: &str) -> bool {
        match self {
            CatalogEntry::Plain(book) => book.title.contains(title),
            CatalogEntry::Rated { .. } => self.display_title() == title,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::{BookEntity, CatalogEntry};
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_book() {
        let book = BookEntity::new("1984", "George Orwell", 1949, 2);
        assert_eq!("1984", book.title.as_str());
        assert_eq!("George Orwell", book.author.as_str());
        assert_eq!(1949, book.year);
        assert_eq!(2, book.total_quantity);
        assert_eq!(0, book.borrowed_quantity);
        assert_eq!(2, book.available_quantity());
        assert!(book.is_available());
        assert_eq!(book.book_id, book.id());
    }

    #[test]
    fn test_should_lend_and_return_copies() {
        let mut book = BookEntity::new("1984", "George Orwell", 1949, 1);
        book.lend_copy();
        assert_eq!(1, book.borrowed_quantity);
        assert!(!book.is_available());
        book.return_copy();
        assert_eq!(0, book.borrowed_quantity);
        // the borrowed count saturates at zero
        book.return_copy();
        assert_eq!(0, book.borrowed_quantity);
    }

    #[test]
    fn test_should_allow_negative_availability_after_quantity_cut() {
        let mut book = BookEntity::new("1984", "George Orwell", 1949, 3);
        book.lend_copy();
        book.lend_copy();
        book.set_total_quantity(1);
        assert_eq!(-1, book.available_quantity());
        assert!(!book.is_available());
    }

    #[test]
    fn test_should_render_decorated_title() {
        let entry = CatalogEntry::Rated {
            book: BookEntity::new("1984", "George Orwell", 1949, 2),
            rating: 8.5,
        };
        assert_eq!("1984 (Rated: 8.5)", entry.display_title());
        assert_eq!(Some(8.5), entry.rating());
    }

    #[test]
    fn test_should_match_plain_entry_by_substring() {
        let entry = CatalogEntry::Plain(BookEntity::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, 5));
        assert!(entry.matches_title("Gatsby"));
        assert!(entry.matches_title("The Great Gatsby"));
        assert!(!entry.matches_title("Moby Dick"));
    }

    #[test]
    fn test_should_match_rated_entry_only_by_exact_decorated_title() {
        let entry = CatalogEntry::Rated {
            book: BookEntity::new("1984", "George Orwell", 1949, 2),
            rating: 7.0,
        };
        assert!(entry.matches_title("1984 (Rated: 7)"));
        assert!(!entry.matches_title("1984"));
        assert!(!entry.matches_title("984"));
    }
}
