use crate::books::domain::model::CatalogEntry;
use crate::members::domain::model::Member;

// Catalog owns the book and member collections and the loan counters. It
// performs unchecked collection mutation only; every business rule (title
// uniqueness, availability, removal guards) lives in the lending service,
// which is the catalog's single logical owner.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<CatalogEntry>,
    members: Vec<Member>,
    // loans currently outstanding
    loaned_count: i64,
    // lifetime loan count, never decremented
    total_loans: i64,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            books: Vec::new(),
            members: Vec::new(),
            loaned_count: 0,
            total_loans: 0,
        }
    }

    pub fn add_book(&mut self, entry: CatalogEntry) {
        self.books.push(entry);
    }

    pub fn remove_book(&mut self, index: usize) -> CatalogEntry {
        self.books.remove(index)
    }

    pub fn insert_book(&mut self, index: usize, entry: CatalogEntry) {
        self.books.insert(index, entry);
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn remove_member(&mut self, index: usize) -> Member {
        self.members.remove(index)
    }

    // The collections are handed out live; callers get views into the
    // catalog, not copies they own.
    pub fn books(&self) -> &[CatalogEntry] {
        &self.books
    }

    pub fn books_mut(&mut self) -> &mut Vec<CatalogEntry> {
        &mut self.books
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Vec<Member> {
        &mut self.members
    }

    pub fn loaned_count(&self) -> i64 {
        self.loaned_count
    }

    pub fn total_loans(&self) -> i64 {
        self.total_loans
    }

    pub fn increment_loan_counters(&mut self) {
        self.loaned_count += 1;
        self.total_loans += 1;
    }

    // The lifetime total is left untouched on return.
    pub fn decrement_loan_counters(&mut self) {
        if self.loaned_count > 0 {
            self.loaned_count -= 1;
        }
    }

    pub fn total_copies(&self) -> i64 {
        self.books.iter().map(|e| e.book().total_quantity as i64).sum()
    }

    pub fn available_copies(&self) -> i64 {
        self.books.iter().map(|e| e.book().available_quantity() as i64).sum()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(format!("Total Books: {}\n", self.total_copies()).as_str());
        summary.push_str(format!("Available Books: {}\n", self.available_copies()).as_str());
        summary.push_str(format!("Loaned Books: {}\n", self.loaned_count).as_str());
        summary.push_str(format!("Total Members: {}\n", self.members.len()).as_str());
        summary.push_str(format!("Total Loans: {}\n", self.total_loans).as_str());
        summary
    }

    // Empties both collections and the outstanding-loan counter while
    // keeping the lifetime loan total.
    pub fn clear(&mut self) {
        self.books.clear();
        self.members.clear();
        self.loaned_count = 0;
    }
}
