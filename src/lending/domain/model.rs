use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::{opt_serializer, serializer};

// LoanEntity links one borrowed copy of a book to the member holding it.
// The book and member are referenced by key rather than owned; a copy of the
// loan lives in the book's history and in the member's active list, and the
// two copies are correlated by loan_id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanEntity {
    pub loan_id: String,
    // title of the underlying book, before any rating decoration
    pub book_title: String,
    pub member_id: String,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    pub return_date: Option<NaiveDateTime>,
}

impl LoanEntity {
    pub fn new(book_title: &str, member_id: &str) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            book_title: book_title.to_string(),
            member_id: member_id.to_string(),
            loan_date: Utc::now().naive_utc(),
            return_date: None,
        }
    }

    // Stamps the return date; the only mutation a loan ever sees.
    pub fn close(&mut self) {
        self.return_date = Some(Utc::now().naive_utc());
    }

    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}
