use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::core::domain::Identifiable;
use crate::core::events::{ListenerSet, StatusListener};
use crate::lending::domain::model::LoanEntity;
use crate::utils::date::serializer;

// Member is a roster entry. The id is supplied by the caller and must be
// unique across the roster; uniqueness is enforced by the lending service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub member_id: String,
    // loans currently outstanding, in loan order
    pub loans: Vec<LoanEntity>,
    #[serde(skip)]
    pub listeners: ListenerSet,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Member {
    pub fn new(name: &str, member_id: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            loans: Vec::new(),
            listeners: ListenerSet::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn add_loan(&mut self, loan: LoanEntity) {
        self.loans.push(loan);
    }

    pub fn remove_loan(&mut self, loan_id: &str) -> Option<LoanEntity> {
        let pos = self.loans.iter().position(|l| l.loan_id == loan_id)?;
        Some(self.loans.remove(pos))
    }

    // Looks up an active loan by the underlying title of the lent book.
    pub fn find_loan_by_book(&self, book_title: &str) -> Option<&LoanEntity> {
        self.loans.iter().find(|l| l.book_title == book_title)
    }

    pub fn has_active_loans(&self) -> bool {
        !self.loans.is_empty()
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

impl Identifiable for Member {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::lending::domain::model::LoanEntity;
    use crate::members::domain::model::Member;

    #[test]
    fn test_should_build_member() {
        let member = Member::new("Alice", "m1");
        assert_eq!("Alice", member.name.as_str());
        assert_eq!("m1", member.id());
        assert!(!member.has_active_loans());
    }

    #[test]
    fn test_should_find_loan_by_book() {
        let mut member = Member::new("Alice", "m1");
        member.add_loan(LoanEntity::new("1984", "m1"));
        member.add_loan(LoanEntity::new("Pride and Prejudice", "m1"));
        let loan = member.find_loan_by_book("1984").expect("loan");
        assert_eq!("1984", loan.book_title.as_str());
        assert!(member.find_loan_by_book("Moby Dick").is_none());
    }

    #[test]
    fn test_should_remove_loan_by_id() {
        let mut member = Member::new("Alice", "m1");
        let loan = LoanEntity::new("1984", "m1");
        let loan_id = loan.loan_id.to_string();
        member.add_loan(loan);
        assert!(member.has_active_loans());
        let removed = member.remove_loan(loan_id.as_str()).expect("removed");
        assert_eq!(loan_id, removed.loan_id);
        assert!(!member.has_active_loans());
        assert!(member.remove_loan(loan_id.as_str()).is_none());
    }
}
