use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::lending::domain::model::LoanEntity;
use crate::utils::date::{opt_serializer, serializer};

// LoanDto is the loan record handed back by lend and return operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub book_title: String,
    pub member_id: String,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    pub return_date: Option<NaiveDateTime>,
}

impl Identifiable for LoanDto {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

impl From<&LoanEntity> for LoanDto {
    fn from(loan: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: loan.loan_id.to_string(),
            book_title: loan.book_title.to_string(),
            member_id: loan.member_id.to_string(),
            loan_date: loan.loan_date,
            return_date: loan.return_date,
        }
    }
}
