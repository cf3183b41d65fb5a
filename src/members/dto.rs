use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::lending::dto::LoanDto;
use crate::members::domain::model::Member;
use crate::utils::date::serializer;

// MemberDto is the roster record handed back by the lending service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub name: String,
    pub member_id: String,
    pub active_loans: Vec<LoanDto>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl From<&Member> for MemberDto {
    fn from(member: &Member) -> MemberDto {
        MemberDto {
            name: member.name.to_string(),
            member_id: member.member_id.to_string(),
            active_loans: member.loans.iter().map(LoanDto::from).collect(),
            created_at: member.created_at,
        }
    }
}
