use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::CatalogEntry;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the book-shaped record handed back by the lending service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub title: String,
    // title as shown in listings, with the rating suffix for rated entries
    pub display_title: String,
    pub author: String,
    pub year: i32,
    pub total_quantity: i32,
    pub borrowed_quantity: i32,
    pub available_quantity: i32,
    pub rating: Option<f64>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl From<&CatalogEntry> for BookDto {
    fn from(entry: &CatalogEntry) -> BookDto {
        let book = entry.book();
        BookDto {
            book_id: book.book_id.to_string(),
            title: book.title.to_string(),
            display_title: entry.display_title(),
            author: book.author.to_string(),
            year: book.year,
            total_quantity: book.total_quantity,
            borrowed_quantity: book.borrowed_quantity,
            available_quantity: book.available_quantity(),
            rating: entry.rating(),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}
