use serde::{Deserialize, Serialize};

// Identifiable defines a common trait shared by catalog entities
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts policy options for the lending system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // upper bound for a title's total copy count
    pub max_book_quantity: i32,
    // upper bound of the rating scale
    pub max_rating: f64,
    // name used for the staff listener registered on every new book
    pub staff_name: String,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            max_book_quantity: 20,
            max_rating: 10.0,
            staff_name: "Library Staff".to_string(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new();
        assert_eq!(20, config.max_book_quantity);
        assert_eq!(10.0, config.max_rating);
        assert_eq!("Library Staff", config.staff_name.as_str());
    }
}
