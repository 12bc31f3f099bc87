//! Response body types
//!
//! List/create/update responses are the records themselves; only message
//! bodies (deletion confirmations and errors) have a dedicated shape.

use serde::Serialize;

/// JSON `{"message": ...}` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation body for a successful delete
    pub fn book_deleted() -> Self {
        Self::new("Book deleted successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_confirmation_shape() {
        let json = serde_json::to_value(MessageResponse::book_deleted()).unwrap();
        assert_eq!(json["message"], "Book deleted successfully");
    }
}
