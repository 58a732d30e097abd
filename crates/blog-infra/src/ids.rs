use bson::oid::ObjectId;

use blog_core::domain::DocumentId;

/// A fresh ObjectId-backed identifier, as MongoDB's own driver would assign.
pub fn new_document_id() -> DocumentId {
    DocumentId::from_bytes(ObjectId::new().bytes())
}
