use mongodb::bson::spec::BinarySubtype;
use mongodb::bson::{Binary, Document, doc};

use crate::error::AppError;

pub const DATA_FIELD: &str = "data";

/// A stored payload: opaque bytes, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadRecord {
    pub data: Vec<u8>,
}

impl PayloadRecord {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<PayloadRecord> for Document {
    fn from(record: PayloadRecord) -> Self {
        doc! {
            DATA_FIELD: Binary {
                subtype: BinarySubtype::Generic,
                bytes: record.data,
            }
        }
    }
}

impl TryFrom<Document> for PayloadRecord {
    type Error = AppError;

    fn try_from(mut document: Document) -> Result<Self, Self::Error> {
        match document.remove(DATA_FIELD) {
            Some(mongodb::bson::Bson::Binary(binary)) => Ok(PayloadRecord::new(binary.bytes)),
            Some(other) => Err(AppError::MalformedRecord(format!(
                "`{DATA_FIELD}` has type {:?}, expected binary",
                other.element_type()
            ))),
            None => Err(AppError::MalformedRecord(format!(
                "document has no `{DATA_FIELD}` field"
            ))),
        }
    }
}
