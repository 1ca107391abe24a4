pub mod citation;
pub mod document;
pub mod error;
pub mod metadata;

pub use citation::{
    Author, CITATION_ID_TAG, LegacySubfields, PublicationType, RawCitation, UNLABELED_SUBFIELD,
};
pub use document::{CitationDocument, Field, FieldName};
pub use error::{CitationError, Result};
pub use metadata::{ExternalMetadata, ExternalRecord, JOURNAL_ARTICLE, composite_id};
