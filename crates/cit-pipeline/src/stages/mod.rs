//! Concrete citation stages, one per projected attribute.
//!
//! | Stage | Fields |
//! |-------|--------|
//! | `DocumentIdStep` | `id` |
//! | `DocumentFkStep` | `document_fk` |
//! | `CollectionStep` | `in` |
//! | `IndexNumberStep` | `cit_index_number` |
//! | `PublicationTypeStep` | `cit_type` |
//! | `AuthorsStep` | `au`, `cit_au_quality_level` |
//! | `AnalyticAuthorsStep` | `cit_ana_au` |
//! | `MonographicAuthorsStep` | `cit_mon_au` |
//! | `PublicationDateStep` | `da`, `cit_da_quality_level` |
//! | `InstitutionsStep` | `cit_inst` |
//! | `TitleStep` | `ti` |
//! | `ChapterTitleStep` | `ti`, `cit_chapter_title` |
//! | `SourceStep` | `cit_journal_title` or `cit_source`, `ti` for books |
//! | `SerieStep` | `cit_serie` |
//! | `IssnStep` | `cit_issn` |
//! | `IsbnStep` | `cit_isbn` |
//! | `IssueStep` | `issue` |
//! | `VolumeStep` | `volume` |
//! | `EditionStep` | `cit_edition` |
//! | `PublisherStep` | `cit_publisher` |
//! | `PublisherAddressStep` | `cit_publisher_address` |
//! | `ExternalMetadataStep` | `cit_journal_*_canonical`, `cit_journal_*_normalized`, `cit_normalization_status` |

mod date;
mod descriptive;
mod external;
mod identifiers;
mod names;
mod title;

pub use date::PublicationDateStep;
pub use descriptive::{
    EditionStep, IndexNumberStep, IsbnStep, IssnStep, IssueStep, PublicationTypeStep,
    PublisherAddressStep, PublisherStep, SerieStep, VolumeStep,
};
pub use external::ExternalMetadataStep;
pub use identifiers::{CollectionStep, DocumentFkStep, DocumentIdStep, REFERENCE_SUFFIX_LEN};
pub use names::{AnalyticAuthorsStep, AuthorsStep, InstitutionsStep, MonographicAuthorsStep};
pub use title::{ChapterTitleStep, SourceStep, TitleStep};
