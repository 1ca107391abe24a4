//! Property tests for stage ordering and emission laws.

use std::sync::Arc;

use cit_model::{
    Author, CitationDocument, ExternalMetadata, ExternalRecord, FieldName, PublicationType,
    RawCitation,
};
use cit_pipeline::stages::{AuthorsStep, ExternalMetadataStep, PublicationDateStep, SourceStep};
use cit_pipeline::{CitationStage, PipelineState, build_default_pipeline};
use cit_sanitize::{author_name_quality, remove_period};
use proptest::prelude::*;

const CITATION_ID: &str = "S0100-000020200001000010005";

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(".".to_string()),
        "[A-Za-zÀ-ú .,'-]{1,24}",
        "[0-9 -]{1,10}",
    ]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(text())
}

fn author() -> impl Strategy<Value = Author> {
    (optional_text(), optional_text()).prop_map(|(surname, given_names)| Author {
        surname,
        given_names,
    })
}

fn publication_type() -> impl Strategy<Value = PublicationType> {
    prop_oneof![
        Just(PublicationType::Article),
        Just(PublicationType::Book),
        Just(PublicationType::Thesis),
        Just(PublicationType::Link),
        Just(PublicationType::Undefined),
    ]
}

prop_compose! {
    fn raw_citation()(
        authors in prop::collection::vec(author(), 0..4),
        analytic_authors in prop::collection::vec(author(), 0..3),
        institutions in prop::collection::vec(text(), 0..3),
        article_title in optional_text(),
        chapter_title in optional_text(),
        source in optional_text(),
        publication_type in publication_type(),
        publication_date in optional_text(),
        volume in optional_text(),
        publisher in optional_text(),
        index_number in 0u32..500,
    ) -> RawCitation {
        RawCitation {
            authors,
            analytic_authors,
            institutions,
            article_title,
            chapter_title,
            source,
            publication_type,
            publication_date,
            volume,
            publisher,
            index_number,
            ..RawCitation::default()
        }
        .with_citation_id(CITATION_ID)
    }
}

fn list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z0-9-]{1,9}", 0..3)
}

prop_compose! {
    fn journal_record()(
        container_title in list(),
        issn in list(),
        alternate_issns in list(),
        alternate_journal_titles in list(),
    ) -> ExternalRecord {
        ExternalRecord {
            record_type: Some("journal-article".to_string()),
            container_title,
            issn,
            alternate_issns,
            alternate_journal_titles,
            normalization_status: Some("exact".to_string()),
        }
    }
}

fn names(doc: &CitationDocument) -> Vec<FieldName> {
    doc.iter().map(|field| field.name).collect()
}

proptest! {
    #[test]
    fn pipeline_output_is_deterministic(raw in raw_citation()) {
        let pipeline = build_default_pipeline("scl", Arc::new(ExternalMetadata::new()));
        let first = pipeline.execute(&raw).unwrap();
        let second = pipeline.execute(&raw).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn skipped_stages_leave_the_document_unchanged(raw in raw_citation()) {
        let pipeline = build_default_pipeline("scl", Arc::new(ExternalMetadata::new()));
        let mut prefix = CitationDocument::new();
        prefix.push(FieldName::Title, "prefix");
        let mut doc = prefix.clone();
        let mut state = PipelineState::new();
        pipeline.execute_with_state(&raw, &mut doc, &mut state).unwrap();
        prop_assert_eq!(&doc.fields()[..1], prefix.fields());
        if raw.authors.is_empty() {
            prop_assert!(state.skipped_steps.iter().any(|s| s == "authors"));
            prop_assert!(!doc.contains(FieldName::Author));
        }
        if raw.volume.as_deref().is_none_or(str::is_empty) {
            prop_assert!(!doc.contains(FieldName::Volume));
        }
        if raw.institutions.is_empty() {
            prop_assert!(!doc.contains(FieldName::Institution));
        }
    }

    #[test]
    fn author_quality_immediately_follows_its_author(authors in prop::collection::vec(author(), 1..6)) {
        let raw = RawCitation { authors, ..RawCitation::default() };
        let mut doc = CitationDocument::new();
        AuthorsStep.execute(&raw, &mut doc).unwrap();
        let fields = doc.fields();
        for (index, field) in fields.iter().enumerate() {
            if field.name == FieldName::AuthorQualityLevel {
                prop_assert!(index > 0);
                prop_assert_eq!(fields[index - 1].name, FieldName::Author);
            }
            if field.name == FieldName::Author {
                let quality = author_name_quality(&field.text);
                let next = fields.get(index + 1);
                prop_assert_eq!(
                    quality.map(|level| level.to_string()),
                    next.filter(|f| f.name == FieldName::AuthorQualityLevel)
                        .map(|f| f.text.clone())
                );
            }
        }
    }

    #[test]
    fn date_quality_immediately_follows_da(date in text()) {
        let raw = RawCitation { publication_date: Some(date), ..RawCitation::default() };
        let mut doc = CitationDocument::new();
        if !PublicationDateStep.should_skip(&raw, &doc) {
            PublicationDateStep.execute(&raw, &mut doc).unwrap();
        }
        let names = names(&doc);
        if let Some(index) = names.iter().position(|n| *n == FieldName::DateQualityLevel) {
            prop_assert_eq!(index, 1);
            prop_assert_eq!(names[0], FieldName::PublicationDate);
        }
        prop_assert!(names.len() <= 2);
    }

    #[test]
    fn normalization_status_iff_journal_fields(record in journal_record()) {
        let mut metadata = ExternalMetadata::new();
        metadata.insert(format!("{CITATION_ID}-scl"), record);
        let stage = ExternalMetadataStep::new(Arc::new(metadata), "scl");
        let raw = RawCitation::default().with_citation_id(CITATION_ID);
        let mut doc = CitationDocument::new();
        stage.execute(&raw, &mut doc).unwrap();
        let has_journal_field = [
            FieldName::JournalTitleCanonical,
            FieldName::JournalIssnCanonical,
            FieldName::JournalIssnNormalized,
            FieldName::JournalTitleNormalized,
        ]
        .into_iter()
        .any(|name| doc.contains(name));
        prop_assert_eq!(doc.contains(FieldName::NormalizationStatus), has_journal_field);
        prop_assert!(doc.values(FieldName::NormalizationStatus).len() <= 1);
        prop_assert!(doc.values(FieldName::JournalTitleCanonical).len() <= 1);
    }

    #[test]
    fn book_source_is_also_title(source in "[A-Za-z .]{1,20}") {
        let raw = RawCitation {
            source: Some(source.clone()),
            publication_type: PublicationType::Book,
            ..RawCitation::default()
        };
        let mut doc = CitationDocument::new();
        SourceStep.execute(&raw, &mut doc).unwrap();
        let cleaned = remove_period(&source);
        if cleaned.is_empty() {
            prop_assert!(doc.is_empty());
        } else {
            prop_assert_eq!(doc.values(FieldName::Source), vec![cleaned.as_str()]);
            prop_assert_eq!(doc.values(FieldName::Title), vec![cleaned.as_str()]);
        }
    }
}
