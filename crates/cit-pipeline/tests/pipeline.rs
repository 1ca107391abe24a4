//! Integration tests for the citation pipeline runner.

use std::sync::Arc;

use cit_model::{
    Author, CitationDocument, ExternalMetadata, ExternalRecord, PublicationType, RawCitation,
};
use cit_pipeline::stages::{CollectionStep, DocumentIdStep, TitleStep, VolumeStep};
use cit_pipeline::{CitationPipeline, PipelineState, build_default_pipeline};

const CITATION_ID: &str = "S0100-000020200001000010005";

fn render(doc: &CitationDocument) -> String {
    doc.iter()
        .map(|field| format!("{}={}", field.name, field.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn article() -> RawCitation {
    RawCitation {
        authors: vec![
            Author::new("Silva", "J."),
            Author::new("Souza", "Maria Clara"),
        ],
        article_title: Some("Mortalidade infantil no Brasil.".to_string()),
        source: Some("Rev. Saúde".to_string()),
        publication_type: PublicationType::Article,
        publication_date: Some("2020-03".to_string()),
        volume: Some("54".to_string()),
        issue: Some("2".to_string()),
        issn: Some("0034-8910".to_string()),
        index_number: 5,
        ..RawCitation::default()
    }
    .with_citation_id(CITATION_ID)
}

fn metadata() -> Arc<ExternalMetadata> {
    let mut metadata = ExternalMetadata::new();
    metadata.insert(
        format!("{CITATION_ID}-scl"),
        ExternalRecord {
            record_type: Some("journal-article".to_string()),
            container_title: vec!["Revista de Saúde Pública".to_string()],
            issn: vec!["0034-8910".to_string(), "1518-8787".to_string()],
            alternate_issns: vec!["0034-8910".to_string()],
            alternate_journal_titles: vec!["Rev Saude Publica".to_string()],
            normalization_status: Some("exact".to_string()),
        },
    );
    Arc::new(metadata)
}

#[test]
fn default_pipeline_order() {
    let pipeline = build_default_pipeline("scl", Arc::new(ExternalMetadata::new()));
    assert_eq!(
        pipeline.step_names(),
        vec![
            "document_id",
            "document_fk",
            "collection",
            "index_number",
            "publication_type",
            "authors",
            "analytic_authors",
            "monographic_authors",
            "publication_date",
            "institutions",
            "title",
            "chapter_title",
            "source",
            "serie",
            "issn",
            "isbn",
            "issue",
            "volume",
            "edition",
            "publisher",
            "publisher_address",
            "external_metadata",
        ]
    );
}

#[test]
fn article_projection() {
    let pipeline = build_default_pipeline("scl", metadata());
    let doc = pipeline.execute(&article()).unwrap();
    insta::assert_snapshot!(render(&doc), @r"
    id=S0100-000020200001000010005-scl
    document_fk=S0100-0000202000010000-scl
    in=scl
    cit_index_number=5
    cit_type=article
    au=Silva, J
    cit_au_quality_level=2
    au=Souza, Maria Clara
    cit_au_quality_level=1
    da=2020-03
    cit_da_quality_level=2
    ti=Mortalidade infantil no Brasil
    cit_journal_title=Rev. Saúde
    cit_issn=0034-8910
    issue=2
    volume=54
    cit_journal_title_canonical=Revista de Saúde Pública
    cit_journal_issn_canonical=0034-8910
    cit_journal_issn_canonical=1518-8787
    cit_journal_issn_normalized=0034-8910
    cit_journal_title_normalized=Rev Saude Publica
    cit_normalization_status=exact
    ");
}

#[test]
fn book_chapter_projection() {
    let raw = RawCitation {
        analytic_authors: vec![Author::new("Costa", "Ana")],
        monographic_authors: vec![Author::surname_only("Ministério da Saúde")],
        chapter_title: Some("Vigilância em saúde.".to_string()),
        source: Some("Guia de vigilância.".to_string()),
        publication_type: PublicationType::Book,
        publication_date: Some("2014".to_string()),
        publisher: Some("Ministério da Saúde.".to_string()),
        publisher_address: Some("Brasília.".to_string()),
        edition: Some("2".to_string()),
        isbn: Some("978-85-334-0000-0".to_string()),
        index_number: 12,
        ..RawCitation::default()
    }
    .with_citation_id("S0100-000020200001000010012");
    let pipeline = build_default_pipeline("scl", Arc::new(ExternalMetadata::new()));
    let doc = pipeline.execute(&raw).unwrap();
    insta::assert_snapshot!(render(&doc), @r"
    id=S0100-000020200001000010012-scl
    document_fk=S0100-0000202000010000-scl
    in=scl
    cit_index_number=12
    cit_type=book
    cit_ana_au=Costa, Ana
    cit_mon_au=Ministério da Saúde
    da=2014
    cit_da_quality_level=3
    ti=Vigilância em saúde
    cit_chapter_title=Vigilância em saúde
    cit_source=Guia de vigilância
    ti=Guia de vigilância
    cit_isbn=978-85-334-0000-0
    cit_edition=2
    cit_publisher=Ministério da Saúde
    cit_publisher_address=Brasília
    ");
}

#[test]
fn state_records_executed_and_skipped_steps() {
    let pipeline = CitationPipeline::new()
        .add_step(Box::new(DocumentIdStep::new("scl")))
        .add_step(Box::new(VolumeStep))
        .add_step(Box::new(TitleStep));
    let raw = RawCitation::default().with_citation_id(CITATION_ID);
    let mut doc = CitationDocument::new();
    let mut state = PipelineState::new();
    pipeline
        .execute_with_state(&raw, &mut doc, &mut state)
        .unwrap();
    assert_eq!(state.executed_steps, vec!["document_id", "title"]);
    assert_eq!(state.skipped_steps, vec!["volume"]);
    assert_eq!(doc.len(), 1);
}

#[test]
fn failing_stage_aborts_the_run() {
    let pipeline = CitationPipeline::new()
        .add_step(Box::new(CollectionStep::new("scl")))
        .add_step(Box::new(DocumentIdStep::new("scl")))
        .add_step(Box::new(VolumeStep));
    let raw = RawCitation {
        volume: Some("1".to_string()),
        ..RawCitation::default()
    };
    let mut doc = CitationDocument::new();
    let mut state = PipelineState::new();
    let error = pipeline
        .execute_with_state(&raw, &mut doc, &mut state)
        .unwrap_err();
    assert_eq!(error.stage_name(), "document_id");
    assert_eq!(state.executed_steps, vec!["collection"]);
    assert_eq!(doc.len(), 1);
    assert!(error.to_string().contains("v880"));
}

#[test]
fn steps_can_be_inserted_and_removed() {
    let pipeline = build_default_pipeline("scl", Arc::new(ExternalMetadata::new()))
        .remove_step("external_metadata")
        .remove_step("document_fk")
        .insert_step(0, Box::new(CollectionStep::new("arg")));
    let names = pipeline.step_names();
    assert_eq!(names.len(), 21);
    assert_eq!(names[0], "collection");
    assert_eq!(names[1], "document_id");
    assert_eq!(names[2], "collection");
    assert!(!names.contains(&"external_metadata"));
    assert!(!pipeline.is_empty());
}

#[test]
fn pipeline_is_shareable_across_threads() {
    let pipeline = Arc::new(build_default_pipeline("scl", metadata()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || pipeline.execute(&article()).unwrap())
        })
        .collect();
    let expected = pipeline.execute(&article()).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
