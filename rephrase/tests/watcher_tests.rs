// rephrase/tests/watcher_tests.rs
//! Watcher integration tests against the in-memory document model: the
//! initial full pass, idempotent reprocessing, dynamically added content,
//! and lifecycle semantics.

use anyhow::Result;

use rephrase::document::Document;
use rephrase::watcher::DocumentWatcher;
use rephrase_core::{PhraseEngine, PhraseTable, TextChunk, TextChunkSource};

fn watcher() -> DocumentWatcher {
    let engine = PhraseEngine::new(PhraseTable::load_default_rules().unwrap()).unwrap();
    DocumentWatcher::new(Box::new(engine))
}

/// A page-like tree: two paragraphs of prose and a script block that must
/// never be touched.
fn sample_document() -> Document {
    let mut doc = Document::new();
    let p1 = doc.add_element(doc.root(), "p");
    doc.add_text(p1, "The economic migrants arrived at the migrant hotel.");
    let p2 = doc.add_element(doc.root(), "p");
    doc.add_text(p2, "Nothing notable here.");
    let script = doc.add_element(doc.root(), "script");
    doc.add_text(script, "var x = 'migrant hotel';");
    doc
}

#[test_log::test]
fn test_full_pass_materializes_annotations() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();

    let stats = watcher.start(&mut doc)?;
    assert_eq!(stats.chunks_seen, 2); // script content is never offered
    assert_eq!(stats.chunks_transformed, 1);
    assert_eq!(stats.replacements, 2);

    assert_eq!(
        doc.visible_text(),
        "The people seeking work opportunities arrived at the temporary accommodation.Nothing notable here."
    );

    let spans = doc.replaced_spans();
    assert_eq!(spans.len(), 2);
    let first = doc.element_of(spans[0]).unwrap();
    assert_eq!(first.original.as_deref(), Some("economic migrants"));
    assert_eq!(first.tooltip.as_deref(), Some("Replaced Phrase: economic migrants"));
    Ok(())
}

#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();

    watcher.start(&mut doc)?;
    let after_first = doc.visible_text();

    let stats = watcher.start(&mut doc)?;
    assert_eq!(stats.chunks_transformed, 0);
    assert_eq!(stats.replacements, 0);
    assert_eq!(doc.visible_text(), after_first);
    assert_eq!(doc.replaced_spans().len(), 2);
    Ok(())
}

#[test]
fn test_notify_added_processes_dynamic_content() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();
    watcher.start(&mut doc)?;

    // Content inserted after the initial pass, as by an async load.
    let p3 = doc.add_element(doc.root(), "p");
    let late_text = doc.add_text(p3, "Refugees moved in.");

    let chunk = TextChunk::new(late_text.to_string(), "Refugees moved in.");
    let materialized = watcher.notify_added(&mut doc, &chunk)?;
    assert!(materialized);
    assert!(doc.visible_text().ends_with("People seeking safety moved in."));
    Ok(())
}

#[test]
fn test_notify_added_deduplicates_chunks() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();
    watcher.start(&mut doc)?;

    let p3 = doc.add_element(doc.root(), "p");
    let late_text = doc.add_text(p3, "Refugees moved in.");
    let chunk = TextChunk::new(late_text.to_string(), "Refugees moved in.");

    assert!(watcher.notify_added(&mut doc, &chunk)?);
    // Mutation observers may deliver the same node more than once.
    assert!(!watcher.notify_added(&mut doc, &chunk)?);
    assert_eq!(doc.replaced_spans().len(), 3);
    Ok(())
}

#[test]
fn test_notify_added_without_matches_leaves_document_alone() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();
    watcher.start(&mut doc)?;

    let p3 = doc.add_element(doc.root(), "p");
    let late_text = doc.add_text(p3, "Plain words only.");
    let chunk = TextChunk::new(late_text.to_string(), "Plain words only.");

    assert!(!watcher.notify_added(&mut doc, &chunk)?);
    assert!(doc.visible_text().contains("Plain words only."));
    Ok(())
}

#[test]
fn test_stopped_watcher_ignores_notifications() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();
    watcher.start(&mut doc)?;
    watcher.stop();
    assert!(!watcher.is_active());

    let p3 = doc.add_element(doc.root(), "p");
    let late_text = doc.add_text(p3, "Refugees moved in.");
    let chunk = TextChunk::new(late_text.to_string(), "Refugees moved in.");

    assert!(!watcher.notify_added(&mut doc, &chunk)?);
    assert!(doc.visible_text().contains("Refugees moved in."));
    assert_eq!(doc.replaced_spans().len(), 2);
    Ok(())
}

#[test]
fn test_transformed_chunks_are_not_reoffered() -> Result<()> {
    let mut doc = sample_document();
    let mut watcher = watcher();
    watcher.start(&mut doc)?;

    // Whatever the source still offers is leftover literal text with no
    // targets; none of it sits inside a replaced span.
    for chunk in doc.chunks().collect::<Vec<_>>() {
        assert!(!chunk.text.contains("economic migrants"));
        assert!(!chunk.text.contains("migrant hotel"));
    }
    Ok(())
}
