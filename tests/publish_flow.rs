//! End-to-end flow: edit the private document, publish it under a slug,
//! then reopen the session through the shared link and render read-only.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use portfolio_studio::config::adapter::outgoing::in_memory_storage::InMemoryStorage;
use portfolio_studio::config::{seed, TemplateVariant};
use portfolio_studio::mutation::Path;
use portfolio_studio::session::PortfolioSession;
use portfolio_studio::shared::telemetry::init_tracing;

fn base() -> Url {
    Url::parse("https://folio.example").unwrap()
}

#[test]
fn test_edit_publish_then_view_round_trip() {
    init_tracing();

    let storage = Arc::new(InMemoryStorage::new());

    // Edit session: customize the document.
    let mut editor = PortfolioSession::open(
        Arc::clone(&storage),
        base(),
        &base(),
        TemplateVariant::Development,
    )
    .unwrap();

    editor
        .update_field(&Path::parse("hero.name"), json!("Asad"))
        .unwrap();
    editor
        .update_field(
            &Path::parse("skills"),
            json!([{ "name": "Design", "proficiency": 80, "category": "Design" }]),
        )
        .unwrap();

    let link = editor.generate_shareable_link(Some("asad")).unwrap();
    assert_eq!(link.slug, "asad");
    let published = editor.document().clone();

    // Later edits must not leak into the published snapshot.
    editor
        .update_field(&Path::parse("hero.name"), json!("Renamed After Publish"))
        .unwrap();

    // View session opened through the generated link.
    let viewer = PortfolioSession::open(
        Arc::clone(&storage),
        base(),
        &link.url,
        TemplateVariant::Graphic,
    )
    .unwrap();

    assert!(viewer.is_view_mode());
    assert!(!viewer.is_loading());
    assert_eq!(viewer.load_warning(), None);
    assert_eq!(viewer.document(), &published);
    assert_eq!(viewer.document().hero.name, "Asad");
    // The snapshot carries the template it was published with, not the
    // variant the viewer asked for.
    assert_eq!(viewer.template_variant(), TemplateVariant::Development);
}

#[test]
fn test_view_with_unknown_slug_renders_seed_with_warning() {
    init_tracing();

    let storage = Arc::new(InMemoryStorage::new());
    let location = Url::parse("https://folio.example/?share=doesnotexist").unwrap();

    let viewer =
        PortfolioSession::open(storage, base(), &location, TemplateVariant::Graphic).unwrap();

    assert!(viewer.is_view_mode());
    assert_eq!(viewer.document(), &seed());
    assert!(viewer.load_warning().unwrap().contains("doesnotexist"));
}

#[test]
fn test_legacy_path_form_link_still_resolves() {
    let storage = Arc::new(InMemoryStorage::new());

    let editor = PortfolioSession::open(
        Arc::clone(&storage),
        base(),
        &base(),
        TemplateVariant::Graphic,
    )
    .unwrap();
    editor.generate_shareable_link(Some("asad")).unwrap();

    let legacy = Url::parse("https://folio.example/portfolio/asad").unwrap();
    let viewer =
        PortfolioSession::open(storage, base(), &legacy, TemplateVariant::Graphic).unwrap();

    assert!(viewer.is_view_mode());
    assert_eq!(viewer.document().hero.name, seed().hero.name);
    assert_eq!(viewer.load_warning(), None);
}
