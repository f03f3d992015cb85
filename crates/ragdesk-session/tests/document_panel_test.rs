mod helpers;

use helpers::{doc, org, FakeBackend};
use ragdesk_session::{DocumentPanel, OrgStore};
use std::sync::Arc;

struct Fixture {
    backend: Arc<FakeBackend>,
    orgs: Arc<OrgStore>,
    panel: DocumentPanel,
}

fn fixture_with_selection() -> Fixture {
    let backend = Arc::new(FakeBackend::new());
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    orgs.select(org(1, "acme"));
    let panel = DocumentPanel::new(backend.clone(), orgs.clone());
    Fixture {
        backend,
        orgs,
        panel,
    }
}

#[tokio::test]
async fn load_documents_replaces_list() {
    let mut f = fixture_with_selection();
    f.backend
        .seed_documents(vec![doc(1, 1, "alpha"), doc(2, 1, "beta")]);

    f.panel.load_documents().await;

    assert_eq!(f.panel.documents().len(), 2);
    assert!(f.panel.error().is_none());
    assert!(!f.panel.is_loading());
}

#[tokio::test]
async fn load_documents_without_selection_is_a_no_op() {
    let backend = Arc::new(FakeBackend::new());
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    let mut panel = DocumentPanel::new(backend.clone(), orgs);

    panel.load_documents().await;

    assert_eq!(backend.call_count(), 0);
    assert!(panel.documents().is_empty());
}

#[tokio::test]
async fn load_documents_failure_sets_banner_and_keeps_list() {
    let mut f = fixture_with_selection();
    f.backend.seed_documents(vec![doc(1, 1, "alpha")]);
    f.panel.load_documents().await;

    f.backend.fail("list_documents");
    f.panel.load_documents().await;

    assert_eq!(f.panel.error(), Some("Failed to load documents"));
    assert_eq!(f.panel.documents().len(), 1);
    assert!(!f.panel.is_loading());
}

#[tokio::test]
async fn load_documents_clears_previous_error_up_front() {
    let mut f = fixture_with_selection();
    f.backend.fail("list_documents");
    f.panel.load_documents().await;
    assert!(f.panel.error().is_some());

    f.backend.failing.lock().unwrap().clear();
    f.panel.load_documents().await;

    assert!(f.panel.error().is_none());
}

#[tokio::test]
async fn stale_document_load_is_discarded_after_org_switch() {
    let backend = Arc::new(FakeBackend::new());
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    orgs.select(org(1, "acme"));
    backend.seed_documents(vec![doc(1, 1, "belongs to acme")]);

    // While the fetch for org 1 is in flight, the user switches to org 2.
    let orgs_in_hook = orgs.clone();
    *backend.on_list_documents.lock().unwrap() = Some(Box::new(move || {
        orgs_in_hook.select(org(2, "globex"));
    }));

    let mut panel = DocumentPanel::new(backend.clone(), orgs.clone());
    panel.load_documents().await;

    // The response resolved after the switch and must not land.
    assert!(panel.documents().is_empty());
}

#[tokio::test]
async fn upload_prepends_backend_echo() {
    let mut f = fixture_with_selection();
    f.backend
        .seed_documents(vec![doc(1, 1, "alpha"), doc(2, 1, "beta")]);
    f.panel.load_documents().await;

    let ok = f.panel.upload("gamma", "fresh content").await;

    assert!(ok);
    let titles: Vec<&str> = f.panel.documents().iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["gamma", "alpha", "beta"]);
}

#[tokio::test]
async fn upload_allows_empty_content() {
    let mut f = fixture_with_selection();

    assert!(f.panel.upload("empty", "").await);
    assert_eq!(f.panel.documents()[0].content, "");
}

#[tokio::test]
async fn upload_failure_sets_banner_and_reports_failure() {
    let mut f = fixture_with_selection();
    f.backend.fail("upload_document");

    let ok = f.panel.upload("doomed", "content").await;

    // `false` tells the view to keep its form populated for a retry.
    assert!(!ok);
    assert!(f.panel.documents().is_empty());
    assert_eq!(f.panel.error(), Some("Failed to upload document"));
}

#[tokio::test]
async fn upload_without_selection_is_a_no_op() {
    let backend = Arc::new(FakeBackend::new());
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    let mut panel = DocumentPanel::new(backend.clone(), orgs);

    assert!(!panel.upload("title", "content").await);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn delete_removes_entry_only_after_success() {
    let mut f = fixture_with_selection();
    f.backend
        .seed_documents(vec![doc(1, 1, "alpha"), doc(2, 1, "beta")]);
    f.panel.load_documents().await;

    f.panel.delete(1).await;

    assert_eq!(f.panel.documents().len(), 1);
    assert_eq!(f.panel.documents()[0].id, 2);
}

#[tokio::test]
async fn delete_failure_keeps_entry() {
    let mut f = fixture_with_selection();
    f.backend.seed_documents(vec![doc(1, 1, "alpha")]);
    f.panel.load_documents().await;
    f.backend.fail("delete_document");

    f.panel.delete(1).await;

    assert_eq!(f.panel.documents().len(), 1);
    assert_eq!(f.panel.error(), Some("Failed to delete document"));
}

#[tokio::test]
async fn update_replaces_entry_in_place() {
    let mut f = fixture_with_selection();
    f.backend
        .seed_documents(vec![doc(1, 1, "alpha"), doc(2, 1, "beta")]);
    f.panel.load_documents().await;

    let ok = f.panel.update(2, Some("beta v2"), None).await;

    assert!(ok);
    assert_eq!(f.panel.documents()[1].title, "beta v2");
    assert_eq!(f.panel.documents()[0].title, "alpha");
}

#[tokio::test]
async fn update_with_no_changes_issues_no_request() {
    let mut f = fixture_with_selection();

    assert!(!f.panel.update(1, None, None).await);
    assert_eq!(f.backend.call_count(), 0);
}

#[tokio::test]
async fn search_replaces_results_without_touching_documents() {
    let mut f = fixture_with_selection();
    f.backend.seed_documents(vec![doc(1, 1, "alpha")]);
    f.panel.load_documents().await;
    f.backend
        .seed_search_hits(vec![doc(2, 1, "hit one"), doc(3, 1, "hit two")]);

    f.panel.search("relevant things").await;

    assert_eq!(f.panel.search_results().len(), 2);
    assert_eq!(f.panel.documents().len(), 1);
}

#[tokio::test]
async fn search_blank_query_is_a_silent_no_op() {
    let mut f = fixture_with_selection();

    f.panel.search("").await;
    f.panel.search("   ").await;

    assert_eq!(f.backend.call_count(), 0);
    assert!(f.panel.search_results().is_empty());
    assert!(f.panel.error().is_none());
}

#[tokio::test]
async fn search_without_selection_is_a_no_op() {
    let backend = Arc::new(FakeBackend::new());
    let orgs = Arc::new(OrgStore::new(backend.clone()));
    let mut panel = DocumentPanel::new(backend.clone(), orgs);

    panel.search("query").await;

    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn search_failure_sets_banner_and_keeps_old_results() {
    let mut f = fixture_with_selection();
    f.backend.seed_search_hits(vec![doc(2, 1, "old hit")]);
    f.panel.search("first").await;

    f.backend.fail("search_documents");
    f.panel.search("second").await;

    assert_eq!(f.panel.error(), Some("Search failed"));
    assert_eq!(f.panel.search_results().len(), 1);
}

#[tokio::test]
async fn switching_org_reloads_rather_than_relabels() {
    let mut f = fixture_with_selection();
    f.backend.seed_documents(vec![doc(1, 1, "acme doc")]);
    f.panel.load_documents().await;

    // Switch and reload: the panel shows the new org's documents, it does
    // not reinterpret the old list.
    f.orgs.select(org(2, "globex"));
    f.backend.seed_documents(vec![doc(9, 2, "globex doc")]);
    f.panel.load_documents().await;

    assert_eq!(f.panel.documents().len(), 1);
    assert_eq!(f.panel.documents()[0].org_id, 2);
}
