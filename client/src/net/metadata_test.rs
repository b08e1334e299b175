use canvas::item::Collection;

use super::{collection_url, document_url};

#[test]
fn collection_urls() {
    assert_eq!(collection_url(Collection::Files), "/api/data/files");
    assert_eq!(collection_url(Collection::Notes), "/api/data/notes");
}

#[test]
fn document_urls() {
    assert_eq!(document_url(Collection::Files, "abc123"), "/api/data/files/abc123");
    assert_eq!(document_url(Collection::Notes, "n-1"), "/api/data/notes/n-1");
}
