//! Integration tests for lineage-store
//!
//! These tests verify import, lookup and persistence of records.

use lineage_domain::{RawFact, Record, RecordStore, SourceLookup};
use lineage_store::{MemoryStore, SqliteStore};

const FILE: &str = "\
0 HEAD
1 SOUR Lineage
0 @I1@ INDI
1 NAME John /Smith/
1 BIRT
2 DATE 12 MAR 1851
2 SOUR @S1@
3 PAGE 45
0 @F1@ FAM
1 HUSB @I1@
0 @S1@ SOUR
1 AUTH Smith, J.
1 TITL Parish Records
2 CONT (second series)
0 TRLR
";

#[test]
fn test_sqlite_import_and_lookup_round_trip() {
    let mut store = SqliteStore::in_memory().unwrap();
    assert_eq!(store.import_gedcom(FILE).unwrap(), 3);
    assert_eq!(store.count().unwrap(), 3);

    let source = store.lookup_source("S1").expect("source should be stored");
    assert!(source.is_source());
    assert_eq!(source.facts.len(), 2);
    assert_eq!(
        source.first_fact("TITL").and_then(RawFact::value).as_deref(),
        Some("Parish Records\n(second series)")
    );

    let person = store.get_record("I1").unwrap().unwrap();
    assert_eq!(person.facts.len(), 2);
    assert_eq!(person.facts[1].citations(), vec!["2 SOUR @S1@\n3 PAGE 45"]);
}

#[test]
fn test_sqlite_and_memory_agree() {
    let mut sqlite = SqliteStore::in_memory().unwrap();
    sqlite.import_gedcom(FILE).unwrap();
    let memory = MemoryStore::from_gedcom(FILE);

    for xref in ["I1", "F1", "S1"] {
        assert_eq!(sqlite.lookup_source(xref), memory.lookup_source(xref));
    }
    assert!(sqlite.lookup_source("S404").is_none());
    assert!(memory.lookup_source("S404").is_none());
}

#[test]
fn test_put_record_replaces() {
    let mut store = SqliteStore::in_memory().unwrap();
    store
        .put_record(Record::new("S1", "SOUR").with_fact(RawFact::new("TITL", "1 TITL Old", 1)))
        .unwrap();
    store
        .put_record(Record::new("S1", "SOUR").with_fact(RawFact::new("TITL", "1 TITL New", 1)))
        .unwrap();

    assert_eq!(store.count().unwrap(), 1);
    let record = store.get_record("S1").unwrap().unwrap();
    assert_eq!(record.facts[0].value().as_deref(), Some("New"));
}

#[test]
fn test_xrefs_with_tag() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.import_gedcom(FILE).unwrap();

    assert_eq!(store.xrefs_with_tag("INDI").unwrap(), vec!["I1"]);
    assert_eq!(store.xrefs_with_tag("SOUR").unwrap(), vec!["S1"]);
    assert!(store.xrefs_with_tag("REPO").unwrap().is_empty());
}

#[test]
fn test_persistence_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store.import_gedcom(FILE).unwrap();
    }

    let reopened = SqliteStore::new(&path).unwrap();
    assert_eq!(reopened.count().unwrap(), 3);
    assert!(reopened.lookup_source("S1").is_some());
}
