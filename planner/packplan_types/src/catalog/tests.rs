use pretty_assertions::assert_eq;

use super::PackCatalog;

#[test]
fn sorts_descending() {
    let catalog = PackCatalog::new(&[250, 5000, 1000, 500, 2000]);
    assert_eq!(catalog.sizes(), &[5000, 2000, 1000, 500, 250]);
}

#[test]
fn duplicates_collapse() {
    let catalog = PackCatalog::new(&[11, 15, 11, 15, 11]);
    assert_eq!(catalog.sizes(), &[15, 11]);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn size_at_follows_rank() {
    let catalog = PackCatalog::new(&[11, 15, 17]);
    assert_eq!(catalog.size_at(0), 17);
    assert_eq!(catalog.size_at(2), 11);
}

#[test]
fn zero_counts_parallel_to_sizes() {
    let catalog = PackCatalog::new(&[23, 31, 53]);
    let counts = catalog.zero_counts();
    assert_eq!(counts.as_slice(), &[0, 0, 0]);
}

#[test]
fn total_sums_size_times_count() {
    let catalog = PackCatalog::new(&[250, 500, 1000, 2000, 5000]);
    // Ranks: 5000, 2000, 1000, 500, 250.
    assert_eq!(catalog.total(&[2, 1, 0, 0, 1]), 12250);
    assert_eq!(catalog.total(&[0, 0, 0, 0, 0]), 0);
}

#[test]
fn empty_catalog_is_empty() {
    let catalog = PackCatalog::new(&[]);
    assert!(catalog.is_empty());
    assert_eq!(catalog.zero_counts().len(), 0);
}
