use pretty_assertions::assert_eq;

use super::PackDistribution;
use crate::catalog::PackCatalog;

fn fixture() -> PackDistribution {
    // Ranks (descending): 5000, 2000, 1000, 500, 250.
    let catalog = PackCatalog::new(&[250, 500, 1000, 2000, 5000]);
    PackDistribution::from_counts(&catalog, &[2, 1, 0, 0, 1])
}

#[test]
fn entries_ascend_and_cover_the_catalog() {
    let dist = fixture();
    let entries: Vec<_> = dist.iter().collect();
    assert_eq!(
        entries,
        vec![(250, 1), (500, 0), (1000, 0), (2000, 1), (5000, 2)]
    );
    assert_eq!(dist.len(), 5);
}

#[test]
fn total_and_pack_count() {
    let dist = fixture();
    assert_eq!(dist.total(), 12250);
    assert_eq!(dist.pack_count(), 4);
}

#[test]
fn count_looks_up_by_size() {
    let dist = fixture();
    assert_eq!(dist.count(250), Some(1));
    assert_eq!(dist.count(1000), Some(0));
    assert_eq!(dist.count(750), None);
}

#[test]
fn zero_count_sizes_are_present() {
    let catalog = PackCatalog::new(&[11, 15]);
    let dist = PackDistribution::from_counts(&catalog, &[0, 9]);
    assert_eq!(dist.count(15), Some(0));
    assert_eq!(dist.count(11), Some(9));
}

#[test]
fn display_renders_one_line_per_entry() {
    let catalog = PackCatalog::new(&[11, 15]);
    let dist = PackDistribution::from_counts(&catalog, &[1, 9]);
    assert_eq!(dist.to_string(), "11 x 9\n15 x 1");
}
