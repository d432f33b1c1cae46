use packplan_types::AllocError;

use super::check;

#[test]
fn accepts_positive_inputs() {
    assert_eq!(check(&[250, 500, 1000], 251), Ok(()));
}

#[test]
fn zero_quantity_is_rejected() {
    assert_eq!(check(&[250, 500], 0), Err(AllocError::InvalidOrderQuantity));
}

#[test]
fn zero_quantity_wins_over_bad_catalog() {
    // The quantity check runs first, regardless of the catalog.
    assert_eq!(check(&[0], 0), Err(AllocError::InvalidOrderQuantity));
    assert_eq!(check(&[], 0), Err(AllocError::InvalidOrderQuantity));
}

#[test]
fn zero_size_is_rejected() {
    assert_eq!(
        check(&[1, 250, 0, 500], 251),
        Err(AllocError::InvalidPackSize)
    );
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(check(&[], 1), Err(AllocError::InvalidPackSize));
}
