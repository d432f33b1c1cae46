//! The variation search.
//!
//! The greedy estimate commits to one pack size; this stage explores
//! mixed-size combinations by repeatedly "giving back" one pack of the
//! largest usable size and re-spreading the freed items across the smaller
//! sizes. Every full cover found along the way is recorded as a candidate.
//!
//! # State
//!
//! - `current`: the working count vector, shared across rounds (never
//!   reset). Recording a candidate clones it at that exact point; later
//!   comparisons are against a recorded snapshot, not the live state.
//! - `base`: a cursor into the immutable descending size array marking the
//!   first usable rank. Retiring the largest usable size advances the
//!   cursor; the array itself never changes, so earlier snapshots stay
//!   valid.
//! - `items`: the running remainder, carried across rounds.
//!
//! # Termination
//!
//! Each round either advances `base`, stops, or decrements the count at
//! `base` (quotients only ever accumulate at ranks past `base`). The count
//! at `base` therefore reaches zero after finitely many rounds, which
//! retires the rank; once one usable size remains the search stops. An
//! exact cover ends it earlier.

use packplan_types::{PackCatalog, PackCounts};

/// Explore mixed-size candidates for `quantity`, seeded with the greedy
/// estimate. Every returned candidate is feasible (total >= `quantity`).
pub(crate) fn variations(
    catalog: &PackCatalog,
    quantity: u64,
    initial: PackCounts,
) -> Vec<PackCounts> {
    let sizes = catalog.sizes();
    let len = sizes.len();

    let mut recorded = vec![initial];
    let mut current = catalog.zero_counts();
    let mut items = quantity;
    let mut base = 0;
    let mut started = false;
    let mut searching = true;

    while searching {
        'scan: for rank in base..len {
            let size = sizes[rank];
            let last = rank == len - 1;

            if rank == base && started {
                if current[rank] == 0 && !last {
                    // The largest usable size is unused; retire it.
                    base += 1;
                    break 'scan;
                }
                if last {
                    // One usable size left: no further trades possible.
                    searching = false;
                    break 'scan;
                }
                // Give one pack back and re-spread the freed items below.
                current[rank] -= 1;
                items += size;
                continue;
            }

            let quotient = items / size;
            let remainder = items % size;

            current[rank] += quotient;
            started = true;

            if remainder == 0 {
                // Full cover: snapshot it.
                let snapshot = current.clone();
                let total = catalog.total(&snapshot);
                tracing::trace!(total, "variation recorded");
                recorded.push(snapshot);
                if total == quantity {
                    searching = false;
                }
                break 'scan;
            }

            items = remainder;

            if last {
                // Terminal size: test absorbing the remainder with one
                // extra pack. Keep it only if it beats the most recently
                // recorded candidate; otherwise carry the remainder into
                // the next give-back round.
                let mut snapshot = current.clone();
                snapshot[rank] += 1;
                let total = catalog.total(&snapshot);
                // `recorded` is seeded with the estimate, never empty.
                let benchmark = catalog.total(&recorded[recorded.len() - 1]);
                if total >= benchmark {
                    continue;
                }
                tracing::trace!(total, "variation recorded (absorbed remainder)");
                recorded.push(snapshot);
                if total == quantity {
                    searching = false;
                }
                break 'scan;
            }
        }
    }

    recorded
}
