//! Stress and property tests for the sorted index.
//!
//! These tests verify:
//! 1. Search invariants hold on large random ordered sequences
//! 2. Insertion keeps sequences ordered under heavy load
//! 3. Identical input produces an identical digest
//! 4. Search and insert stay fast as the index grows
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Run all stress tests (release mode recommended)
//! cargo test --release --test stress_test -- --nocapture
//!
//! # Run specific test
//! cargo test --release --test stress_test stress_50k_inserts -- --nocapture
//! ```

use std::time::Instant;

use sorted_index::{
    classify, insert_sorted, insert_sorted_with, locate_leftmost, locate_leftmost_in,
    locate_rightmost, locate_rightmost_in, SortedIndex, TieBreak,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of keys for the insertion stress test
const STRESS_INSERT_COUNT: usize = 50_000;

/// Number of random queries per property check
const QUERY_COUNT: usize = 10_000;

/// Keys are drawn from a small range so duplicates are common
const KEY_RANGE: u64 = 1_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic random keys. Same seed = same keys.
fn generate_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..KEY_RANGE)).collect()
}

/// Generate a deterministic ordered sequence.
fn generate_sorted(count: usize, seed: u64) -> Vec<u64> {
    let mut keys = generate_keys(count, seed);
    keys.sort_unstable();
    keys
}

fn is_ordered(seq: &[u64]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Build an index by inserting keys one at a time and return its digest root.
fn run_deterministic_sequence(seed: u64, count: usize) -> [u8; 32] {
    let mut index = SortedIndex::with_capacity(count);
    for key in generate_keys(count, seed) {
        index.insert(key);
    }
    index.digest().expect("u64 keys always encode").root
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

/// Leftmost never exceeds rightmost, and both split the sequence correctly.
#[test]
fn property_locate_partitions() {
    let seq = generate_sorted(5_000, 7);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..QUERY_COUNT {
        // Extend past the key range on both sides to hit the ends
        let key = rng.gen_range(0..KEY_RANGE + 10).saturating_sub(5);
        let left = locate_leftmost(&seq, &key);
        let right = locate_rightmost(&seq, &key);

        assert!(left <= right, "key {}: {} > {}", key, left, right);
        assert!(seq[..left].iter().all(|&k| k < key));
        assert!(seq[left..].iter().all(|&k| k >= key));
        assert!(seq[..right].iter().all(|&k| k <= key));
        assert!(seq[right..].iter().all(|&k| k > key));

        let equal = seq.iter().filter(|&&k| k == key).count();
        assert_eq!(right - left, equal);
    }
}

/// For absent keys both insertion points coincide.
#[test]
fn property_absent_keys_agree() {
    // Even keys only
    let seq: Vec<u64> = generate_sorted(2_000, 11).into_iter().map(|k| k * 2).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    for _ in 0..QUERY_COUNT {
        let key = rng.gen_range(0..KEY_RANGE) * 2 + 1;
        assert_eq!(locate_leftmost(&seq, &key), locate_rightmost(&seq, &key));
    }
}

/// Searching never changes the sequence.
#[test]
fn property_search_is_read_only() {
    let seq = generate_sorted(1_000, 3);
    let snapshot = seq.clone();

    for key in 0..KEY_RANGE {
        locate_leftmost(&seq, &key);
        locate_rightmost(&seq, &key);
        classify(&seq, &key);
    }

    assert_eq!(seq, snapshot);
}

/// Insertion keeps order and grows the sequence by one.
#[test]
fn property_insert_preserves_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut seq = generate_sorted(500, 20);

    for _ in 0..2_000 {
        let key = rng.gen_range(0..KEY_RANGE);
        let tie_break = if rng.gen_bool(0.5) {
            TieBreak::Leftmost
        } else {
            TieBreak::Rightmost
        };
        let before = seq.len();
        let at = insert_sorted_with(&mut seq, key, tie_break);

        assert_eq!(seq.len(), before + 1);
        assert_eq!(seq[at], key);
        match tie_break {
            TieBreak::Leftmost => assert!(at == 0 || seq[at - 1] < key),
            TieBreak::Rightmost => assert!(at + 1 == seq.len() || seq[at + 1] > key),
        }
    }

    assert!(is_ordered(&seq));
}

/// Bounded search agrees with searching the sub-slice directly.
#[test]
fn property_bounded_search_matches_subslice() {
    let seq = generate_sorted(3_000, 5);
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    for _ in 0..QUERY_COUNT {
        let a = rng.gen_range(0..=seq.len());
        let b = rng.gen_range(0..=seq.len());
        let (lo, hi) = (a.min(b), a.max(b));
        let key = rng.gen_range(0..KEY_RANGE);

        let left = locate_leftmost_in(&seq, &key, lo, hi).unwrap();
        let right = locate_rightmost_in(&seq, &key, lo, hi).unwrap();

        assert_eq!(left, lo + locate_leftmost(&seq[lo..hi], &key));
        assert_eq!(right, lo + locate_rightmost(&seq[lo..hi], &key));
        assert!(lo <= left && left <= right && right <= hi);
    }
}

/// Sorting a batch and inserting it one key at a time give the same result.
#[test]
fn property_insert_matches_sort() {
    let keys = generate_keys(5_000, 77);

    let mut inserted = Vec::new();
    for &key in &keys {
        insert_sorted(&mut inserted, key);
    }

    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(inserted, sorted);
    assert_eq!(SortedIndex::from_unsorted(keys).into_vec(), sorted);
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Insert 50k keys one at a time into an initially empty index.
///
/// # Verification
/// - Final index is ordered and holds every key
/// - Every key is found afterwards
#[test]
fn stress_50k_inserts() {
    println!("\n=== STRESS TEST: 50k Inserts ===\n");

    println!("Generating {} deterministic keys (seed=42)...", STRESS_INSERT_COUNT);
    let keys = generate_keys(STRESS_INSERT_COUNT, 42);

    let mut index = SortedIndex::with_capacity(STRESS_INSERT_COUNT);
    let start = Instant::now();
    for &key in &keys {
        index.insert(key);
    }
    let elapsed = start.elapsed();

    let throughput = STRESS_INSERT_COUNT as f64 / elapsed.as_secs_f64();

    println!("\n=== RESULTS ===");
    println!("  Keys inserted:     {:>12}", index.len());
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  Throughput:        {:>12.0} inserts/sec", throughput);

    assert_eq!(index.len(), STRESS_INSERT_COUNT);
    assert!(is_ordered(index.as_slice()), "index must stay ordered");
    for key in &keys {
        assert!(index.contains(key));
    }

    let total: usize = (0..KEY_RANGE).map(|k| index.count(&k)).sum();
    assert_eq!(total, STRESS_INSERT_COUNT);

    println!("\n=== STRESS TEST PASSED ===\n");
}

/// Same sequence of inserts produces the same digest.
#[test]
fn verify_determinism() {
    println!("\n=== DETERMINISM TEST ===\n");

    const TEST_COUNT: usize = 10_000;
    const SEED: u64 = 12345;

    let root1 = run_deterministic_sequence(SEED, TEST_COUNT);
    let root2 = run_deterministic_sequence(SEED, TEST_COUNT);

    println!("  Run 1 digest:   {}", hex::encode(root1));
    println!("  Run 2 digest:   {}", hex::encode(root2));

    assert_eq!(root1, root2, "Digests must match for determinism");

    let root3 = run_deterministic_sequence(SEED + 1, TEST_COUNT);
    println!("  Different seed: {}", hex::encode(root3));
    assert_ne!(root1, root3, "Different seeds should produce different digests");

    println!("\n=== DETERMINISM VERIFIED ===\n");
}

/// Report search latency at increasing sizes.
#[test]
fn stress_scaling() {
    println!("\n=== SCALING TEST ===\n");

    let test_sizes = [1_000, 10_000, 100_000, 1_000_000];

    println!("{:>12} {:>12} {:>12}", "Keys", "Time", "Latency");
    println!("{:-<12} {:-<12} {:-<12}", "", "", "");

    for &size in &test_sizes {
        let seq = generate_sorted(size, 42);
        let queries = generate_keys(QUERY_COUNT, 43);

        let start = Instant::now();
        let mut checksum = 0usize;
        for key in &queries {
            checksum = checksum.wrapping_add(locate_leftmost(&seq, key));
            checksum = checksum.wrapping_add(locate_rightmost(&seq, key));
        }
        let elapsed = start.elapsed();
        let latency_ns = elapsed.as_nanos() as f64 / (2 * QUERY_COUNT) as f64;

        println!("{:>12} {:>12.2?} {:>10.1}ns", size, elapsed, latency_ns);
        assert!(checksum <= 2 * QUERY_COUNT * size);
    }

    println!("\n=== SCALING TEST COMPLETE ===\n");
}
