//! Sorted Index - demo binary
//!
//! Prints insertion points for a fixed haystack, a grading table and a
//! sequential-insertion trace.

use sorted_index::types::Score;
use sorted_index::{Classifier, IndexError, SortedIndex, TieBreak};

const HAYSTACK: [u64; 14] = [1, 4, 5, 6, 8, 12, 15, 20, 21, 23, 23, 26, 29, 30];
const NEEDLES: [u64; 11] = [0, 1, 2, 5, 8, 10, 22, 23, 29, 30, 31];

fn main() -> Result<(), IndexError> {
    println!("===========================================");
    println!("  Sorted Index");
    println!("===========================================");
    println!();

    let index = SortedIndex::from_sorted(HAYSTACK.to_vec())?;
    let haystack_row = index
        .iter()
        .map(|k| format!("{:2}", k))
        .collect::<Vec<_>>()
        .join(" ");

    for (name, tie_break) in [("leftmost", TieBreak::Leftmost), ("rightmost", TieBreak::Rightmost)] {
        println!("Insertion points ({}):", name);
        println!("  haystack ->  {}", haystack_row);
        for needle in NEEDLES.iter().rev() {
            let position = tie_break.locate(index.as_slice(), needle);
            let offset = "  |".repeat(position);
            println!("  {:2} @ {:2}    {}{:2}", needle, position, offset, needle);
        }
        println!();
    }

    println!("Grading table (breakpoints 60 70 80 90):");
    let grades = Classifier::grades(&["60", "70", "80", "90"], "FDCBA")?;
    for raw in ["33", "59.99", "60", "77", "85", "89.5", "90", "100"] {
        let score = Score::parse(raw)?;
        println!("  {:>6} -> {}", score, grades.label(&score));
    }
    println!();

    println!("Sequential insertion (rightmost tie-break):");
    let mut seq = SortedIndex::new();
    for key in [5u64, 2, 8, 2] {
        let at = seq.insert(key);
        println!("  insert {:2} @ {} -> {:?}", key, at, seq.as_slice());
    }
    println!();

    let digest = seq.digest()?;
    println!("Digest of {} keys: {}", digest.len, digest.root_hex());

    Ok(())
}
