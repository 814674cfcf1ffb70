//! Tests for the group finder

use super::finder::candidates;
use super::*;
use crate::kmap::CellVector;

fn cells(bits: &str) -> CellVector {
    bits.parse().unwrap()
}

fn all_vectors(vars: VarCount) -> impl Iterator<Item = CellVector> {
    (0..1usize << vars.cells()).map(move |mask| {
        let ones = (0..vars.cells()).filter(|p| (mask >> p) & 1 == 1);
        CellVector::from_positions(vars, ones).unwrap()
    })
}

#[test]
fn test_empty_map_has_no_groups() {
    assert!(find_groups(&cells("0000")).is_empty());
    assert!(find_groups(&cells("00000000")).is_empty());
}

#[test]
fn test_full_map_is_one_group() {
    let groups = find_groups(&cells("1111"));
    assert_eq!(groups.len(), 1);
    assert!(groups[0].is_full());
    assert_eq!(groups[0].description(), "Quad (all cells)");

    let groups = find_groups(&cells("11111111"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size(), 8);
    assert_eq!(groups[0].description(), "Octet (all cells)");
    assert!(groups[0].term().is_universe());
}

#[test]
fn test_two_variable_pairs_in_priority_order() {
    let groups = find_groups(&cells("1110"));
    let kinds: Vec<GroupKind> = groups.iter().map(Group::kind).collect();
    assert_eq!(
        kinds,
        vec![
            GroupKind::Pair(Orientation::Row),
            GroupKind::Pair(Orientation::Column)
        ]
    );
    assert_eq!(groups[0].positions(), &[0, 1]);
    assert_eq!(groups[1].positions(), &[0, 2]);
}

#[test]
fn test_two_variable_singles_only_when_uncovered() {
    let groups = find_groups(&cells("0110"));
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.kind() == GroupKind::Single));
    assert_eq!(groups[0].term().to_string(), "A'B");
    assert_eq!(groups[1].term().to_string(), "AB'");
}

#[test]
fn test_three_variable_overlapping_pairs() {
    // A'B'C', A'B'C, A'BC: two pairs sharing the middle cell
    let groups = find_groups(&cells("11100000"));
    let terms: Vec<String> = groups.iter().map(|g| g.term().to_string()).collect();
    assert_eq!(terms, vec!["A'B'", "A'C"]);
}

#[test]
fn test_quad_blocks_pairs_touching_it() {
    // Top row plus AB'C: the vertical pair (1, 5) is skipped
    let groups = find_groups(&cells("11110100"));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind(), GroupKind::Quad(Orientation::Row));
    assert_eq!(groups[0].term().to_string(), "A'");
    assert_eq!(groups[1].kind(), GroupKind::Single);
    assert_eq!(groups[1].positions(), &[5]);
}

#[test]
fn test_wraparound_pair() {
    let groups = find_groups(&cells("10010000"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind(), GroupKind::Pair(Orientation::Wrap));
    assert_eq!(groups[0].term().to_string(), "A'C'");
    assert_eq!(groups[0].description(), "Pair (wrap): A'C' (m0, m2)");
}

#[test]
fn test_square_quads() {
    let groups = find_groups(&cells("11001100"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind(), GroupKind::Quad(Orientation::Square));
    assert_eq!(groups[0].term().to_string(), "B'");

    let groups = find_groups(&cells("01100110"));
    assert_eq!(groups[0].term().to_string(), "C");
}

#[test]
fn test_right_square_before_middle_square() {
    // Both the BC' and BC columns and the B'C and BC columns are full
    let groups = find_groups(&cells("01110111"));
    let order: Vec<&[usize]> = groups.iter().map(Group::positions).collect();
    assert_eq!(order, vec![&[2, 3, 6, 7][..], &[1, 2, 5, 6][..]]);
    assert_eq!(groups[0].term().to_string(), "B");
    assert_eq!(groups[1].term().to_string(), "C");
}

#[test]
fn test_candidate_order() {
    let order: Vec<Vec<usize>> = candidates(VarCount::Three)
        .iter()
        .map(|g| g.positions().to_vec())
        .collect();
    assert_eq!(
        order,
        vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 4, 5],
            vec![2, 3, 6, 7],
            vec![1, 2, 5, 6],
            vec![0, 3, 4, 7],
            vec![0, 1],
            vec![1, 2],
            vec![2, 3],
            vec![0, 3],
            vec![4, 5],
            vec![5, 6],
            vec![6, 7],
            vec![4, 7],
            vec![0, 4],
            vec![1, 5],
            vec![2, 6],
            vec![3, 7],
        ]
    );

    let order: Vec<Vec<usize>> = candidates(VarCount::Two)
        .iter()
        .map(|g| g.positions().to_vec())
        .collect();
    assert_eq!(order, vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 3]]);
}

#[test]
fn test_groups_are_valid_sub_cubes_of_ones() {
    for vars in [VarCount::Two, VarCount::Three] {
        for vector in all_vectors(vars) {
            let groups = find_groups(&vector);
            for group in &groups {
                assert!(
                    group.size().is_power_of_two() && group.size() <= 8,
                    "bad size in {:?}",
                    group
                );
                assert!(
                    group.positions().iter().all(|&p| vector.as_slice()[p]),
                    "{:?} covers a 0-cell of {}",
                    group,
                    vector
                );
                // The group's term covers exactly its own minterms
                let covered: Vec<usize> = (0..vars.cells())
                    .filter(|&m| group.term().covers(m))
                    .collect();
                let mut minterms = group.minterms();
                minterms.sort_unstable();
                assert_eq!(covered, minterms);
            }
            // Every 1-cell is in some group
            for position in vector.ones_positions() {
                assert!(groups.iter().any(|g| g.covers(position)));
            }
        }
    }
}

#[test]
fn test_find_groups_is_deterministic() {
    let vector = cells("10110111");
    assert_eq!(find_groups(&vector), find_groups(&vector));
}
