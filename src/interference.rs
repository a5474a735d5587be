//! Deduction of interference points.
//!
//! Two antennas of the same frequency interfere at the points on their line
//! that are twice as far from one antenna as from the other: one step of
//! their displacement beyond each antenna.

use geo::{coord, Coord};
use log::{debug, warn};

use crate::{
    antennas::AntennaSet,
    bounds::Bounds,
    error::{Error, Result},
    model::InterferencePoint,
};

/// Deduces every in-bounds interference point of `antennas`.
///
/// The result is a multiset: a point reached by several pairs is listed once per pair.
pub fn deduce(antennas: &AntennaSet, bounds: Bounds) -> Result<Vec<InterferencePoint>> {
    let mut points = Vec::new();
    deduce_into(antennas, bounds, &mut points)?;
    Ok(points)
}

/// Like [`deduce`], but appends to `points`. The new points are listed last
/// found first. If storage for a point cannot be reserved the pass stops early;
/// points already appended are kept.
pub fn deduce_into(
    antennas: &AntennaSet,
    bounds: Bounds,
    points: &mut Vec<InterferencePoint>,
) -> Result<()> {
    let before = points.len();

    for (i, a1) in antennas.iter().enumerate() {
        for a2 in antennas.iter().skip(i + 1) {
            if a1.frequency != a2.frequency {
                continue;
            }

            // i64 so that pairs far off the grid cannot overflow
            let (p1, p2) = (widen(a1.position), widen(a2.position));
            let d = p2 - p1;
            for candidate in [p1 - d, p2 + d] {
                let Some(candidate) = narrow(candidate).filter(|c| bounds.contains(*c)) else {
                    continue;
                };
                if points.try_reserve(1).is_err() {
                    warn!("Failed to allocate memory for interference point");
                    points[before..].reverse();
                    return Err(Error::Allocation {
                        what: "interference point",
                    });
                }
                points.push(candidate.into());
            }
        }
    }

    // newest first, as antennas are
    points[before..].reverse();

    debug!(
        "Deduced {} interference points from {} antennas",
        points.len() - before,
        antennas.len()
    );
    Ok(())
}

fn widen(c: Coord<i32>) -> Coord<i64> {
    coord! { x: i64::from(c.x), y: i64::from(c.y) }
}

fn narrow(c: Coord<i64>) -> Option<Coord<i32>> {
    Some(coord! { x: i32::try_from(c.x).ok()?, y: i32::try_from(c.y).ok()? })
}

/// Removes duplicate points, ordered row by row.
pub fn unique(points: &[InterferencePoint]) -> Vec<InterferencePoint> {
    let mut points = points.to_vec();
    points.sort_unstable_by_key(|p| (p.y, p.x));
    points.dedup();
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: Bounds = Bounds {
        width: 12,
        height: 12,
    };

    fn set(antennas: &[(char, i32, i32)]) -> AntennaSet {
        let mut set = AntennaSet::new();
        for &(f, x, y) in antennas {
            set.insert(f, x, y).unwrap();
        }
        set
    }

    fn sorted(mut points: Vec<InterferencePoint>) -> Vec<InterferencePoint> {
        points.sort();
        points
    }

    #[test]
    fn pair() {
        let antennas = set(&[('0', 8, 1), ('0', 5, 2)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(
            sorted(points),
            vec![InterferencePoint::new(2, 3), InterferencePoint::new(11, 0)]
        );
    }

    #[test]
    fn pair_formula() {
        // a at (4, 4), b at (6, 5): (4-2, 4-1) and (6+2, 5+1)
        let antennas = set(&[('x', 4, 4), ('x', 6, 5)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(
            sorted(points),
            vec![InterferencePoint::new(2, 3), InterferencePoint::new(8, 6)]
        );
    }

    #[test]
    fn frequencies_must_match() {
        let antennas = set(&[('a', 4, 4), ('A', 6, 5), ('b', 5, 5)]);
        assert!(deduce(&antennas, GRID).unwrap().is_empty());
    }

    #[test]
    fn too_few_antennas() {
        assert!(deduce(&AntennaSet::new(), GRID).unwrap().is_empty());
        assert!(deduce(&set(&[('0', 3, 3)]), GRID).unwrap().is_empty());
    }

    #[test]
    fn coincident() {
        let antennas = set(&[('B', 5, 5), ('B', 5, 5)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(points, vec![InterferencePoint::new(5, 5); 2]);
    }

    #[test]
    fn off_by_one_excluded() {
        // candidates at (-1, 0) and (12, 0)
        let antennas = set(&[('0', 3, 0), ('0', 7, 0)]);
        let points = deduce(&antennas, Bounds::new(11, 1)).unwrap();
        assert!(points.is_empty());

        let antennas = set(&[('0', 1, 0), ('0', 5, 0)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(points, vec![InterferencePoint::new(9, 0)]);

        let antennas = set(&[('0', 0, 1), ('0', 0, 6)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(points, vec![InterferencePoint::new(0, 11)]);
    }

    #[test]
    fn duplicates_kept() {
        // both pairs put a point on (4, 4)
        let antennas = set(&[('a', 2, 2), ('a', 3, 3), ('b', 6, 2), ('b', 5, 3)]);
        let points = deduce(&antennas, GRID).unwrap();
        let hits = points
            .iter()
            .filter(|p| **p == InterferencePoint::new(4, 4))
            .count();
        assert_eq!(hits, 2);
        assert_eq!(unique(&points).len(), points.len() - 1);
    }

    #[test]
    fn each_pair_once() {
        let antennas = set(&[('a', 5, 5), ('a', 6, 5), ('a', 5, 6)]);
        let points = deduce(&antennas, Bounds::new(100, 100)).unwrap();
        // three pairs, two candidates each, all in bounds
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn last_found_first() {
        let antennas = set(&[('0', 8, 1), ('0', 5, 2)]);
        let points = deduce(&antennas, GRID).unwrap();
        assert_eq!(
            points,
            vec![InterferencePoint::new(11, 0), InterferencePoint::new(2, 3)]
        );
    }

    #[test]
    fn extreme_coordinates() {
        let antennas = set(&[('B', 0, 0), ('B', i32::MAX, 0)]);
        assert!(deduce(&antennas, GRID).unwrap().is_empty());

        let antennas = set(&[('B', -7, 0), ('B', i32::MAX, 0)]);
        assert!(deduce(&antennas, GRID).unwrap().is_empty());

        let antennas = set(&[('B', i32::MIN, i32::MIN), ('B', i32::MAX, i32::MAX)]);
        let points = deduce(&antennas, Bounds::new(u32::MAX, u32::MAX)).unwrap();
        assert!(points.is_empty());
    }

    // the allocation failure branch of deduce_into cannot be forced from a
    // test; this covers the other half of its contract, that earlier entries
    // in the caller's list are left alone
    #[test]
    fn appends() {
        let antennas = set(&[('0', 8, 1), ('0', 5, 2)]);
        let mut points = vec![InterferencePoint::new(0, 0)];
        deduce_into(&antennas, GRID, &mut points).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], InterferencePoint::new(0, 0));
    }

    #[test]
    fn unique_row_major() {
        let points = [
            InterferencePoint::new(3, 1),
            InterferencePoint::new(1, 2),
            InterferencePoint::new(3, 1),
            InterferencePoint::new(5, 0),
        ];
        assert_eq!(
            unique(&points),
            vec![
                InterferencePoint::new(5, 0),
                InterferencePoint::new(3, 1),
                InterferencePoint::new(1, 2),
            ]
        );
    }
}
