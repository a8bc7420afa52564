//! Free-space lookup with a cycling fit heuristic.
//!
//! Candidate free rectangles are filtered on one axis, ranked by the
//! ordering currently in effect, and the first candidate that also fits on
//! the other axis wins. The active ordering advances with every committed
//! allocation, cycling through five entries; rotating the scan order this
//! way spreads items around the box instead of always filling from the
//! same corner.

use std::cmp::Reverse;

use growpack_core::{PackedSpace, Size, Space};

use crate::expander::{expand_bottom, expand_left, expand_right, expand_top};

/// Ranking applied to fitting free rectangles before the first-fit scan.
///
/// "Primary axis" is width for the horizontal search and height for the
/// vertical one; the perpendicular coordinate is y respectively x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOrdering {
    /// Tightest primary extent first.
    TightestExtent,
    /// Lowest perpendicular coordinate first.
    NearEdgeFirst,
    /// Highest perpendicular coordinate first.
    FarEdgeFirst,
}

/// The fixed heuristic cycle, advanced once per committed allocation.
const ORDERING_CYCLE: [FitOrdering; 5] = [
    FitOrdering::TightestExtent,
    FitOrdering::NearEdgeFirst,
    FitOrdering::FarEdgeFirst,
    FitOrdering::NearEdgeFirst,
    FitOrdering::FarEdgeFirst,
];

impl FitOrdering {
    /// The ordering in effect once `count` allocations have been committed.
    pub fn for_allocation_count(count: usize) -> Self {
        ORDERING_CYCLE[count % ORDERING_CYCLE.len()]
    }
}

/// Finds a free rectangle able to hold `item` in its natural orientation.
///
/// Free rectangles at least `item.width` wide are ranked by the active
/// ordering (width, y, or descending y); the first one at least
/// `item.height` tall is returned. `None` means nothing currently fits.
pub fn find_free_horizontal_space<T>(space: &PackedSpace<T>, item: Size) -> Option<Space> {
    let mut fitting: Vec<&Space> = space
        .free
        .iter()
        .filter(|rect| rect.size.width >= item.width)
        .collect();

    match FitOrdering::for_allocation_count(space.allocations.len()) {
        FitOrdering::TightestExtent => fitting.sort_by_key(|rect| rect.size.width),
        FitOrdering::NearEdgeFirst => fitting.sort_by_key(|rect| rect.location.y),
        FitOrdering::FarEdgeFirst => fitting.sort_by_key(|rect| Reverse(rect.location.y)),
    }

    fitting
        .into_iter()
        .find(|rect| rect.size.height >= item.height)
        .copied()
}

/// Mirror of [`find_free_horizontal_space`] for the rotated orientation.
///
/// The item's extents are swapped and free rectangles are filtered and
/// ranked by height and x instead of width and y.
pub fn find_free_vertical_space<T>(space: &PackedSpace<T>, item: Size) -> Option<Space> {
    let rotated = item.rotated();
    let mut fitting: Vec<&Space> = space
        .free
        .iter()
        .filter(|rect| rect.size.height >= rotated.height)
        .collect();

    match FitOrdering::for_allocation_count(space.allocations.len()) {
        FitOrdering::TightestExtent => fitting.sort_by_key(|rect| rect.size.height),
        FitOrdering::NearEdgeFirst => fitting.sort_by_key(|rect| rect.location.x),
        FitOrdering::FarEdgeFirst => fitting.sort_by_key(|rect| Reverse(rect.location.x)),
    }

    fitting
        .into_iter()
        .find(|rect| rect.size.width >= rotated.width)
        .copied()
}

/// Returns a free rectangle that holds `item` in at least one orientation.
///
/// When both orientations fit, the candidate leaving the smaller leftover
/// area wins (ties go to the natural orientation). When nothing fits and
/// `expand` is set, the bounding box grows one unit on every edge and the
/// search reruns; the item stays fixed while free area strictly increases,
/// so the loop always terminates. With `expand` unset this is a pure
/// probe: `None` means the caller must grow the box itself.
pub fn allocate_free_space<T>(
    space: &mut PackedSpace<T>,
    item: Size,
    expand: bool,
) -> Option<Space> {
    loop {
        let horizontal = find_free_horizontal_space(space, item);
        let vertical = find_free_vertical_space(space, item);

        let candidate = match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                let h_leftover = h.area() - item.area();
                let v_leftover = v.area() - item.area();
                if h_leftover <= v_leftover {
                    Some(h)
                } else {
                    Some(v)
                }
            }
            (h, v) => h.or(v),
        };

        if candidate.is_some() {
            return candidate;
        }
        if !expand {
            return None;
        }

        log::debug!(
            "no free rectangle fits {}x{}; growing {}x{} box by one unit per edge",
            item.width,
            item.height,
            space.size.width,
            space.size.height
        );
        expand_left(space, 1);
        expand_right(space, 1);
        expand_top(space, 1);
        expand_bottom(space, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growpack_core::{AllocatedSpace, Coordinates};

    /// A space with a hand-built free list and `count` placeholder
    /// allocations to pin the heuristic cycle position. The placeholder
    /// geometry is irrelevant to the finder, which only reads the count.
    fn space_with(free: Vec<Space>, count: usize) -> PackedSpace<usize> {
        PackedSpace {
            origin: Coordinates::default(),
            size: Size::new(100, 100),
            free,
            allocations: (0..count)
                .map(|value| AllocatedSpace {
                    location: Coordinates::default(),
                    size: Size::new(1, 1),
                    horizontal: true,
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_ordering_cycle() {
        use FitOrdering::*;
        let observed: Vec<_> = (0..7).map(FitOrdering::for_allocation_count).collect();
        assert_eq!(
            observed,
            vec![
                TightestExtent,
                NearEdgeFirst,
                FarEdgeFirst,
                NearEdgeFirst,
                FarEdgeFirst,
                TightestExtent,
                NearEdgeFirst,
            ]
        );
    }

    fn tied_candidates() -> Vec<Space> {
        vec![
            Space::new(0, 0, 5, 5),
            Space::new(0, 6, 3, 5),
            Space::new(0, 12, 4, 5),
        ]
    }

    #[test]
    fn test_horizontal_prefers_tightest_width_at_cycle_start() {
        let space = space_with(tied_candidates(), 0);
        let found = find_free_horizontal_space(&space, Size::new(2, 2));
        assert_eq!(found, Some(Space::new(0, 6, 3, 5)));
    }

    #[test]
    fn test_horizontal_prefers_lowest_y_on_second_allocation() {
        let space = space_with(tied_candidates(), 1);
        let found = find_free_horizontal_space(&space, Size::new(2, 2));
        assert_eq!(found, Some(Space::new(0, 0, 5, 5)));
    }

    #[test]
    fn test_horizontal_prefers_highest_y_on_third_allocation() {
        let space = space_with(tied_candidates(), 2);
        let found = find_free_horizontal_space(&space, Size::new(2, 2));
        assert_eq!(found, Some(Space::new(0, 12, 4, 5)));
    }

    #[test]
    fn test_horizontal_skips_too_short_candidates() {
        // Narrowest candidate is too short; next one in order wins.
        let free = vec![Space::new(0, 0, 3, 1), Space::new(0, 2, 6, 4)];
        let space = space_with(free, 0);
        let found = find_free_horizontal_space(&space, Size::new(2, 2));
        assert_eq!(found, Some(Space::new(0, 2, 6, 4)));
    }

    #[test]
    fn test_vertical_matches_rotated_item() {
        // A 6x2 item rotated occupies 2x6: needs height >= 6, width >= 2.
        let free = vec![Space::new(0, 0, 8, 3), Space::new(9, 0, 3, 7)];
        let space = space_with(free, 0);
        let found = find_free_vertical_space(&space, Size::new(6, 2));
        assert_eq!(found, Some(Space::new(9, 0, 3, 7)));
    }

    #[test]
    fn test_vertical_orders_by_x_on_second_allocation() {
        let free = vec![Space::new(10, 0, 4, 9), Space::new(2, 0, 4, 9)];
        let space = space_with(free, 1);
        let found = find_free_vertical_space(&space, Size::new(6, 2));
        assert_eq!(found, Some(Space::new(2, 0, 4, 9)));
    }

    #[test]
    fn test_both_orientations_pick_smaller_leftover() {
        // The 4x2 item only fits the wide rectangle unrotated (leftover 28)
        // but fits the narrow column rotated (leftover 2): rotation wins.
        let free = vec![Space::new(0, 0, 6, 6), Space::new(7, 0, 2, 5)];
        let space = space_with(free, 0);
        let found = allocate_free_space(&mut space.clone(), Size::new(4, 2), false);
        assert_eq!(found, Some(Space::new(7, 0, 2, 5)));
    }

    #[test]
    fn test_probe_mode_returns_none_without_growing() {
        let mut space = space_with(vec![Space::new(0, 0, 2, 2)], 0);
        space.size = Size::new(2, 2);
        let before = space.size;
        assert_eq!(allocate_free_space(&mut space, Size::new(5, 5), false), None);
        assert_eq!(space.size, before);
    }

    #[test]
    fn test_expanding_search_always_finds_a_fit() {
        let mut space = space_with(vec![Space::new(0, 0, 2, 2)], 0);
        space.size = Size::new(2, 2);
        let found = allocate_free_space(&mut space, Size::new(5, 5), true);
        let candidate = found.expect("expanding search must yield a candidate");
        assert!(candidate.size.width >= 5 || candidate.size.height >= 5);
        assert!(space.size.width > 2 && space.size.height > 2);
    }
}
