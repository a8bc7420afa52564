//! Integration tests for growpack-core.

use growpack_core::{AllocatedSpace, Coordinates, Error, PackedSpace, Size, Space};

mod geometry_tests {
    use super::*;

    #[test]
    fn test_size_rotation_is_involutive() {
        let size = Size::new(9, 4);
        assert_eq!(size.rotated().rotated(), size);
    }

    #[test]
    fn test_rotation_preserves_area() {
        let size = Size::new(6, 11);
        assert_eq!(size.area(), size.rotated().area());
    }

    #[test]
    fn test_validate_reports_requested_dimensions() {
        match Size::new(0, 5).validate() {
            Err(Error::InvalidItemSize { width, height }) => {
                assert_eq!((width, height), (0, 5));
            }
            other => panic!("expected InvalidItemSize, got {other:?}"),
        }
    }
}

mod space_tests {
    use super::*;

    #[test]
    fn test_adjacent_rectangles_do_not_intersect() {
        // Rectangles sharing only an edge occupy disjoint grid cells.
        let a = Space::new(0, 0, 3, 3);
        let b = Space::new(3, 0, 3, 3);
        let c = Space::new(0, 3, 3, 3);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(b.intersects(&Space::new(5, 2, 2, 2)));
    }

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let outer = Space::new(1, 1, 4, 4);
        assert!(outer.contains(&Space::new(1, 1, 4, 4)));
        assert!(outer.contains(&Space::new(3, 3, 2, 2)));
        assert!(!outer.contains(&Space::new(3, 3, 3, 2)));
    }
}

mod packed_space_tests {
    use super::*;

    fn sample_space() -> PackedSpace<&'static str> {
        // 4x4 box: one 4x2 item placed rotated (2x4 footprint) at (0,0),
        // free area covering the remaining 2x4 column.
        PackedSpace {
            origin: Coordinates::new(-1, -2),
            size: Size::new(4, 4),
            free: vec![Space::new(2, 0, 2, 4)],
            allocations: vec![AllocatedSpace {
                location: Coordinates::new(0, 0),
                size: Size::new(4, 2),
                horizontal: false,
                value: "tall",
            }],
        }
    }

    #[test]
    fn test_area_accounting() {
        let space = sample_space();
        assert_eq!(space.allocated_area(), 8);
        assert_eq!(space.free_area(), 8);
        assert_eq!(
            space.allocated_area() + space.free_area(),
            space.size.area()
        );
    }

    #[test]
    fn test_utilization_ratio() {
        let space = sample_space();
        assert!((space.utilization() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_find_by_value() {
        let space = sample_space();
        let found = space.find(&"tall").expect("allocation should exist");
        assert_eq!(found.location, Coordinates::new(0, 0));
        assert!(!found.horizontal);
        assert!(space.find(&"missing").is_none());
    }

    #[test]
    fn test_world_translation() {
        let space = sample_space();
        let alloc = space.find(&"tall").expect("allocation should exist");
        assert_eq!(space.to_world(alloc.location), Coordinates::new(-1, -2));
    }
}
