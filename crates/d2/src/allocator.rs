//! Placement commit: guaranteed allocation with centre-biased positioning
//! and a guillotine split of the leftover area.

use growpack_core::{
    AllocatedSpace, Coordinates, Error, PackedSpace, Result, Size, Space,
};

use crate::finder::allocate_free_space;

/// Caller-facing summary of a committed allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Local grid position of the item's top-left corner.
    pub location: Coordinates,
    /// Whether the item kept its natural orientation.
    pub horizontal: bool,
}

/// Creates a packed space sized exactly to its first item.
///
/// The bounding box equals `item_size`, seeded with a single free
/// rectangle covering it, and the item is allocated immediately (a
/// trivial fit). `origin` anchors the box in the caller's world
/// coordinates. Key uniqueness across later allocations is the caller's
/// responsibility; `value` is carried through opaquely and never checked.
pub fn initialise_space<T>(
    origin: Coordinates,
    item_size: Size,
    value: T,
) -> Result<PackedSpace<T>> {
    item_size.validate()?;
    let mut space = PackedSpace {
        origin,
        size: item_size,
        free: vec![Space::from_parts(Coordinates::default(), item_size)],
        allocations: Vec::new(),
    };
    allocate_space(&mut space, item_size, value)?;
    Ok(space)
}

/// Places an item somewhere in the space, growing the bounding box when
/// nothing currently fits. A well-formed item is never refused.
///
/// The chosen free rectangle decides the orientation: the item is placed
/// unrotated when the rectangle is wide enough for its natural width, and
/// rotated 90° otherwise. Within the rectangle the item sits at the
/// corner, except that a rectangle lying entirely in the low half of the
/// box on an axis has the item justified to its far edge on that axis,
/// which pulls the packed cluster toward the box centre.
pub fn allocate_space<T>(
    space: &mut PackedSpace<T>,
    item_size: Size,
    value: T,
) -> Result<Placement> {
    item_size.validate()?;

    let candidate = allocate_free_space(space, item_size, true)
        .ok_or_else(|| Error::Internal("expanding search returned no fit".into()))?;

    let horizontal = candidate.size.width >= item_size.width;
    let footprint = if horizontal {
        item_size
    } else {
        item_size.rotated()
    };
    let location = biased_location(&candidate, footprint, space.size);

    // Swap the candidate for the leftovers of the guillotine split.
    let index = space
        .free
        .iter()
        .position(|rect| *rect == candidate)
        .ok_or_else(|| Error::Internal("candidate missing from the free list".into()))?;
    space.free.remove(index);

    let allocation = AllocatedSpace {
        location,
        size: item_size,
        horizontal,
        value,
    };
    let mut leftovers = remaining_spaces(&candidate, &allocation);
    space.free.append(&mut leftovers);

    log::trace!(
        "placed {}x{} item at ({}, {}), horizontal = {horizontal}",
        item_size.width,
        item_size.height,
        location.x,
        location.y
    );
    space.allocations.push(allocation);

    Ok(Placement {
        location,
        horizontal,
    })
}

/// Default placement is the candidate's own corner. When the candidate
/// sits entirely left of the box's horizontal centre its item is pushed
/// to the candidate's right edge instead, and likewise vertically, so
/// that items accumulate around the centre rather than toward `(0, 0)`.
fn biased_location(candidate: &Space, footprint: Size, bounds: Size) -> Coordinates {
    let mut location = candidate.location;
    if 2 * candidate.right() < bounds.width {
        location.x = candidate.right() - footprint.width;
    }
    if 2 * candidate.bottom() < bounds.height {
        location.y = candidate.bottom() - footprint.height;
    }
    location
}

/// Guillotine split of `container` around a committed allocation.
///
/// Produces up to four leftover strips. The strips flanking the item's
/// orientation axis span the container's full perpendicular extent, while
/// the other two are clipped to the item's span: for a horizontal item
/// the left/right strips take the container's full height and the
/// top/bottom strips only the item's width, mirrored for a rotated item.
/// Keeping the flanking strips tall/wide this way avoids thin unusable
/// slivers next to the corners.
///
/// Returns an empty list when the allocation does not lie inside
/// `container`; that indicates a caller bug, not a runtime condition.
pub fn remaining_spaces<T>(container: &Space, allocation: &AllocatedSpace<T>) -> Vec<Space> {
    let footprint = allocation.footprint();
    if !container.contains(&footprint) {
        return Vec::new();
    }

    let left = footprint.location.x - container.location.x;
    let right = container.right() - footprint.right();
    let top = footprint.location.y - container.location.y;
    let bottom = container.bottom() - footprint.bottom();

    let mut spaces = Vec::new();
    if allocation.horizontal {
        if left > 0 {
            spaces.push(Space::new(
                container.location.x,
                container.location.y,
                left,
                container.size.height,
            ));
        }
        if right > 0 {
            spaces.push(Space::new(
                footprint.right(),
                container.location.y,
                right,
                container.size.height,
            ));
        }
        if top > 0 {
            spaces.push(Space::new(
                footprint.location.x,
                container.location.y,
                footprint.size.width,
                top,
            ));
        }
        if bottom > 0 {
            spaces.push(Space::new(
                footprint.location.x,
                footprint.bottom(),
                footprint.size.width,
                bottom,
            ));
        }
    } else {
        if top > 0 {
            spaces.push(Space::new(
                container.location.x,
                container.location.y,
                container.size.width,
                top,
            ));
        }
        if bottom > 0 {
            spaces.push(Space::new(
                container.location.x,
                footprint.bottom(),
                container.size.width,
                bottom,
            ));
        }
        if left > 0 {
            spaces.push(Space::new(
                container.location.x,
                footprint.location.y,
                left,
                footprint.size.height,
            ));
        }
        if right > 0 {
            spaces.push(Space::new(
                footprint.right(),
                footprint.location.y,
                right,
                footprint.size.height,
            ));
        }
    }
    spaces
}
