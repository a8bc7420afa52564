//! Bounding-box growth.
//!
//! Each call grows the box by `amount` along one edge and rebuilds the
//! grown strip as fully free space: free rectangles already touching that
//! edge are widened into the strip, and the gaps between them (where
//! allocations touch the edge) are filled with new free rectangles of the
//! strip's thickness. Growing at the near end (left or top) also shifts
//! all existing local geometry so that local `(0, 0)` remains the corner,
//! while `origin` absorbs the shift — world positions never move.
//!
//! All four edges run through one routine parametrized by axis and end.

use growpack_core::{Coordinates, PackedSpace, Size, Space};

/// Axis along which an expansion grows the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    fn pos(self, c: &Coordinates) -> i32 {
        match self {
            Axis::X => c.x,
            Axis::Y => c.y,
        }
    }

    fn pos_mut(self, c: &mut Coordinates) -> &mut i32 {
        match self {
            Axis::X => &mut c.x,
            Axis::Y => &mut c.y,
        }
    }

    fn len(self, s: &Size) -> i32 {
        match self {
            Axis::X => s.width,
            Axis::Y => s.height,
        }
    }

    fn len_mut(self, s: &mut Size) -> &mut i32 {
        match self {
            Axis::X => &mut s.width,
            Axis::Y => &mut s.height,
        }
    }
}

/// Which end of the axis receives the new strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    /// Left or top: the origin moves and local geometry shifts.
    Near,
    /// Right or bottom: existing geometry keeps its coordinates.
    Far,
}

/// Grows the box leftward, shifting all local x coordinates by `amount`.
pub fn expand_left<T>(space: &mut PackedSpace<T>, amount: i32) {
    expand(space, Axis::X, End::Near, amount);
}

/// Grows the box rightward; existing geometry keeps its coordinates.
pub fn expand_right<T>(space: &mut PackedSpace<T>, amount: i32) {
    expand(space, Axis::X, End::Far, amount);
}

/// Grows the box upward, shifting all local y coordinates by `amount`.
pub fn expand_top<T>(space: &mut PackedSpace<T>, amount: i32) {
    expand(space, Axis::Y, End::Near, amount);
}

/// Grows the box downward; existing geometry keeps its coordinates.
pub fn expand_bottom<T>(space: &mut PackedSpace<T>, amount: i32) {
    expand(space, Axis::Y, End::Far, amount);
}

fn expand<T>(space: &mut PackedSpace<T>, axis: Axis, end: End, amount: i32) {
    debug_assert!(amount > 0, "expansion amount must be positive");
    let perp = axis.perpendicular();
    let old_len = axis.len(&space.size);

    if end == End::Near {
        *axis.pos_mut(&mut space.origin) -= amount;
        for alloc in &mut space.allocations {
            *axis.pos_mut(&mut alloc.location) += amount;
        }
        for rect in &mut space.free {
            *axis.pos_mut(&mut rect.location) += amount;
        }
    }
    *axis.len_mut(&mut space.size) += amount;

    // Widen the free rectangles already touching the grown edge into the
    // strip, remembering which perpendicular intervals they cover.
    let edge = match end {
        End::Near => amount, // former coordinate 0, after the shift above
        End::Far => old_len,
    };
    let mut covered: Vec<(i32, i32)> = Vec::new();
    for rect in &mut space.free {
        let touches = match end {
            End::Near => axis.pos(&rect.location) == edge,
            End::Far => axis.pos(&rect.location) + axis.len(&rect.size) == edge,
        };
        if touches {
            if end == End::Near {
                *axis.pos_mut(&mut rect.location) -= amount;
            }
            *axis.len_mut(&mut rect.size) += amount;
            let start = perp.pos(&rect.location);
            covered.push((start, start + perp.len(&rect.size)));
        }
    }
    covered.sort_unstable();

    // Fill the uncovered remainder of the strip, walking in perpendicular
    // order, so the grown strip starts out fully free.
    let strip_pos = match end {
        End::Near => 0,
        End::Far => old_len,
    };
    let perp_extent = perp.len(&space.size);
    let mut cursor = 0;
    for &(start, stop) in &covered {
        if start > cursor {
            space
                .free
                .push(strip_rect(axis, strip_pos, amount, cursor, start - cursor));
        }
        cursor = cursor.max(stop);
    }
    if cursor < perp_extent {
        space
            .free
            .push(strip_rect(axis, strip_pos, amount, cursor, perp_extent - cursor));
    }

    log::trace!(
        "expanded {:?} axis at {:?} end by {amount}, box is now {}x{}",
        axis,
        end,
        space.size.width,
        space.size.height
    );
}

/// A rectangle of the grown strip: `amount` thick along the growth axis,
/// spanning `[perp_pos, perp_pos + perp_len)` perpendicular to it.
fn strip_rect(axis: Axis, axis_pos: i32, axis_len: i32, perp_pos: i32, perp_len: i32) -> Space {
    match axis {
        Axis::X => Space::new(axis_pos, perp_pos, axis_len, perp_len),
        Axis::Y => Space::new(perp_pos, axis_pos, perp_len, axis_len),
    }
}
