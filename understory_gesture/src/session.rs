// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: the geometry snapshot taken at press time and the delta law applied on move.
//!
//! ## Usage
//!
//! 1) A press captures a [`Session`] with the target's position, size and opacity,
//!    along with the pointer position.
//! 2) On each move event, [`Session::update_for`] turns the current pointer position into
//!    the one geometry write for that event.
//! 3) Release drops the session; its fields are not consulted again.
//!
//! Every update is computed from the fixed origin and start pointer, never from the
//! previous update, so intermediate moves leave no drift behind.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_gesture::session::{GeometryUpdate, GestureMode, Session};
//!
//! let session = Session {
//!     target: 7_u32,
//!     mode: GestureMode::Resize,
//!     origin_position: Point::new(0.0, 0.0),
//!     origin_size: Size::new(100.0, 50.0),
//!     start_pointer: Point::new(300.0, 300.0),
//!     saved_opacity: 1.0,
//! };
//!
//! // Width would go negative; it is floored at zero.
//! let update = session.update_for(Point::new(150.0, 290.0));
//! assert_eq!(update, GeometryUpdate::Size(Size::new(0.0, 40.0)));
//! ```

use kurbo::{Point, Size, Vec2};

/// Opacity applied to the target for the duration of a gesture.
pub const GESTURE_OPACITY: f64 = 0.8;

/// Which geometry a gesture drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureMode {
    /// Pointer delta translates the target's position.
    Move,
    /// Pointer delta grows or shrinks the target's size.
    Resize,
}

/// The single geometry write produced by one pointer move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryUpdate {
    /// New position of the target (left, top).
    Position(Point),
    /// New size of the target (width, height).
    Size(Size),
}

/// An active gesture.
///
/// All fields are fixed when the gesture starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Session<E> {
    /// Element being moved or resized.
    pub target: E,
    /// Whether the gesture moves or resizes `target`.
    pub mode: GestureMode,
    /// Position of `target` at press time.
    pub origin_position: Point,
    /// Size of `target` at press time.
    pub origin_size: Size,
    /// Pointer position at press time.
    pub start_pointer: Point,
    /// Opacity of `target` before the gesture started; restored when it ends.
    pub saved_opacity: f64,
}

impl<E> Session<E> {
    /// Pointer offset from the press position.
    pub fn offset(&self, pointer: Point) -> Vec2 {
        pointer - self.start_pointer
    }

    /// Compute the geometry for the target with the pointer at `pointer`.
    ///
    /// Moves are not clamped and may leave the surface. Resizes floor each
    /// dimension at zero.
    pub fn update_for(&self, pointer: Point) -> GeometryUpdate {
        let delta = self.offset(pointer);
        match self.mode {
            GestureMode::Move => GeometryUpdate::Position(self.origin_position + delta),
            GestureMode::Resize => GeometryUpdate::Size(Size::new(
                (self.origin_size.width + delta.x).max(0.0),
                (self.origin_size.height + delta.y).max(0.0),
            )),
        }
    }
}
