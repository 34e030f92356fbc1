// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit seam: how the controller reads and writes element geometry.
//!
//! The controller never touches a scene graph directly. Hosts implement [`Toolkit`]
//! for whatever owns their elements (a DOM, a box tree, a retained widget tree) and
//! pass it into every controller call.
//!
//! Pointer events are not subscribed to by the controller; the host feeds them in.
//! The listener hooks on this trait ([`Toolkit::listen_press`], [`Toolkit::listen_surface`],
//! [`Toolkit::unlisten_surface`]) tell the host when routing should change, so that
//! surface-wide move/release delivery only runs while a gesture is active.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Size};

/// Geometry accessors and listener hooks supplied by the host toolkit.
///
/// Positions are offsets within the element's containing context. The controller
/// assumes the element is positioned so that writing a position actually moves it;
/// this is not checked.
pub trait Toolkit {
    /// Element identifier or handle.
    type Element: Clone + PartialEq + Debug;
    /// Query used to find handle elements within a target (e.g. a CSS-like selector).
    type Selector: ?Sized;

    /// Current position (left, top) of `element`.
    fn position(&self, element: &Self::Element) -> Point;
    /// Move `element` to `position`.
    fn set_position(&mut self, element: &Self::Element, position: Point);

    /// Current size (width, height) of `element`.
    fn size(&self, element: &Self::Element) -> Size;
    /// Resize `element` to `size`.
    fn set_size(&mut self, element: &Self::Element, size: Size);

    /// Current opacity of `element`.
    fn opacity(&self, element: &Self::Element) -> f64;
    /// Set the opacity of `element`.
    fn set_opacity(&mut self, element: &Self::Element, opacity: f64);

    /// Resolve `selector` to the matching sub-elements of `element`.
    ///
    /// An empty result means the binding can never start a gesture.
    fn resolve_handles(
        &self,
        element: &Self::Element,
        selector: &Self::Selector,
    ) -> Vec<Self::Element>;

    /// Presses on `handle` should now be delivered to the controller.
    fn listen_press(&mut self, handle: &Self::Element) {
        let _ = handle;
    }

    /// Surface-wide pointer move and release events should now be delivered to the controller.
    fn listen_surface(&mut self) {}

    /// Stop delivering surface-wide pointer move and release events.
    fn unlisten_surface(&mut self) {}
}
