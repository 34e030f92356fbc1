// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture controller: bind handles to targets and drive press → move → release.
//!
//! ## Usage
//!
//! 1) Bind targets with [`GestureController::enable_drag`] or [`GestureController::enable_resize`].
//! 2) Deliver presses on bound handles to [`GestureController::press`]. A press that starts
//!    a gesture asks the host to suppress its default action.
//! 3) While a gesture is active, deliver surface-wide pointer moves to
//!    [`GestureController::pointer_move`] and the first pointer release to
//!    [`GestureController::release`].
//! 4) If the host loses track of the pointer (surface blur, pointer leaving the window),
//!    call [`GestureController::cancel`] to tear the gesture down the same way a release would.
//!
//! The controller is either idle or running exactly one gesture. Presses that arrive while
//! a gesture is running are rejected with [`GestureError::Busy`] and change nothing.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_gesture::controller::GestureController;
//! use understory_gesture::toolkit::Toolkit;
//!
//! struct Panel {
//!     position: Point,
//!     size: Size,
//!     opacity: f64,
//! }
//!
//! impl Toolkit for Panel {
//!     type Element = &'static str;
//!     type Selector = str;
//!
//!     fn position(&self, _: &&'static str) -> Point { self.position }
//!     fn set_position(&mut self, _: &&'static str, position: Point) { self.position = position; }
//!     fn size(&self, _: &&'static str) -> Size { self.size }
//!     fn set_size(&mut self, _: &&'static str, size: Size) { self.size = size; }
//!     fn opacity(&self, _: &&'static str) -> f64 { self.opacity }
//!     fn set_opacity(&mut self, _: &&'static str, opacity: f64) { self.opacity = opacity; }
//!     fn resolve_handles(&self, _: &&'static str, _: &str) -> Vec<&'static str> {
//!         vec!["grip"]
//!     }
//! }
//!
//! let mut panel = Panel {
//!     position: Point::new(10.0, 20.0),
//!     size: Size::new(200.0, 100.0),
//!     opacity: 1.0,
//! };
//! let mut gestures = GestureController::new();
//! gestures.enable_drag(&mut panel, "panel", None, None);
//!
//! let outcome = gestures.press(&mut panel, &"panel", Point::new(50.0, 50.0)).unwrap();
//! assert!(outcome.prevents_default());
//! assert_eq!(panel.opacity, 0.8);
//!
//! gestures.pointer_move(&mut panel, Point::new(80.0, 90.0));
//! assert_eq!(panel.position, Point::new(40.0, 60.0));
//!
//! assert_eq!(gestures.release(&mut panel), Some("panel"));
//! assert_eq!(panel.opacity, 1.0);
//! assert!(!gestures.is_active());
//! ```

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::error::GestureError;
use crate::session::{GESTURE_OPACITY, GeometryUpdate, GestureMode, Session};
use crate::toolkit::Toolkit;

/// Callback invoked with the target once its gesture ends.
pub type OnComplete<E> = Box<dyn FnMut(&E)>;

/// Result of a press that was not rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// A gesture started on the handle's target.
    Started,
    /// No binding owns the pressed element.
    Unbound,
}

impl PressOutcome {
    /// Whether the host should suppress the press's default action.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// A target made draggable or resizable from a set of handles.
struct Binding<E> {
    target: E,
    handles: Vec<E>,
    mode: GestureMode,
    on_complete: Option<OnComplete<E>>,
}

impl<E: fmt::Debug> fmt::Debug for Binding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("target", &self.target)
            .field("handles", &self.handles)
            .field("mode", &self.mode)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[derive(Debug)]
struct Active<E> {
    session: Session<E>,
    /// Index into `bindings` of the binding that started the session.
    binding: usize,
}

/// Owns the drag/resize bindings and the gesture in progress, if any.
#[derive(Debug)]
pub struct GestureController<E> {
    bindings: Vec<Binding<E>>,
    active: Option<Active<E>>,
}

impl<E> Default for GestureController<E> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            active: None,
        }
    }
}

impl<E: Clone + PartialEq + fmt::Debug> GestureController<E> {
    /// Create an idle controller with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `element` draggable.
    ///
    /// Presses on the handles matched by `handle` within `element` start a move; with no
    /// selector, `element` is its own handle. Returns `element` for chaining.
    ///
    /// Registering the same element twice adds a second binding; presses go to the
    /// binding registered first, so the `on_complete` of a later duplicate is never invoked.
    pub fn enable_drag<T>(
        &mut self,
        toolkit: &mut T,
        element: E,
        handle: Option<&T::Selector>,
        on_complete: Option<OnComplete<E>>,
    ) -> E
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        let handles = match handle {
            Some(selector) => toolkit.resolve_handles(&element, selector),
            None => vec![element.clone()],
        };
        self.bind(toolkit, element, handles, GestureMode::Move, on_complete)
    }

    /// Make `element` resizable from the handles matched by `handle` within it.
    ///
    /// Returns `element` for chaining.
    pub fn enable_resize<T>(
        &mut self,
        toolkit: &mut T,
        element: E,
        handle: &T::Selector,
        on_complete: Option<OnComplete<E>>,
    ) -> E
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        let handles = toolkit.resolve_handles(&element, handle);
        self.bind(toolkit, element, handles, GestureMode::Resize, on_complete)
    }

    fn bind<T>(
        &mut self,
        toolkit: &mut T,
        target: E,
        handles: Vec<E>,
        mode: GestureMode,
        on_complete: Option<OnComplete<E>>,
    ) -> E
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        if handles.is_empty() {
            log::debug!("{mode:?} binding for {target:?} has no handles and will never start");
        } else {
            log::debug!(
                "bound {mode:?} gesture to {target:?} via {} handle(s)",
                handles.len()
            );
        }
        for h in &handles {
            toolkit.listen_press(h);
        }
        self.bindings.push(Binding {
            target: target.clone(),
            handles,
            mode,
            on_complete,
        });
        target
    }

    /// Handle a press on `handle` with the pointer at `pointer`.
    ///
    /// Starting a gesture snapshots the target's geometry and opacity, dims the target to
    /// [`GESTURE_OPACITY`], and asks the toolkit for surface-wide move/release delivery.
    pub fn press<T>(
        &mut self,
        toolkit: &mut T,
        handle: &E,
        pointer: Point,
    ) -> Result<PressOutcome, GestureError<E>>
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        let Some(index) = self.bindings.iter().position(|b| b.handles.contains(handle)) else {
            return Ok(PressOutcome::Unbound);
        };
        if let Some(active) = &self.active {
            log::debug!(
                "press on {handle:?} rejected: gesture on {:?} in progress",
                active.session.target
            );
            return Err(GestureError::Busy {
                active: active.session.target.clone(),
            });
        }

        let binding = &self.bindings[index];
        let target = binding.target.clone();
        let session = Session {
            mode: binding.mode,
            origin_position: toolkit.position(&target),
            origin_size: toolkit.size(&target),
            start_pointer: pointer,
            saved_opacity: toolkit.opacity(&target),
            target,
        };
        toolkit.set_opacity(&session.target, GESTURE_OPACITY);
        toolkit.listen_surface();
        log::debug!(
            "{:?} gesture started on {:?} at {pointer:?}",
            session.mode,
            session.target
        );

        self.active = Some(Active {
            session,
            binding: index,
        });
        Ok(PressOutcome::Started)
    }

    /// Handle a pointer move anywhere on the surface.
    ///
    /// Writes the target's new position or size and returns it. Does nothing and returns
    /// `None` when no gesture is active.
    pub fn pointer_move<T>(&mut self, toolkit: &mut T, pointer: Point) -> Option<GeometryUpdate>
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        let session = &self.active.as_ref()?.session;
        let update = session.update_for(pointer);
        match update {
            GeometryUpdate::Position(position) => toolkit.set_position(&session.target, position),
            GeometryUpdate::Size(size) => toolkit.set_size(&session.target, size),
        }
        log::trace!("{:?} updated to {update:?}", session.target);
        Some(update)
    }

    /// Handle the pointer release that ends the active gesture.
    ///
    /// Restores the target's opacity, stops surface-wide delivery, then invokes the
    /// binding's completion callback. Returns the target, or `None` when idle.
    pub fn release<T>(&mut self, toolkit: &mut T) -> Option<E>
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        self.finish(toolkit, "released")
    }

    /// End the active gesture without a release event.
    ///
    /// Tears down exactly like [`release`](Self::release): the target keeps its last
    /// geometry, opacity is restored and the completion callback runs.
    pub fn cancel<T>(&mut self, toolkit: &mut T) -> Option<E>
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        self.finish(toolkit, "canceled")
    }

    fn finish<T>(&mut self, toolkit: &mut T, how: &str) -> Option<E>
    where
        T: Toolkit<Element = E> + ?Sized,
    {
        let Active { session, binding } = self.active.take()?;
        toolkit.set_opacity(&session.target, session.saved_opacity);
        toolkit.unlisten_surface();
        log::debug!("{:?} gesture on {:?} {how}", session.mode, session.target);

        if let Some(on_complete) = self
            .bindings
            .get_mut(binding)
            .and_then(|b| b.on_complete.as_mut())
        {
            on_complete(&session.target);
        }
        Some(session.target)
    }

    /// Returns `true` while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The gesture in progress, if any.
    pub fn session(&self) -> Option<&Session<E>> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// Number of bindings registered so far.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    /// Every element shares one geometry; enough to exercise the state machine.
    #[derive(Default)]
    struct Flat {
        position: Point,
        size: Size,
        opacity: f64,
        surface_listeners: i32,
    }

    impl Toolkit for Flat {
        type Element = u32;
        type Selector = [u32];

        fn position(&self, _: &u32) -> Point {
            self.position
        }
        fn set_position(&mut self, _: &u32, position: Point) {
            self.position = position;
        }
        fn size(&self, _: &u32) -> Size {
            self.size
        }
        fn set_size(&mut self, _: &u32, size: Size) {
            self.size = size;
        }
        fn opacity(&self, _: &u32) -> f64 {
            self.opacity
        }
        fn set_opacity(&mut self, _: &u32, opacity: f64) {
            self.opacity = opacity;
        }
        fn resolve_handles(&self, _: &u32, selector: &[u32]) -> Vec<u32> {
            selector.to_vec()
        }
        fn listen_surface(&mut self) {
            self.surface_listeners += 1;
        }
        fn unlisten_surface(&mut self) {
            self.surface_listeners -= 1;
        }
    }

    #[test]
    fn new_controller_is_idle() {
        let gestures = GestureController::<u32>::new();

        assert!(!gestures.is_active());
        assert!(gestures.session().is_none());
        assert_eq!(gestures.binding_count(), 0);
    }

    #[test]
    fn press_on_unbound_element_is_ignored() {
        let mut tk = Flat::default();
        let mut gestures = GestureController::new();
        gestures.enable_drag(&mut tk, 1, None, None);

        let outcome = gestures.press(&mut tk, &2, Point::ZERO);

        assert_eq!(outcome, Ok(PressOutcome::Unbound));
        assert!(!outcome.unwrap().prevents_default());
        assert!(!gestures.is_active());
        assert_eq!(tk.surface_listeners, 0);
    }

    #[test]
    fn press_records_session_snapshot() {
        let mut tk = Flat {
            position: Point::new(1.0, 2.0),
            size: Size::new(3.0, 4.0),
            opacity: 0.5,
            ..Flat::default()
        };
        let mut gestures = GestureController::new();
        gestures.enable_resize(&mut tk, 1, &[9][..], None);

        gestures.press(&mut tk, &9, Point::new(5.0, 6.0)).unwrap();

        let session = gestures.session().unwrap();
        assert_eq!(session.target, 1);
        assert_eq!(session.mode, GestureMode::Resize);
        assert_eq!(session.origin_position, Point::new(1.0, 2.0));
        assert_eq!(session.origin_size, Size::new(3.0, 4.0));
        assert_eq!(session.start_pointer, Point::new(5.0, 6.0));
        assert_eq!(session.saved_opacity, 0.5);
        assert_eq!(tk.opacity, GESTURE_OPACITY);
        assert_eq!(tk.surface_listeners, 1);
    }

    #[test]
    fn target_is_not_its_own_handle_for_resize() {
        let mut tk = Flat::default();
        let mut gestures = GestureController::new();
        gestures.enable_resize(&mut tk, 1, &[9][..], None);

        assert_eq!(
            gestures.press(&mut tk, &1, Point::ZERO),
            Ok(PressOutcome::Unbound)
        );
    }

    #[test]
    fn press_while_active_is_rejected_without_side_effects() {
        let mut tk = Flat {
            opacity: 1.0,
            ..Flat::default()
        };
        let mut gestures = GestureController::new();
        gestures.enable_drag(&mut tk, 1, None, None);
        gestures.enable_drag(&mut tk, 2, None, None);
        gestures.press(&mut tk, &1, Point::new(10.0, 10.0)).unwrap();

        let err = gestures.press(&mut tk, &2, Point::new(50.0, 50.0)).unwrap_err();

        assert_eq!(err, GestureError::Busy { active: 1 });
        assert_eq!(gestures.session().unwrap().target, 1);
        assert_eq!(
            gestures.session().unwrap().start_pointer,
            Point::new(10.0, 10.0)
        );
        assert_eq!(tk.surface_listeners, 1);
    }

    #[test]
    fn move_and_release_while_idle_do_nothing() {
        let mut tk = Flat {
            position: Point::new(3.0, 4.0),
            opacity: 0.3,
            ..Flat::default()
        };
        let mut gestures = GestureController::new();
        gestures.enable_drag(&mut tk, 1, None, None);

        assert_eq!(gestures.pointer_move(&mut tk, Point::new(100.0, 100.0)), None);
        assert_eq!(gestures.release(&mut tk), None);
        assert_eq!(gestures.cancel(&mut tk), None);
        assert_eq!(tk.position, Point::new(3.0, 4.0));
        assert_eq!(tk.opacity, 0.3);
        assert_eq!(tk.surface_listeners, 0);
    }

    #[test]
    fn release_returns_to_idle_and_controller_is_reusable() {
        let mut tk = Flat::default();
        let mut gestures = GestureController::new();
        gestures.enable_drag(&mut tk, 1, None, None);

        gestures.press(&mut tk, &1, Point::ZERO).unwrap();
        assert_eq!(gestures.release(&mut tk), Some(1));
        assert!(!gestures.is_active());
        assert_eq!(tk.surface_listeners, 0);

        assert_eq!(gestures.press(&mut tk, &1, Point::ZERO), Ok(PressOutcome::Started));
    }
}
