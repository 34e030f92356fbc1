// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: pointer-driven drag and resize for UI elements.
//!
//! A user presses on a handle, moves the pointer, and the target element's position or size
//! follows live until release, when a completion callback fires. This crate holds the state
//! machine for that interaction and nothing else:
//!
//! - [`controller`]: bindings plus the idle/active press → move → release machine
//! - [`session`]: the geometry snapshot of an active gesture and the delta law applied on move
//! - [`toolkit`]: the trait a host implements to expose element geometry and event routing
//! - [`error`]: the press-rejection error
//!
//! ## Design
//!
//! - **Explicit session**: the gesture in progress is a [`session::Session`] value owned by a
//!   [`controller::GestureController`], not ambient global state. Independent controllers
//!   (one per surface, say) do not interfere.
//! - **One gesture at a time**: a press while a gesture is active is rejected with
//!   [`error::GestureError::Busy`] instead of silently replacing the running gesture.
//! - **No drift**: every update is computed from the geometry and pointer position captured at
//!   press time, so the final geometry only depends on the final pointer position.
//! - **Toolkit agnostic**: elements are any `Clone + PartialEq + Debug` identifier chosen by the
//!   host's [`toolkit::Toolkit`] implementation.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_gesture::controller::GestureController;
//! use understory_gesture::session::GeometryUpdate;
//! use understory_gesture::toolkit::Toolkit;
//!
//! struct Window {
//!     size: Size,
//!     opacity: f64,
//! }
//!
//! impl Toolkit for Window {
//!     type Element = u32;
//!     type Selector = str;
//!
//!     fn position(&self, _: &u32) -> Point { Point::ZERO }
//!     fn set_position(&mut self, _: &u32, _: Point) {}
//!     fn size(&self, _: &u32) -> Size { self.size }
//!     fn set_size(&mut self, _: &u32, size: Size) { self.size = size; }
//!     fn opacity(&self, _: &u32) -> f64 { self.opacity }
//!     fn set_opacity(&mut self, _: &u32, opacity: f64) { self.opacity = opacity; }
//!     fn resolve_handles(&self, element: &u32, selector: &str) -> Vec<u32> {
//!         // Element 1 has a single grip, element 2.
//!         if *element == 1 && selector == ".grip" { vec![2] } else { vec![] }
//!     }
//! }
//!
//! let mut window = Window { size: Size::new(200.0, 100.0), opacity: 1.0 };
//! let mut gestures = GestureController::new();
//! gestures.enable_resize(&mut window, 1, ".grip", None);
//!
//! gestures.press(&mut window, &2, Point::new(300.0, 300.0)).unwrap();
//! let update = gestures.pointer_move(&mut window, Point::new(250.0, 260.0));
//! assert_eq!(update, Some(GeometryUpdate::Size(Size::new(150.0, 60.0))));
//!
//! // Dragging past the origin floors the size at zero.
//! gestures.pointer_move(&mut window, Point::new(0.0, 0.0));
//! assert_eq!(window.size, Size::new(0.0, 0.0));
//!
//! gestures.release(&mut window);
//! assert_eq!(window.opacity, 1.0);
//! ```
//!
//! ## Logging
//!
//! Gesture start, end and rejected presses are reported at `debug` level and every geometry
//! update at `trace` level through the [`log`] facade. No logger is installed by this crate.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and `log` against the standard library.
//! - `libm`: use Kurbo's `libm` backend for `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod controller;
pub mod error;
pub mod session;
pub mod toolkit;
