// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the gesture controller.

use core::fmt;

/// A press that the controller refused to act on.
#[derive(Clone, PartialEq, Eq)]
pub enum GestureError<E> {
    /// A gesture on `active` is still running; presses are rejected until it is
    /// released or canceled.
    Busy {
        /// Target of the gesture in progress.
        active: E,
    },
}

impl<E> GestureError<E> {
    /// Whether the host should still suppress the press's default action.
    ///
    /// The press landed on a bound handle, so native behavior (text selection,
    /// native drag) is suppressed even though no gesture started.
    pub fn prevents_default(&self) -> bool {
        match self {
            Self::Busy { .. } => true,
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for GestureError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy { active } => write!(f, "GestureError::Busy {{ active: {active:?} }}"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for GestureError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy { active } => {
                write!(f, "a gesture on {active:?} is already in progress")
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for GestureError<E> {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn busy_display_names_active_target() {
        let err = GestureError::Busy { active: 42_u32 };

        assert_eq!(err.to_string(), "a gesture on 42 is already in progress");
    }

    #[test]
    fn busy_still_prevents_default() {
        assert!(GestureError::Busy { active: 1_u32 }.prevents_default());
    }
}
