// Copyright 2026 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: walk a front-to-back hit list and honor stop outcomes.
//!
//! [`Outcome`] only controls propagation. Whatever the handler wants to
//! record (focus requests, actions, "handled") lives on the `event` value it
//! is given.
//!
//! ```
//! use tessera_responder::dispatcher::{self, Outcome};
//!
//! // Front-to-back candidates; the second one handles the event.
//! let hits = [3_u32, 2, 1];
//! let mut seen = Vec::new();
//! let stopped = dispatcher::run(&hits, &mut seen, |node, seen| {
//!     seen.push(*node);
//!     if *node == 2 { Outcome::Stop } else { Outcome::Continue }
//! });
//!
//! assert_eq!(stopped, Some(&2));
//! assert_eq!(seen, [3, 2]);
//! ```

/// Propagation control returned by a handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Offer the event to the next entry.
    Continue,
    /// The event was handled; stop here.
    Stop,
}

impl Outcome {
    /// `Stop` if `handled`, else `Continue`.
    pub fn from_handled(handled: bool) -> Self {
        if handled { Self::Stop } else { Self::Continue }
    }
}

/// Run a handler over `seq` in order until one returns [`Outcome::Stop`].
///
/// Returns the entry that stopped propagation, or `None` if every entry was
/// visited.
pub fn run<'a, K, E>(
    seq: &'a [K],
    event: &mut E,
    mut handler: impl FnMut(&K, &mut E) -> Outcome,
) -> Option<&'a K> {
    for k in seq {
        match handler(k, event) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(k),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn continue_through_all() {
        let seq = [1_u32, 2, 3];
        let mut seen: Vec<u32> = Vec::new();
        let stopped = run(&seq, &mut seen, |k, seen| {
            seen.push(*k);
            Outcome::Continue
        });
        assert!(stopped.is_none());
        assert_eq!(seen, seq);
    }

    #[test]
    fn stop_at_first() {
        let seq = [1_u32, 2, 3];
        let mut count = 0;
        let stopped = run(&seq, &mut count, |_, count| {
            *count += 1;
            Outcome::Stop
        });
        assert_eq!(stopped, Some(&1));
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_sequence() {
        let seq: [u32; 0] = [];
        assert!(run(&seq, &mut (), |_, _| Outcome::Stop).is_none());
    }

    #[test]
    fn from_handled() {
        assert_eq!(Outcome::from_handled(true), Outcome::Stop);
        assert_eq!(Outcome::from_handled(false), Outcome::Continue);
    }
}
