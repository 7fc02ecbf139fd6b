use std::rc::Rc;

use fadedom::element::Element;

use crate::animate::{FadeSpec, Speed};
use crate::selector::Selection;

/// Completion callback: no arguments, invoked exactly once per `apply`
/// call, after the mutation. Shared so bindings can hand the same
/// callback to repeated dispatches.
pub type DoneFn = Rc<dyn Fn()>;

/// The "apply visual toggle" capability. Implementations mutate every
/// element in the selection's current id set; unknown ids (a stale
/// selection) are skipped. There are no error conditions.
///
/// [`InstantFade`](crate::InstantFade) flips state synchronously and is
/// what tests inject; [`TimedFade`](crate::TimedFade) interpolates over
/// an explicit clock and is the production implementation.
pub trait Animator {
    fn apply(
        &mut self,
        root: &mut Element,
        selection: &Selection,
        spec: &FadeSpec,
        speed: Speed,
        done: Option<DoneFn>,
    );
}
