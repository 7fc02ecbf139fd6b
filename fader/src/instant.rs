use fadedom::element::{find_element, find_element_mut, Element};
use log::debug;

use crate::animate::{apply_end_state, plan_fade, FadeSpec, Speed};
use crate::animator::{Animator, DoneFn};
use crate::selector::Selection;

/// Synchronous fade: every element in the selection jumps straight to
/// the end state, then the completion callback fires, all before
/// `apply` returns. `speed` is accepted and ignored. Calls are
/// processed strictly in call order; each completes before the next
/// begins.
#[derive(Debug, Default)]
pub struct InstantFade;

impl InstantFade {
    pub fn new() -> Self {
        Self
    }
}

impl Animator for InstantFade {
    fn apply(
        &mut self,
        root: &mut Element,
        selection: &Selection,
        spec: &FadeSpec,
        _speed: Speed,
        done: Option<DoneFn>,
    ) {
        for id in selection.ids() {
            let Some(plan) = find_element(root, id).and_then(|el| plan_fade(el, spec)) else {
                continue;
            };
            if let Some(element) = find_element_mut(root, id) {
                debug!("[fade] instant {id}: {spec:?}");
                apply_end_state(element, &plan);
            }
        }

        if let Some(done) = done {
            done();
        }
    }
}
