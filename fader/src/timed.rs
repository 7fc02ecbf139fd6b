//! Time-based fades driven by an explicit clock.
//!
//! `apply` captures per-element start/end values and starts active
//! fades; `advance` writes interpolated values into the tree and, when
//! a call's fades have all completed, applies the exact end state and
//! fires that call's completion callback once.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use fadedom::element::{find_element, find_element_mut, Element};
use fadedom::types::Size;
use log::debug;

use crate::animate::{apply_end_state, plan_fade, FadePlan, FadeSpec, Speed};
use crate::animator::{Animator, DoneFn};
use crate::selector::Selection;

/// Easing function for fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// One in-flight fade for one element.
#[derive(Debug, Clone)]
struct ActiveFade {
    plan: FadePlan,
    start: Instant,
    duration: Duration,
    easing: Easing,
    batch: u64,
}

impl ActiveFade {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Completion bookkeeping for one `apply` call.
struct Batch {
    remaining: usize,
    done: Option<DoneFn>,
}

/// The production animator: interpolates opacity and height over time.
/// Reveals set the display up front so the element occupies layout
/// while fading in; conceals hide the element only at completion.
#[derive(Default)]
pub struct TimedFade {
    active: Vec<ActiveFade>,
    batches: HashMap<u64, Batch>,
    next_batch: u64,
    easing: Easing,
    /// When enabled, fades complete instantly (accessibility).
    reduced_motion: bool,
}

impl TimedFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true while any fade is in flight.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Start fades at an explicit instant. The [`Animator`] impl calls
    /// this with `Instant::now()`.
    pub fn apply_at(
        &mut self,
        root: &mut Element,
        selection: &Selection,
        spec: &FadeSpec,
        speed: Speed,
        done: Option<DoneFn>,
        now: Instant,
    ) {
        if self.reduced_motion {
            // Jump straight to end state, like the instant animator
            for id in selection.ids() {
                self.carry_restore_record(root, id);
                let Some(plan) = find_element(root, id).and_then(|el| plan_fade(el, spec)) else {
                    continue;
                };
                self.retire_fades_for(id);
                if let Some(element) = find_element_mut(root, id) {
                    apply_end_state(element, &plan);
                }
            }
            if let Some(done) = done {
                done();
            }
            return;
        }

        let batch = self.next_batch;
        self.next_batch += 1;
        let mut started = 0usize;

        for id in selection.ids() {
            // A superseded conceal has not written its restore record
            // yet; install it before planning so the replacement does
            // not snapshot mid-fade values.
            self.carry_restore_record(root, id);
            let Some(plan) = find_element(root, id).and_then(|el| plan_fade(el, spec)) else {
                continue;
            };
            let Some(element) = find_element_mut(root, id) else {
                continue;
            };

            // A new fade for the same element supersedes the old one
            self.retire_fades_for(id);

            start_state(element, &plan);
            debug!("[fade] timed {id}: {spec:?} over {:?}", speed.duration());

            self.active.push(ActiveFade {
                plan,
                start: now,
                duration: speed.duration(),
                easing: self.easing,
                batch,
            });
            started += 1;
        }

        if started == 0 {
            // No-op call still gets its callback, exactly once
            if let Some(done) = done {
                done();
            }
            return;
        }

        self.batches.insert(
            batch,
            Batch {
                remaining: started,
                done,
            },
        );
    }

    /// Write interpolated values into the tree for the given instant.
    /// Completed fades apply their exact end state and are pruned; a
    /// batch whose fades have all settled fires its callback.
    pub fn advance(&mut self, root: &mut Element, now: Instant) {
        let mut settled: Vec<u64> = Vec::new();

        self.active.retain_mut(|fade| {
            let Some(element) = find_element_mut(root, &fade.plan.element_id) else {
                // Element left the tree mid-fade
                settled.push(fade.batch);
                return false;
            };

            let progress = fade.progress(now);
            if progress >= 1.0 {
                apply_end_state(element, &fade.plan);
                settled.push(fade.batch);
                return false;
            }

            let eased = fade.easing.apply(progress);
            if let Some((from, to)) = fade.plan.opacity {
                element.style.opacity = from + (to - from) * eased;
            }
            if let Some((from, to)) = fade.plan.height {
                element.height = Size::Fixed(lerp_u16(from, to, eased));
            }
            true
        });

        for batch in settled {
            self.settle_one(batch);
        }
    }

    /// Move the restore record of an in-flight fade onto the element
    /// itself, unless the element already carries one.
    fn carry_restore_record(&self, root: &mut Element, id: &str) {
        let carried = self
            .active
            .iter()
            .filter(|fade| fade.plan.element_id == id)
            .find_map(|fade| fade.plan.save);
        if let Some(record) = carried {
            if let Some(element) = find_element_mut(root, id) {
                if element.saved.is_none() {
                    element.saved = Some(record);
                }
            }
        }
    }

    /// Drop in-flight fades for an element, settling their batches
    /// without jumping the element to an end state.
    fn retire_fades_for(&mut self, id: &str) {
        let mut settled: Vec<u64> = Vec::new();
        self.active.retain(|fade| {
            if fade.plan.element_id == id {
                settled.push(fade.batch);
                false
            } else {
                true
            }
        });
        for batch in settled {
            self.settle_one(batch);
        }
    }

    fn settle_one(&mut self, batch: u64) {
        let finished = match self.batches.get_mut(&batch) {
            Some(entry) => {
                entry.remaining = entry.remaining.saturating_sub(1);
                entry.remaining == 0
            }
            None => false,
        };
        if finished {
            if let Some(entry) = self.batches.remove(&batch) {
                if let Some(done) = entry.done {
                    done();
                }
            }
        }
    }
}

impl Animator for TimedFade {
    fn apply(
        &mut self,
        root: &mut Element,
        selection: &Selection,
        spec: &FadeSpec,
        speed: Speed,
        done: Option<DoneFn>,
    ) {
        self.apply_at(root, selection, spec, speed, done, Instant::now());
    }
}

/// Put an element into the starting state of a fade: reveals become
/// visible at their from-values, conceals animate from where they are.
fn start_state(element: &mut Element, plan: &FadePlan) {
    if let Some(display) = plan.reveal_display {
        element.style.display = display;
    }
    if plan.reveal_display.is_some() {
        if let Some((from, _)) = plan.opacity {
            element.style.opacity = from;
        }
        if let Some((from, _)) = plan.height {
            element.height = Size::Fixed(from);
        }
    }
}

/// Linear interpolation for u16 values.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
