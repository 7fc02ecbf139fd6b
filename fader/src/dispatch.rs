//! Click-to-fade bindings and event dispatch.
//!
//! `Stage` owns the element tree, the injected animator and the binding
//! table. Bindings are data (trigger matcher -> target matcher + spec),
//! resolved against the current tree at dispatch time.

use fadedom::element::Element;
use fadedom::event::Event;
use fadedom::hit::hit_test;
use fadedom::layout::{layout, Rect};
use log::debug;

use crate::animate::{FadeSpec, Speed};
use crate::animator::{Animator, DoneFn};
use crate::selector::{Matcher, Selection, SelectorError};

/// Result of event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Event was not handled.
    NotHandled,
    /// Event fired this many bindings.
    Handled(usize),
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

/// A registered trigger: clicking an element matched by `trigger` fades
/// the elements matched by `target`.
struct FadeBinding {
    trigger: Matcher,
    target: Matcher,
    spec: FadeSpec,
    speed: Speed,
    done: Option<DoneFn>,
}

/// The runtime: tree + injected animator + bindings.
pub struct Stage {
    root: Element,
    animator: Box<dyn Animator>,
    bindings: Vec<FadeBinding>,
    viewport: Rect,
}

impl Stage {
    pub fn new(root: Element, animator: Box<dyn Animator>) -> Self {
        Self {
            root,
            animator,
            bindings: Vec::new(),
            viewport: Rect::from_size(80, 24),
        }
    }

    pub fn viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = Rect::from_size(width, height);
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn animator_mut(&mut self) -> &mut dyn Animator {
        self.animator.as_mut()
    }

    /// Register a click-to-fade binding. Selections are resolved at
    /// dispatch time, so elements added later still participate.
    pub fn bind_fade(
        &mut self,
        trigger: &str,
        target: &str,
        spec: FadeSpec,
        speed: Speed,
        done: Option<DoneFn>,
    ) -> Result<&mut Self, SelectorError> {
        let binding = FadeBinding {
            trigger: Matcher::parse(trigger)?,
            target: Matcher::parse(target)?,
            spec,
            speed,
            done,
        };
        self.bindings.push(binding);
        Ok(self)
    }

    /// Apply a fade directly, without going through a binding.
    /// Chainable, like the call convention it stands in for.
    pub fn animate(&mut self, selector: &str, spec: FadeSpec, speed: Speed) -> &mut Self {
        match Matcher::parse(selector) {
            Ok(matcher) => {
                let selection = Selection::resolve(&self.root, &matcher);
                self.animator
                    .apply(&mut self.root, &selection, &spec, speed, None);
            }
            Err(err) => debug!("[stage] animate {selector:?} skipped: {err}"),
        }
        self
    }

    /// Route an event. Click events are matched against the binding
    /// table; bindings fire in registration order, each completing
    /// (mutation + callback) before the next. Everything else is
    /// `NotHandled`.
    pub fn dispatch(&mut self, event: &Event) -> DispatchResult {
        let Event::Click { target, x, y, .. } = event else {
            return DispatchResult::NotHandled;
        };

        let clicked = match target {
            Some(id) => Some(id.clone()),
            None => {
                let rects = layout(&self.root, self.viewport);
                hit_test(&rects, &self.root, *x, *y)
            }
        };
        let Some(clicked) = clicked else {
            return DispatchResult::NotHandled;
        };

        let mut fired = 0usize;
        for index in 0..self.bindings.len() {
            let triggered = {
                let binding = &self.bindings[index];
                Selection::resolve(&self.root, &binding.trigger).contains(&clicked)
            };
            if !triggered {
                continue;
            }

            let binding = &self.bindings[index];
            let selection = Selection::resolve(&self.root, &binding.target);
            let spec = binding.spec;
            let speed = binding.speed;
            let done = binding.done.clone();
            debug!("[stage] click on {clicked} fires binding {index}");
            self.animator
                .apply(&mut self.root, &selection, &spec, speed, done);
            fired += 1;
        }

        if fired == 0 {
            DispatchResult::NotHandled
        } else {
            DispatchResult::Handled(fired)
        }
    }
}
