//! Fade specifications and per-element fade planning.
//!
//! A [`FadeSpec`] is the `{height: "toggle", opacity: "toggle"}` property
//! map of the original call convention, typed. Planning resolves a spec
//! against an element's current state into concrete start/end values plus
//! the display and restore-record bookkeeping, so the instant and timed
//! animators share one set of semantics.

use std::time::Duration;

use fadedom::element::Element;
use fadedom::types::{Display, SavedVisual, Size};

/// Direction sentinel for a fadeable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTarget {
    /// Flip on the element's current shown-ness.
    Toggle,
    Show,
    Hide,
}

impl FadeTarget {
    /// Whether this target reveals the element, given its current
    /// shown-ness. `None` means no-op (e.g. `Show` on a shown element).
    fn reveals(self, shown: bool) -> Option<bool> {
        match self {
            FadeTarget::Toggle => Some(!shown),
            FadeTarget::Show => (!shown).then_some(true),
            FadeTarget::Hide => shown.then_some(false),
        }
    }
}

/// The property map of an animate-style call. Properties left `None`
/// are untouched; there is no validation and no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FadeSpec {
    pub opacity: Option<FadeTarget>,
    pub height: Option<FadeTarget>,
}

impl FadeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{height: "toggle", opacity: "toggle"}` shape.
    pub fn toggle() -> Self {
        Self {
            opacity: Some(FadeTarget::Toggle),
            height: Some(FadeTarget::Toggle),
        }
    }

    pub fn show() -> Self {
        Self {
            opacity: Some(FadeTarget::Show),
            height: Some(FadeTarget::Show),
        }
    }

    pub fn hide() -> Self {
        Self {
            opacity: Some(FadeTarget::Hide),
            height: Some(FadeTarget::Hide),
        }
    }

    pub fn opacity(mut self, target: FadeTarget) -> Self {
        self.opacity = Some(target);
        self
    }

    pub fn height(mut self, target: FadeTarget) -> Self {
        self.height = Some(target);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.height.is_none()
    }
}

/// Duration label accepted by animate-style calls. The instant animator
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Fast,
    Millis(u64),
}

impl Speed {
    pub fn duration(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(600),
            Speed::Fast => Duration::from_millis(200),
            Speed::Millis(ms) => Duration::from_millis(ms),
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        // Conventional default duration
        Speed::Millis(400)
    }
}

/// Resolved fade for one element: start/end values for the animated
/// properties plus display and restore-record bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FadePlan {
    pub element_id: String,
    /// Set `display: Block` before the fade starts (reveals occupy
    /// layout while fading in).
    pub reveal_display: Option<Display>,
    /// Set `display: None` once the fade completes.
    pub conceal_display: bool,
    /// (from, to) opacity, when the spec names opacity.
    pub opacity: Option<(f32, f32)>,
    /// (from, to) height in rows, when the spec names height.
    pub height: Option<(u16, u16)>,
    /// Height to install at completion (restores `Auto` instead of
    /// freezing the interpolated row count).
    pub final_height: Option<Size>,
    /// Restore record to write at completion of a conceal.
    pub save: Option<SavedVisual>,
    /// The reveal consumed the element's restore record.
    pub clear_saved: bool,
}

/// Resolve a spec against one element. Returns `None` when the spec is
/// a no-op for this element (nothing named, or show/hide already
/// satisfied).
pub(crate) fn plan_fade(element: &Element, spec: &FadeSpec) -> Option<FadePlan> {
    let shown = element.is_shown();

    // Display rides on the height target. A height fade keys its
    // direction on shown-ness and carries opacity with it; an
    // opacity-only fade keys on the current opacity value and leaves
    // display and height alone.
    let height_reveals = spec.height.and_then(|t| t.reveals(shown));
    let opacity_reveals = match (spec.opacity, height_reveals) {
        (None, _) => None,
        (Some(_), Some(direction)) => Some(direction),
        (Some(t), None) => t.reveals(element.style.opacity > 0.0),
    };
    let reveals = height_reveals.or(opacity_reveals)?;

    let saved = element.saved;
    let natural = fadedom::layout::natural_height(element);

    if reveals {
        let end_opacity = match saved.map(|s| s.opacity) {
            Some(o) if o > 0.0 => o,
            _ => 1.0,
        };
        let end_height = match saved.map(|s| s.height) {
            Some(h) if !h.is_collapsed() => h,
            _ if element.height.is_collapsed() => Size::Auto,
            _ => element.height,
        };
        let end_display = saved.map(|s| s.display).unwrap_or(Display::Block);
        let end_rows = match end_height {
            Size::Fixed(h) => h,
            Size::Auto => natural,
        };

        Some(FadePlan {
            element_id: element.id.clone(),
            reveal_display: height_reveals.map(|_| match end_display {
                Display::None => Display::Block,
                other => other,
            }),
            conceal_display: false,
            opacity: opacity_reveals.map(|_| (0.0, end_opacity)),
            height: height_reveals.map(|_| (0, end_rows)),
            final_height: height_reveals.map(|_| end_height),
            save: None,
            // The restore record belongs to the height/display pair;
            // an opacity-only reveal leaves it for a later height fade.
            clear_saved: height_reveals.is_some(),
        })
    } else {
        let current_rows = match element.height {
            Size::Fixed(h) => h,
            Size::Auto => natural,
        };

        Some(FadePlan {
            element_id: element.id.clone(),
            reveal_display: None,
            conceal_display: height_reveals.is_some(),
            opacity: opacity_reveals.map(|_| (element.style.opacity, 0.0)),
            height: height_reveals.map(|_| (current_rows, 0)),
            final_height: height_reveals.map(|_| Size::Fixed(0)),
            // An existing record predates this fade; re-snapshotting
            // would capture already-faded values.
            save: Some(saved.unwrap_or(SavedVisual {
                height: element.height,
                opacity: element.style.opacity,
                display: element.style.display,
            })),
            clear_saved: false,
        })
    }
}

/// Jump an element straight to the end state of a plan. Used by the
/// instant animator and by timed completion.
pub(crate) fn apply_end_state(element: &mut Element, plan: &FadePlan) {
    if let Some(display) = plan.reveal_display {
        element.style.display = display;
    }
    if let Some((_, to)) = plan.opacity {
        element.style.opacity = to;
    }
    if let Some(height) = plan.final_height {
        element.height = height;
    }
    if plan.conceal_display {
        element.style.display = Display::None;
    }
    if let Some(save) = plan.save {
        element.saved = Some(save);
    }
    if plan.clear_saved {
        element.saved = None;
    }
}
