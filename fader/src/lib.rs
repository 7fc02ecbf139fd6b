pub mod animate;
pub mod animator;
pub mod dispatch;
pub mod instant;
pub mod selector;
pub mod timed;

pub use animate::{FadeSpec, FadeTarget, Speed};
pub use animator::{Animator, DoneFn};
pub use dispatch::{DispatchResult, Stage};
pub use instant::InstantFade;
pub use selector::{Matcher, Selection, SelectorError};
pub use timed::{Easing, TimedFade};
