pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod text;
pub mod types;

pub use element::{collect_matching, find_element, find_element_mut, visible_in, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, natural_height, LayoutResult, Rect};
pub use types::*;
