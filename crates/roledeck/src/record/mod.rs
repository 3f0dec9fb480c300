//! Role records and their card views.

mod display;
mod role;

pub use display::{Badge, DEFAULT_BADGE_COLOR, RoleCard, badge_color, format_to_list};
pub use role::{Column, Record};
