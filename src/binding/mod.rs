mod binding_render;
mod binding_state;
mod suggestion_list;

pub use binding_render::{render_field, render_popup};
pub use binding_state::FieldBinding;
pub use suggestion_list::SuggestionList;
