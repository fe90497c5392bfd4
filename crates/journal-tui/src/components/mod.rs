pub mod compose_box;
pub mod entry_list;
pub mod text_layout;

pub use compose_box::*;
pub use entry_list::*;
