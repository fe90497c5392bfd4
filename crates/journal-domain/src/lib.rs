pub mod entry;
pub mod entry_list;
pub mod form;

pub use entry::Entry;
pub use entry_list::EntryList;
pub use form::{EntryFormController, SubmitEvent, SubmitOutcome};
