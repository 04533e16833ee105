pub mod delete_series;
pub mod expand;
pub mod next;
pub mod preview;
pub mod save;
