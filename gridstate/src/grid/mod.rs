//! The grid state controller: single source of truth for pagination,
//! sorting, filtering, selection, expansion, column order and the working
//! row collection.

mod drag;
mod state;
mod view;

pub use state::{Grid, GridId, GridSnapshot};
pub use view::PageView;
