//! Incremental listing: controller, search debouncer and view projection.

mod controller;
mod debouncer;
mod view;

pub use controller::ListingController;
pub use debouncer::{SearchDebouncer, SearchTarget, DEFAULT_DEBOUNCE};
pub use view::{ListingView, MovieCard, CONTINUE_WATCHING_LEN};
