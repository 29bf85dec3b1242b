//! View models for the browser frontend.
//!
//! Each view reads the store and builds a serializable model; user events
//! are forwarded to store operations. Views hold no profile data of their
//! own beyond transient form state.

pub mod admin;
pub mod card;
pub mod detail;
pub mod filter;
pub mod map;
pub mod search;
pub mod shell;

pub use admin::{AdminPanel, AdminView, FormError, OpenForm, ProfileForm};
pub use card::ProfileCard;
pub use detail::DetailView;
pub use filter::{FilterOptions, FilterPanel};
pub use map::{MapStatus, MapView};
pub use search::{SearchBar, SearchView};
pub use shell::{Header, MainView};

/// Controller state behind the interactive panels. The HTTP host keeps one
/// set per process, next to the store.
#[derive(Debug, Default)]
pub struct Panels {
    pub search: SearchBar,
    pub filter: FilterPanel,
    pub admin: AdminPanel,
}
