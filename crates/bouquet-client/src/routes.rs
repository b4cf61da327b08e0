//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Bouquet builder.
    #[at("/")]
    Home,
    /// Last captured panic.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
