use dioxus::prelude::*;
use crate::views::{ Home, Navbar, Tokens };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/tokens")]
    Tokens,
}
