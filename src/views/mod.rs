mod home;
mod navbar;
mod tokens;

pub use home::Home;
pub use navbar::Navbar;
pub use tokens::Tokens;
