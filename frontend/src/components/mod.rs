pub mod button;
pub mod footer;
pub mod navbar;
pub mod text_input;

pub use button::{Button, ButtonVariant};
pub use footer::Footer;
pub use navbar::Navbar;
pub use text_input::TextInput;
