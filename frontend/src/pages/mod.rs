//! Views bound by the route table.
//!
//! Page contents live with the backend features they use, these only hold
//! the shell each route renders.
mod check_in;
mod dialogue;
mod index;
mod information;
mod login;
mod not_found;
mod practice_problem;
mod register;
mod welcome;

pub use check_in::CheckIn;
pub use dialogue::Dialogue;
pub use index::Index;
pub use information::Information;
pub use login::Login;
pub use not_found::NotFound;
pub use practice_problem::PracticeProblem;
pub use register::Register;
pub use welcome::Welcome;
