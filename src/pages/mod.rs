//! Page components, one per route.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod signup;
pub mod studio;
