pub mod heart;
pub mod laptop;
pub mod movie;
