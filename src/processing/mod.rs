pub mod heart;
pub mod laptop;
pub mod recommend;
pub mod spam;
