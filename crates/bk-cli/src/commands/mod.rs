pub mod check;
pub mod routes;
pub mod show;
