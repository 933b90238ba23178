pub mod handlers;
pub mod middleware;
pub mod movies;
pub mod routes;
pub mod search;
pub mod ws;

pub use routes::create_router;
