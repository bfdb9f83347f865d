pub mod api;
pub mod banner;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
