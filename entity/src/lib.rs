pub mod prelude;

pub mod cinema_hall;
pub mod movie;
pub mod promotional_banner;
pub mod seat;
pub mod showtime;
pub mod user;
pub mod user_status;
