mod banner;
mod hall;
mod movie;
mod seat;
mod showtime;
mod user;
mod user_status;
