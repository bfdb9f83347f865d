pub use super::cinema_hall::Entity as CinemaHall;
pub use super::movie::Entity as Movie;
pub use super::promotional_banner::Entity as PromotionalBanner;
pub use super::seat::Entity as Seat;
pub use super::showtime::Entity as Showtime;
pub use super::user::Entity as User;
pub use super::user_status::Entity as UserStatus;
