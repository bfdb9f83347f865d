//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Request Validation**: Normalizing raw request text before anything is stored

pub mod banner;
pub mod hall;
pub mod movie;
pub mod seat;
pub mod showtime;
pub mod user;
