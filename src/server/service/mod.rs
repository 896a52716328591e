//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Room capacity, academic-year scoping and uniqueness checks
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows into `AppError::NotFound` and workflow
//!   failures into `ReservationError`

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod reservation;
pub mod universite;
