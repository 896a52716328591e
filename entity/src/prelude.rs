pub use super::bloc::Entity as Bloc;
pub use super::chambre::Entity as Chambre;
pub use super::etudiant::Entity as Etudiant;
pub use super::foyer::Entity as Foyer;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_etudiant::Entity as ReservationEtudiant;
pub use super::universite::Entity as Universite;
