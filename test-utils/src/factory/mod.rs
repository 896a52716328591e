//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! directly through SeaORM active models, so they work against any `TestBuilder`
//! schema that contains the required tables.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let foyer = factory::create_foyer(&db).await?;
//! let bloc = factory::create_bloc(&db, Some(foyer.id_foyer)).await?;
//! let chambre = factory::create_chambre(&db, Some(bloc.id_bloc)).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::TypeChambre;
//! use test_utils::factory::chambre::ChambreFactory;
//!
//! let chambre = ChambreFactory::new(&db, Some(bloc.id_bloc))
//!     .numero_chambre(101)
//!     .type_c(TypeChambre::Double)
//!     .build()
//!     .await?;
//! ```

pub mod bloc;
pub mod chambre;
pub mod etudiant;
pub mod foyer;
pub mod helpers;
pub mod reservation;
pub mod universite;

pub use bloc::create_bloc;
pub use chambre::create_chambre;
pub use etudiant::create_etudiant;
pub use foyer::create_foyer;
pub use reservation::create_reservation;
pub use universite::create_universite;
