//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and numbers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room together with the foyer and bloc it lives in.
///
/// All entities use factory defaults. Use the individual factories when a test
/// needs specific names, numbers or room types.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((foyer, bloc, chambre))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_chambre_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::foyer::Model,
        entity::bloc::Model,
        entity::chambre::Model,
    ),
    DbErr,
> {
    let foyer = crate::factory::foyer::create_foyer(db).await?;
    let bloc = crate::factory::bloc::create_bloc(db, Some(foyer.id_foyer)).await?;
    let chambre = crate::factory::chambre::create_chambre(db, Some(bloc.id_bloc)).await?;

    Ok((foyer, bloc, chambre))
}
