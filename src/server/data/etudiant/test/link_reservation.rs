use super::*;

/// Tests that linking the same reservation twice creates a single join row.
///
/// Expected: Ok with exactly one link
#[tokio::test]
async fn linking_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;
    let reservation = factory::create_reservation(db, None).await?;

    let repo = EtudiantRepository::new(db);
    repo.link_reservation(etudiant.id_etudiant, &reservation.id_reservation)
        .await?;
    repo.link_reservation(etudiant.id_etudiant, &reservation.id_reservation)
        .await?;

    let links = entity::prelude::ReservationEtudiant::find()
        .filter(entity::reservation_etudiant::Column::EtudiantId.eq(etudiant.id_etudiant))
        .count(db)
        .await?;
    assert_eq!(links, 1);

    Ok(())
}

/// Tests removing a link.
///
/// Expected: Ok with the reservation no longer listed on the student
#[tokio::test]
async fn unlinks_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;

    let repo = EtudiantRepository::new(db);
    repo.unlink_reservation(etudiant.id_etudiant, &reservation.id_reservation)
        .await?;

    let etudiant = repo.find_by_id(etudiant.id_etudiant).await?.unwrap();
    assert!(etudiant.reservations.is_empty());

    let reservation_still_exists = entity::prelude::Reservation::find_by_id(reservation.id_reservation)
        .one(db)
        .await?;
    assert!(reservation_still_exists.is_some());

    Ok(())
}
