use super::*;

/// Tests finding the valid reservation of a student by cin.
///
/// An older cancelled reservation of the same student is ignored.
///
/// Expected: Ok(Some) with the valid reservation
#[tokio::test]
async fn finds_valid_reservation_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;
    factory::reservation::ReservationFactory::new(db)
        .est_valide(false)
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;
    let valid = factory::reservation::ReservationFactory::new(db)
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let found = repo.find_valid_by_cin(etudiant.cin).await?;

    assert_eq!(found.map(|r| r.id_reservation), Some(valid.id_reservation));

    Ok(())
}

/// Tests a student without valid reservation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_valid_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.find_valid_by_cin(etudiant.cin).await?.is_none());

    Ok(())
}
