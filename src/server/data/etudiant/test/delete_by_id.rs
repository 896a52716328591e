use super::*;

/// Tests deleting a student removes its reservation links but not the reservation.
///
/// Expected: Ok(true) with no join rows left
#[tokio::test]
async fn deletes_student_and_links() -> Result<(), DbErr> {
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
    assert!(repo.delete_by_id(etudiant.id_etudiant).await?);

    assert!(repo.find_all().await?.is_empty());
    assert_eq!(entity::prelude::ReservationEtudiant::find().count(db).await?, 0);
    assert!(entity::prelude::Reservation::find_by_id(reservation.id_reservation)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
