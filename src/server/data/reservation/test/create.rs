use super::*;

/// Tests creating a reservation linked to a room and a student.
///
/// Expected: Ok with the student nested in the returned reservation
#[tokio::test]
async fn creates_reservation_with_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chambre = factory::create_chambre(db, None).await?;
    let etudiant = factory::create_etudiant(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            id_reservation: "2023/2024-A-101-12345678".to_string(),
            annee_universitaire: date(2023, 10, 1),
            est_valide: true,
            chambre_id: Some(chambre.id_chambre),
            etudiant_ids: vec![etudiant.id_etudiant],
        })
        .await?;

    assert_eq!(reservation.id_reservation, "2023/2024-A-101-12345678");
    assert_eq!(reservation.chambre_id, Some(chambre.id_chambre));
    assert!(reservation.est_valide);
    assert_eq!(reservation.etudiants.len(), 1);
    assert_eq!(reservation.etudiants[0].cin, etudiant.cin);

    assert!(repo.exists("2023/2024-A-101-12345678").await?);

    Ok(())
}

/// Tests deleting a reservation removes its student links.
///
/// Expected: Ok(true) and no join rows left
#[tokio::test]
async fn delete_removes_student_links() -> Result<(), DbErr> {
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

    let repo = ReservationRepository::new(db);
    assert!(repo.delete_by_id(&reservation.id_reservation).await?);

    assert!(repo.find_all().await?.is_empty());
    assert_eq!(entity::prelude::ReservationEtudiant::find().count(db).await?, 0);
    assert!(!repo.delete_by_id(&reservation.id_reservation).await?);

    Ok(())
}

/// Tests that a link to an unknown student rolls the whole creation back.
///
/// Expected: Err and no reservation row left behind
#[tokio::test]
async fn failed_student_link_leaves_no_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            id_reservation: "2023/2024-A-101-12345678".to_string(),
            annee_universitaire: date(2023, 10, 1),
            est_valide: true,
            chambre_id: None,
            etudiant_ids: vec![424242],
        })
        .await;

    assert!(result.is_err());
    assert!(repo.find_by_id("2023/2024-A-101-12345678").await?.is_none());
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a duplicated student link rolls the whole creation back.
///
/// Expected: Err and neither the reservation nor the first link is kept
#[tokio::test]
async fn duplicate_student_link_leaves_no_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            id_reservation: "2023/2024-A-101-12345678".to_string(),
            annee_universitaire: date(2023, 10, 1),
            est_valide: true,
            chambre_id: None,
            etudiant_ids: vec![etudiant.id_etudiant, etudiant.id_etudiant],
        })
        .await;

    assert!(result.is_err());
    assert!(!repo.exists("2023/2024-A-101-12345678").await?);
    assert_eq!(entity::prelude::ReservationEtudiant::find().count(db).await?, 0);

    Ok(())
}

/// Tests cancelling a reservation detaches it from its room and deletes it.
///
/// Expected: Ok(true) with the room kept, then Ok(false) once gone
#[tokio::test]
async fn cancel_removes_reservation_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chambre = factory::create_chambre(db, None).await?;
    let etudiant = factory::create_etudiant(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .chambre_id(Some(chambre.id_chambre))
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    assert!(repo.cancel(&reservation.id_reservation).await?);

    assert!(repo.find_by_id(&reservation.id_reservation).await?.is_none());
    assert_eq!(entity::prelude::ReservationEtudiant::find().count(db).await?, 0);
    assert!(entity::prelude::Chambre::find_by_id(chambre.id_chambre)
        .one(db)
        .await?
        .is_some());
    assert!(!repo.cancel(&reservation.id_reservation).await?);

    Ok(())
}
