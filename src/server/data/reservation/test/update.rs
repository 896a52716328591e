use super::*;

/// Tests that upserting an existing reservation updates its columns only.
///
/// Expected: Ok with the new validity and the student link preserved
#[tokio::test]
async fn upsert_updates_columns_and_keeps_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let etudiant = factory::create_etudiant(db).await?;
    let existing = factory::reservation::ReservationFactory::new(db)
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .upsert(UpsertReservationParams {
            id_reservation: existing.id_reservation.clone(),
            annee_universitaire: existing.annee_universitaire,
            est_valide: false,
            chambre_id: None,
        })
        .await?;

    assert!(!reservation.est_valide);
    assert_eq!(reservation.etudiants.len(), 1);

    Ok(())
}

/// Tests setting and clearing a reservation's room and validity.
///
/// Expected: Ok(true) for an existing reservation, Ok(false) for a missing one
#[tokio::test]
async fn sets_room_and_validity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chambre = factory::create_chambre(db, None).await?;
    let reservation = factory::create_reservation(db, None).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo
        .set_chambre(&reservation.id_reservation, Some(chambre.id_chambre))
        .await?);
    assert!(repo.set_valide(&reservation.id_reservation, false).await?);

    let stored = repo.find_by_id(&reservation.id_reservation).await?.unwrap();
    assert_eq!(stored.chambre_id, Some(chambre.id_chambre));
    assert!(!stored.est_valide);

    assert!(!repo.set_chambre("missing", None).await?);
    assert!(!repo.set_valide("missing", true).await?);

    Ok(())
}

/// Tests reactivating a cancelled reservation for a new booking.
///
/// Expected: Ok(Some) valid again with the new date and room, the student linked once
#[tokio::test]
async fn reactivates_cancelled_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chambre = factory::create_chambre(db, None).await?;
    let etudiant = factory::create_etudiant(db).await?;
    let other = factory::create_etudiant(db).await?;
    let cancelled = factory::reservation::ReservationFactory::new(db)
        .annee_universitaire(date(2023, 10, 1))
        .est_valide(false)
        .etudiant(etudiant.id_etudiant)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .reactivate(CreateReservationParams {
            id_reservation: cancelled.id_reservation.clone(),
            annee_universitaire: date(2023, 11, 20),
            est_valide: true,
            chambre_id: Some(chambre.id_chambre),
            etudiant_ids: vec![etudiant.id_etudiant, other.id_etudiant],
        })
        .await?
        .unwrap();

    assert!(reservation.est_valide);
    assert_eq!(reservation.annee_universitaire, date(2023, 11, 20));
    assert_eq!(reservation.chambre_id, Some(chambre.id_chambre));
    assert_eq!(reservation.etudiants.len(), 2);

    let missing = repo
        .reactivate(CreateReservationParams {
            id_reservation: "missing".to_string(),
            annee_universitaire: date(2023, 11, 20),
            est_valide: true,
            chambre_id: None,
            etudiant_ids: vec![],
        })
        .await?;
    assert!(missing.is_none());

    Ok(())
}
