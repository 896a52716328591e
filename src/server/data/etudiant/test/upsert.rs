use super::*;

/// Tests inserting a new student.
///
/// Expected: Ok with no reservations listed
#[tokio::test]
async fn inserts_etudiant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EtudiantRepository::new(db);
    let etudiant = repo
        .upsert(UpsertEtudiantParams {
            id_etudiant: None,
            nom_et: "Ben Salah".to_string(),
            prenom_et: "Amira".to_string(),
            cin: 11223344,
            ecole: "ESPRIT".to_string(),
            date_naissance: NaiveDate::from_ymd_opt(2002, 5, 17).unwrap(),
        })
        .await?;

    assert_eq!(etudiant.cin, 11223344);
    assert!(etudiant.reservations.is_empty());
    assert!(repo.find_by_cin(11223344).await?.is_some());

    Ok(())
}

/// Tests that updating a student keeps its reservation links.
///
/// Expected: Ok with new values and the reservation still listed
#[tokio::test]
async fn update_keeps_reservation_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_etudiant(db).await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .etudiant(existing.id_etudiant)
        .build()
        .await?;

    let repo = EtudiantRepository::new(db);
    let etudiant = repo
        .upsert(UpsertEtudiantParams {
            id_etudiant: Some(existing.id_etudiant),
            nom_et: existing.nom_et.clone(),
            prenom_et: existing.prenom_et.clone(),
            cin: existing.cin,
            ecole: "ENIT".to_string(),
            date_naissance: existing.date_naissance,
        })
        .await?;

    assert_eq!(etudiant.id_etudiant, existing.id_etudiant);
    assert_eq!(etudiant.ecole, "ENIT");
    assert_eq!(etudiant.reservations, vec![reservation.id_reservation]);

    Ok(())
}
