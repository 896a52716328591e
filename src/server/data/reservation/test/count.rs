use super::*;

/// Tests counting valid reservations of a room inside a date range.
///
/// Invalid reservations, reservations of other rooms and reservations outside
/// the range are not counted. Range bounds are inclusive.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_valid_reservations_of_room_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chambre = factory::create_chambre(db, None).await?;
    let other = factory::create_chambre(db, None).await?;

    for (anchor, valide, chambre_id) in [
        (date(2023, 9, 15), true, chambre.id_chambre),
        (date(2024, 6, 30), true, chambre.id_chambre),
        (date(2024, 1, 10), false, chambre.id_chambre),
        (date(2023, 9, 14), true, chambre.id_chambre),
        (date(2024, 1, 10), true, other.id_chambre),
    ] {
        factory::reservation::ReservationFactory::new(db)
            .annee_universitaire(anchor)
            .est_valide(valide)
            .chambre_id(Some(chambre_id))
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let count = repo
        .count_valid_by_chambre_between(chambre.id_chambre, date(2023, 9, 15), date(2024, 6, 30))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting all reservations in a range whatever their validity.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_all_reservations_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (anchor, valide) in [
        (date(2023, 10, 1), true),
        (date(2023, 11, 1), false),
        (date(2022, 10, 1), true),
    ] {
        factory::reservation::ReservationFactory::new(db)
            .annee_universitaire(anchor)
            .est_valide(valide)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);

    assert_eq!(
        repo.count_between(date(2023, 9, 15), date(2024, 6, 30)).await?,
        2
    );
    assert_eq!(
        repo.find_valid_ids_between(date(2023, 9, 15), date(2024, 6, 30))
            .await?
            .len(),
        1
    );

    Ok(())
}
