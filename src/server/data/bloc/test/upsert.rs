use super::*;

/// Tests inserting a new bloc attached to a foyer.
///
/// Expected: Ok with the bloc linked to the foyer
#[tokio::test]
async fn inserts_bloc_in_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::create_foyer(db).await?;

    let repo = BlocRepository::new(db);
    let bloc = repo
        .upsert(UpsertBlocParams {
            id_bloc: None,
            nom_bloc: "C".to_string(),
            capacite_bloc: 60,
            foyer_id: Some(foyer.id_foyer),
        })
        .await?;

    assert_eq!(bloc.nom_bloc, "C");
    assert_eq!(bloc.capacite_bloc, 60);
    assert_eq!(bloc.foyer_id, Some(foyer.id_foyer));

    Ok(())
}

/// Tests updating an existing bloc.
///
/// Expected: Ok with the same id and new values
#[tokio::test]
async fn updates_existing_bloc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_bloc(db, None).await?;

    let repo = BlocRepository::new(db);
    let bloc = repo
        .upsert(UpsertBlocParams {
            id_bloc: Some(existing.id_bloc),
            nom_bloc: "Renamed".to_string(),
            capacite_bloc: 5,
            foyer_id: None,
        })
        .await?;

    assert_eq!(bloc.id_bloc, existing.id_bloc);
    assert_eq!(bloc.nom_bloc, "Renamed");
    assert_eq!(repo.find_all().await?.len(), 1);

    Ok(())
}
