use super::*;

/// Tests inserting a foyer without an identifier.
///
/// Expected: Ok with a new foyer and no blocs
#[tokio::test]
async fn inserts_foyer_without_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoyerRepository::new(db);
    let foyer = repo
        .upsert(UpsertFoyerParams {
            id_foyer: None,
            nom_foyer: "Foyer Ariana".to_string(),
            capacite_foyer: 300,
        })
        .await?;

    assert_eq!(foyer.nom_foyer, "Foyer Ariana");
    assert_eq!(foyer.capacite_foyer, 300);
    assert!(foyer.blocs.is_empty());

    let stored = entity::prelude::Foyer::find_by_id(foyer.id_foyer).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests updating an existing foyer keeps its blocs.
///
/// Expected: Ok with updated columns and the existing bloc still attached
#[tokio::test]
async fn updates_existing_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_foyer(db).await?;
    factory::create_bloc(db, Some(existing.id_foyer)).await?;

    let repo = FoyerRepository::new(db);
    let foyer = repo
        .upsert(UpsertFoyerParams {
            id_foyer: Some(existing.id_foyer),
            nom_foyer: "Renamed".to_string(),
            capacite_foyer: 42,
        })
        .await?;

    assert_eq!(foyer.id_foyer, existing.id_foyer);
    assert_eq!(foyer.nom_foyer, "Renamed");
    assert_eq!(foyer.capacite_foyer, 42);
    assert_eq!(foyer.blocs.len(), 1);

    let count = entity::prelude::Foyer::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an unknown identifier results in an insert.
///
/// Expected: Ok with a freshly generated id
#[tokio::test]
async fn inserts_when_id_is_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoyerRepository::new(db);
    let foyer = repo
        .upsert(UpsertFoyerParams {
            id_foyer: Some(999),
            nom_foyer: "Foyer".to_string(),
            capacite_foyer: 10,
        })
        .await?;

    assert_eq!(entity::prelude::Foyer::find().all(db).await?.len(), 1);
    assert_eq!(foyer.nom_foyer, "Foyer");

    Ok(())
}
