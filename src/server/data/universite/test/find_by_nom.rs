use super::*;

/// Tests finding a university by name.
///
/// Expected: Ok(Some) with the matching university
#[tokio::test]
async fn finds_universite_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_universite(db).await?;
    let target = factory::universite::UniversiteFactory::new(db)
        .nom_universite("Universite de Carthage")
        .build()
        .await?;

    let repo = UniversiteRepository::new(db);
    let found = repo.find_by_nom("Universite de Carthage").await?;

    assert_eq!(found.map(|u| u.id_universite), Some(target.id_universite));

    Ok(())
}

/// Tests looking up an unknown university name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UniversiteRepository::new(db);
    let found = repo.find_by_nom("Unknown").await?;

    assert!(found.is_none());

    Ok(())
}
