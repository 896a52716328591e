use super::*;

/// Tests finding a foyer by its name.
///
/// Expected: Ok(Some) with the matching foyer
#[tokio::test]
async fn finds_foyer_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_foyer(db).await?;
    let target = factory::foyer::FoyerFactory::new(db)
        .nom_foyer("Foyer Manouba")
        .build()
        .await?;

    let repo = FoyerRepository::new(db);
    let result = repo.find_by_nom("Foyer Manouba").await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().id_foyer, target.id_foyer);

    Ok(())
}

/// Tests looking up a name that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_foyer(db).await?;

    let repo = FoyerRepository::new(db);
    let result = repo.find_by_nom("Nowhere").await?;

    assert!(result.is_none());

    Ok(())
}
