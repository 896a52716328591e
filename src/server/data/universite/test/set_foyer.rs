use super::*;

/// Tests linking then unlinking a foyer.
///
/// Expected: Ok(Some) with the foyer set, then Ok(Some) with no foyer
#[tokio::test]
async fn links_and_unlinks_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::create_foyer(db).await?;
    let universite = factory::create_universite(db).await?;

    let repo = UniversiteRepository::new(db);

    let linked = repo
        .set_foyer(universite.id_universite, Some(foyer.id_foyer))
        .await?
        .unwrap();
    assert_eq!(linked.foyer.map(|f| f.id_foyer), Some(foyer.id_foyer));

    let unlinked = repo
        .set_foyer(universite.id_universite, None)
        .await?
        .unwrap();
    assert!(unlinked.foyer.is_none());

    Ok(())
}

/// Tests setting the foyer of a missing university.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_universite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UniversiteRepository::new(db);
    let result = repo.set_foyer(404, None).await?;

    assert!(result.is_none());

    Ok(())
}
