use super::*;

/// Tests deleting an existing foyer.
///
/// Verifies that its blocs and its university stay but no longer point to it.
///
/// Expected: Ok(true) and the foyer is gone from `find_all`
#[tokio::test]
async fn deletes_existing_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::create_foyer(db).await?;
    let other = factory::create_foyer(db).await?;
    let bloc = factory::create_bloc(db, Some(foyer.id_foyer)).await?;
    let universite = factory::universite::UniversiteFactory::new(db)
        .foyer_id(Some(foyer.id_foyer))
        .build()
        .await?;

    let repo = FoyerRepository::new(db);
    let deleted = repo.delete_by_id(foyer.id_foyer).await?;

    assert!(deleted);
    let remaining = repo.find_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id_foyer, other.id_foyer);

    let bloc = entity::prelude::Bloc::find_by_id(bloc.id_bloc).one(db).await?.unwrap();
    assert_eq!(bloc.foyer_id, None);
    let universite = entity::prelude::Universite::find_by_id(universite.id_universite)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(universite.foyer_id, None);

    Ok(())
}

/// Tests deleting a foyer that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoyerRepository::new(db);
    let deleted = repo.delete_by_id(12345).await?;

    assert!(!deleted);

    Ok(())
}
