use super::*;

/// Tests inserting a university linked to an existing foyer.
///
/// Expected: Ok with the nested foyer loaded
#[tokio::test]
async fn inserts_universite_with_foyer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::create_foyer(db).await?;

    let repo = UniversiteRepository::new(db);
    let universite = repo
        .upsert(UpsertUniversiteParams {
            id_universite: None,
            nom_universite: "ESPRIT".to_string(),
            adresse: "Ariana".to_string(),
            foyer_id: Some(foyer.id_foyer),
        })
        .await?;

    assert_eq!(universite.nom_universite, "ESPRIT");
    assert_eq!(
        universite.foyer.map(|f| f.id_foyer),
        Some(foyer.id_foyer)
    );

    Ok(())
}

/// Tests that linking a foyer already owned elsewhere moves it.
///
/// A foyer belongs to at most one university, so the previous owner loses it.
///
/// Expected: Ok with the foyer detached from the first university
#[tokio::test]
async fn moves_foyer_from_previous_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_housing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::create_foyer(db).await?;
    let first = factory::universite::UniversiteFactory::new(db)
        .foyer_id(Some(foyer.id_foyer))
        .build()
        .await?;
    let second = factory::create_universite(db).await?;

    let repo = UniversiteRepository::new(db);
    let updated = repo
        .upsert(UpsertUniversiteParams {
            id_universite: Some(second.id_universite),
            nom_universite: second.nom_universite.clone(),
            adresse: second.adresse.clone(),
            foyer_id: Some(foyer.id_foyer),
        })
        .await?;

    assert_eq!(updated.foyer.map(|f| f.id_foyer), Some(foyer.id_foyer));

    let first = entity::prelude::Universite::find_by_id(first.id_universite)
        .one(db)
        .await?
        .unwrap();
    assert!(first.foyer_id.is_none());

    Ok(())
}
