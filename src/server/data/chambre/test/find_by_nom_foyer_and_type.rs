use super::*;

/// Tests filtering rooms by foyer name and room type.
///
/// Rooms of another type, or in a bloc of another foyer, are excluded.
///
/// Expected: Ok with the single matching room
#[tokio::test]
async fn filters_by_foyer_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let foyer = factory::foyer::FoyerFactory::new(db)
        .nom_foyer("Foyer Nord")
        .build()
        .await?;
    let other_foyer = factory::create_foyer(db).await?;
    let bloc = factory::create_bloc(db, Some(foyer.id_foyer)).await?;
    let other_bloc = factory::create_bloc(db, Some(other_foyer.id_foyer)).await?;

    let expected = factory::chambre::ChambreFactory::new(db, Some(bloc.id_bloc))
        .type_c(StoredTypeChambre::Double)
        .build()
        .await?;
    factory::chambre::ChambreFactory::new(db, Some(bloc.id_bloc))
        .type_c(StoredTypeChambre::Simple)
        .build()
        .await?;
    factory::chambre::ChambreFactory::new(db, Some(other_bloc.id_bloc))
        .type_c(StoredTypeChambre::Double)
        .build()
        .await?;

    let repo = ChambreRepository::new(db);
    let chambres = repo
        .find_by_nom_foyer_and_type("Foyer Nord", TypeChambre::Double)
        .await?;

    assert_eq!(chambres.len(), 1);
    assert_eq!(chambres[0].id_chambre, expected.id_chambre);

    Ok(())
}
