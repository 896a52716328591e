use super::*;

/// Tests inserting a room and reading it back by number.
///
/// Expected: Ok with the stored type converted back to the domain type
#[tokio::test]
async fn inserts_chambre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bloc = factory::create_bloc(db, None).await?;

    let repo = ChambreRepository::new(db);
    let chambre = repo
        .upsert(UpsertChambreParams {
            id_chambre: None,
            numero_chambre: 314,
            type_c: TypeChambre::Triple,
            bloc_id: Some(bloc.id_bloc),
        })
        .await?;

    assert_eq!(chambre.numero_chambre, 314);
    assert_eq!(chambre.type_c, TypeChambre::Triple);

    let found = repo.find_by_numero(314).await?.unwrap();
    assert_eq!(found.id_chambre, chambre.id_chambre);
    assert_eq!(found.bloc_id, Some(bloc.id_bloc));

    Ok(())
}

/// Tests updating an existing room's type.
///
/// Expected: Ok with the same id and new type
#[tokio::test]
async fn updates_existing_chambre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_chambre(db, None).await?;

    let repo = ChambreRepository::new(db);
    let chambre = repo
        .upsert(UpsertChambreParams {
            id_chambre: Some(existing.id_chambre),
            numero_chambre: existing.numero_chambre,
            type_c: TypeChambre::Double,
            bloc_id: None,
        })
        .await?;

    assert_eq!(chambre.id_chambre, existing.id_chambre);
    assert_eq!(chambre.type_c, TypeChambre::Double);

    Ok(())
}
