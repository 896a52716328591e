use super::*;

/// Tests listing blocs with their rooms.
///
/// Verifies that rooms are grouped under their bloc and that a bloc without
/// rooms is still listed with an empty room list.
///
/// Expected: Ok with one entry per bloc
#[tokio::test]
async fn groups_rooms_by_bloc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let full = factory::create_bloc(db, None).await?;
    let empty = factory::create_bloc(db, None).await?;

    factory::chambre::ChambreFactory::new(db, Some(full.id_bloc))
        .numero_chambre(2)
        .type_c(TypeChambre::Double)
        .build()
        .await?;
    factory::chambre::ChambreFactory::new(db, Some(full.id_bloc))
        .numero_chambre(1)
        .build()
        .await?;
    factory::create_chambre(db, None).await?;

    let repo = BlocRepository::new(db);
    let listing = repo.find_all_with_chambres().await?;

    assert_eq!(listing.len(), 2);

    let full_entry = listing
        .iter()
        .find(|entry| entry.bloc.id_bloc == full.id_bloc)
        .unwrap();
    let numbers: Vec<i64> = full_entry
        .chambres
        .iter()
        .map(|c| c.numero_chambre)
        .collect();
    assert_eq!(numbers, vec![1, 2]);

    let empty_entry = listing
        .iter()
        .find(|entry| entry.bloc.id_bloc == empty.id_bloc)
        .unwrap();
    assert!(empty_entry.chambres.is_empty());

    Ok(())
}
