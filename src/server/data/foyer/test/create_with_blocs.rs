use super::*;

/// Tests creating a foyer with nested blocs.
///
/// Verifies that every bloc is inserted and linked to the new foyer.
///
/// Expected: Ok with the foyer holding both blocs
#[tokio::test]
async fn creates_foyer_and_links_blocs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoyerRepository::new(db);
    let foyer = repo
        .create_with_blocs(CreateFoyerWithBlocsParams {
            nom_foyer: "Foyer El Ghazela".to_string(),
            capacite_foyer: 200,
            blocs: vec![
                UpsertBlocParams {
                    id_bloc: None,
                    nom_bloc: "A".to_string(),
                    capacite_bloc: 100,
                    foyer_id: None,
                },
                UpsertBlocParams {
                    id_bloc: None,
                    nom_bloc: "B".to_string(),
                    capacite_bloc: 100,
                    foyer_id: None,
                },
            ],
        })
        .await?;

    assert_eq!(foyer.blocs.len(), 2);
    assert!(foyer
        .blocs
        .iter()
        .all(|bloc| bloc.foyer_id == Some(foyer.id_foyer)));

    let names: Vec<&str> = foyer.blocs.iter().map(|b| b.nom_bloc.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    Ok(())
}

/// Tests creating a foyer without blocs.
///
/// Expected: Ok with an empty bloc list
#[tokio::test]
async fn creates_foyer_without_blocs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_building_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoyerRepository::new(db);
    let foyer = repo
        .create_with_blocs(CreateFoyerWithBlocsParams {
            nom_foyer: "Empty".to_string(),
            capacite_foyer: 0,
            blocs: vec![],
        })
        .await?;

    assert!(foyer.blocs.is_empty());
    assert!(entity::prelude::Bloc::find().all(db).await?.is_empty());

    Ok(())
}
