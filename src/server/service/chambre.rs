use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::chambre::TypeChambre,
    server::{
        data::{bloc::BlocRepository, chambre::ChambreRepository, reservation::ReservationRepository},
        error::AppError,
        model::{
            bloc::BlocWithChambres,
            chambre::{Chambre, PlacesDisponibles, TypeChambrePourcentage, UpsertChambreParams},
        },
        util::academic_year::AcademicYear,
    },
};

pub struct ChambreService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> ChambreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Overrides the reference date used to compute the current academic year.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Creates or updates a room
    ///
    /// Room numbers are unique; reusing the number of another room is rejected.
    pub async fn add_or_update(&self, params: UpsertChambreParams) -> Result<Chambre, AppError> {
        let repo = ChambreRepository::new(self.db);

        if let Some(existing) = repo.find_by_numero(params.numero_chambre).await? {
            if Some(existing.id_chambre) != params.id_chambre {
                return Err(AppError::BadRequest(format!(
                    "La chambre {} existe déjà",
                    params.numero_chambre
                )));
            }
        }

        if let Some(bloc_id) = params.bloc_id {
            if BlocRepository::new(self.db).find_by_id(bloc_id).await?.is_none() {
                return Err(AppError::NotFound(format!("Bloc {} introuvable", bloc_id)));
            }
        }

        Ok(repo.upsert(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Chambre>, AppError> {
        Ok(ChambreRepository::new(self.db).find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Chambre, AppError> {
        ChambreRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Chambre {} introuvable", id)))
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        if !ChambreRepository::new(self.db).delete_by_id(id).await? {
            return Err(AppError::NotFound(format!("Chambre {} introuvable", id)));
        }

        Ok(())
    }

    pub async fn get_chambres_par_nom_bloc(&self, nom_bloc: &str) -> Result<Vec<Chambre>, AppError> {
        Ok(ChambreRepository::new(self.db)
            .find_by_nom_bloc(nom_bloc)
            .await?)
    }

    pub async fn nb_chambre_par_type_et_bloc(
        &self,
        type_c: TypeChambre,
        id_bloc: i32,
    ) -> Result<u64, AppError> {
        Ok(ChambreRepository::new(self.db)
            .count_by_type_and_bloc(type_c, id_bloc)
            .await?)
    }

    /// Gets the rooms of a type in a foyer that hold no valid reservation for the
    /// current academic year
    pub async fn get_chambres_non_reserve_par_nom_foyer_et_type_chambre(
        &self,
        nom_foyer: &str,
        type_c: TypeChambre,
    ) -> Result<Vec<Chambre>, AppError> {
        let year = AcademicYear::containing(self.today)?;
        let reservation_repo = ReservationRepository::new(self.db);

        let chambres = ChambreRepository::new(self.db)
            .find_by_nom_foyer_and_type(nom_foyer, type_c)
            .await?;

        let mut non_reservees = Vec::new();
        for chambre in chambres {
            let reservations = reservation_repo
                .count_valid_by_chambre_between(chambre.id_chambre, year.debut, year.fin)
                .await?;

            if reservations == 0 {
                non_reservees.push(chambre);
            }
        }

        Ok(non_reservees)
    }

    /// Lists the rooms of every bloc and logs the listing
    ///
    /// Run periodically by the listing scheduler.
    pub async fn liste_chambres_par_bloc(&self) -> Result<Vec<BlocWithChambres>, AppError> {
        let blocs = BlocRepository::new(self.db).find_all_with_chambres().await?;

        for entry in &blocs {
            tracing::info!(
                "Bloc => {} ayant une capacité {}",
                entry.bloc.nom_bloc,
                entry.bloc.capacite_bloc
            );

            if entry.chambres.is_empty() {
                tracing::info!("Pas de chambre disponible dans ce bloc");
                continue;
            }

            tracing::info!("La liste des chambres pour ce bloc:");
            for chambre in &entry.chambres {
                tracing::info!(
                    "NumChambre: {} type: {}",
                    chambre.numero_chambre,
                    chambre.type_c
                );
            }
        }

        Ok(blocs)
    }

    /// Share of each room type among all rooms, in percent
    ///
    /// Every type is listed; all shares are 0 when there are no rooms.
    pub async fn pourcentage_chambre_par_type_chambre(
        &self,
    ) -> Result<Vec<TypeChambrePourcentage>, AppError> {
        let repo = ChambreRepository::new(self.db);
        let total = repo.count_by_type(None).await?;

        tracing::info!("Nombre total des chambres: {}", total);

        let mut pourcentages = Vec::with_capacity(TypeChambre::ALL.len());
        for type_c in TypeChambre::ALL {
            let nombre = repo.count_by_type(Some(type_c)).await?;
            let pourcentage = if total == 0 {
                0.0
            } else {
                nombre as f64 * 100.0 / total as f64
            };

            tracing::info!("Le pourcentage des chambres pour le type {} est égale à {}", type_c, pourcentage);

            pourcentages.push(TypeChambrePourcentage {
                type_c,
                nombre,
                pourcentage,
            });
        }

        Ok(pourcentages)
    }

    /// Remaining places of every room for the current academic year
    pub async fn nb_places_disponible_par_chambre_annee_en_cours(
        &self,
    ) -> Result<Vec<PlacesDisponibles>, AppError> {
        let year = AcademicYear::containing(self.today)?;
        let reservation_repo = ReservationRepository::new(self.db);

        let chambres = ChambreRepository::new(self.db).find_all().await?;

        let mut places = Vec::with_capacity(chambres.len());
        for chambre in chambres {
            let reservations = reservation_repo
                .count_valid_by_chambre_between(chambre.id_chambre, year.debut, year.fin)
                .await?;
            let places_disponibles = chambre.type_c.capacity().saturating_sub(reservations);

            if places_disponibles == 0 {
                tracing::info!("La chambre {} est complète", chambre.numero_chambre);
            } else {
                tracing::info!(
                    "Le nombre de places disponibles pour la chambre {} {} est {}",
                    chambre.type_c,
                    chambre.numero_chambre,
                    places_disponibles
                );
            }

            places.push(PlacesDisponibles {
                chambre,
                places_disponibles,
            });
        }

        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::TypeChambre as StoredTypeChambre;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn computes_percentage_per_type() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        for type_c in [
            StoredTypeChambre::Simple,
            StoredTypeChambre::Simple,
            StoredTypeChambre::Double,
            StoredTypeChambre::Triple,
        ] {
            factory::chambre::ChambreFactory::new(db, None)
                .type_c(type_c)
                .build()
                .await?;
        }

        let service = ChambreService::new(db);
        let pourcentages = service.pourcentage_chambre_par_type_chambre().await?;

        assert_eq!(pourcentages.len(), 3);
        assert_eq!(pourcentages[0].type_c, TypeChambre::Simple);
        assert_eq!(pourcentages[0].nombre, 2);
        assert!((pourcentages[0].pourcentage - 50.0).abs() < f64::EPSILON);
        assert!((pourcentages[2].pourcentage - 25.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[tokio::test]
    async fn percentage_is_zero_without_rooms() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ChambreService::new(db);
        let pourcentages = service.pourcentage_chambre_par_type_chambre().await?;

        assert!(pourcentages.iter().all(|p| p.pourcentage == 0.0 && p.nombre == 0));

        Ok(())
    }

    #[tokio::test]
    async fn counts_remaining_places_in_current_year() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let triple = factory::chambre::ChambreFactory::new(db, None)
            .type_c(StoredTypeChambre::Triple)
            .build()
            .await?;

        // One valid reservation this year, one cancelled, one from last year
        for (anchor, valide) in [
            (date(2023, 10, 1), true),
            (date(2023, 10, 2), false),
            (date(2022, 10, 1), true),
        ] {
            factory::reservation::ReservationFactory::new(db)
                .annee_universitaire(anchor)
                .est_valide(valide)
                .chambre_id(Some(triple.id_chambre))
                .build()
                .await?;
        }

        let service = ChambreService::new(db).with_today(date(2024, 2, 1));
        let places = service
            .nb_places_disponible_par_chambre_annee_en_cours()
            .await?;

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].places_disponibles, 2);

        Ok(())
    }

    #[tokio::test]
    async fn lists_only_unreserved_rooms_of_foyer() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let foyer = factory::foyer::FoyerFactory::new(db)
            .nom_foyer("Foyer Centre")
            .build()
            .await?;
        let bloc = factory::create_bloc(db, Some(foyer.id_foyer)).await?;
        let reserved = factory::create_chambre(db, Some(bloc.id_bloc)).await?;
        let free = factory::create_chambre(db, Some(bloc.id_bloc)).await?;

        factory::reservation::ReservationFactory::new(db)
            .annee_universitaire(date(2023, 11, 5))
            .chambre_id(Some(reserved.id_chambre))
            .build()
            .await?;

        let service = ChambreService::new(db).with_today(date(2023, 12, 1));
        let chambres = service
            .get_chambres_non_reserve_par_nom_foyer_et_type_chambre("Foyer Centre", TypeChambre::Simple)
            .await?;

        let ids: Vec<i32> = chambres.iter().map(|c| c.id_chambre).collect();
        assert_eq!(ids, vec![free.id_chambre]);

        Ok(())
    }

    #[tokio::test]
    async fn lists_rooms_per_bloc() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let bloc = factory::create_bloc(db, None).await?;
        factory::create_chambre(db, Some(bloc.id_bloc)).await?;
        factory::create_bloc(db, None).await?;

        let service = ChambreService::new(db);
        let listing = service.liste_chambres_par_bloc().await?;

        assert_eq!(listing.len(), 2);
        assert_eq!(listing.iter().map(|b| b.chambres.len()).sum::<usize>(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_room_number() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::create_chambre(db, None).await?;

        let service = ChambreService::new(db);
        let result = service
            .add_or_update(UpsertChambreParams {
                id_chambre: None,
                numero_chambre: existing.numero_chambre,
                type_c: TypeChambre::Double,
                bloc_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn deleted_chambre_disappears_and_frees_its_reservation() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_housing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let chambre = factory::create_chambre(db, None).await?;
        let kept = factory::create_chambre(db, None).await?;
        let reservation = factory::create_reservation(db, Some(chambre.id_chambre)).await?;

        let service = ChambreService::new(db);
        service.delete_by_id(chambre.id_chambre).await?;

        let remaining = service.find_all().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id_chambre, kept.id_chambre);

        let reservation = entity::prelude::Reservation::find_by_id(reservation.id_reservation)
            .one(db)
            .await?
            .unwrap();
        assert_eq!(reservation.chambre_id, None);

        assert!(matches!(
            service.delete_by_id(chambre.id_chambre).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
