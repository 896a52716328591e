use chrono::{Datelike, NaiveDate};

use crate::{model::reservation::AnneeUniversitaireDto, server::error::internal::InternalError};

/// Inclusive date window of an academic year, from September 15 to June 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicYear {
    pub debut: NaiveDate,
    pub fin: NaiveDate,
}

impl AcademicYear {
    /// Computes the academic year a date belongs to.
    ///
    /// Dates up to the end of July belong to the year that started the previous
    /// September; from August on, the year starting this September is used.
    ///
    /// # Arguments
    /// - `date` - Reference date, usually today
    ///
    /// # Returns
    /// - `Ok(AcademicYear)` - Window containing the reference year
    /// - `Err(InternalError::AcademicYearOutOfRange)` - Bounds fall outside chrono's range
    pub fn containing(date: NaiveDate) -> Result<Self, InternalError> {
        let start_year = if date.month() <= 7 {
            date.year() - 1
        } else {
            date.year()
        };

        let out_of_range = || InternalError::AcademicYearOutOfRange { date };

        let debut = NaiveDate::from_ymd_opt(start_year, 9, 15).ok_or_else(out_of_range)?;
        let fin = NaiveDate::from_ymd_opt(start_year + 1, 6, 30).ok_or_else(out_of_range)?;

        Ok(Self { debut, fin })
    }

    /// `"2023/2024"` style label used as the prefix of reservation identifiers.
    pub fn label(&self) -> String {
        format!("{}/{}", self.debut.year(), self.fin.year())
    }

    pub fn into_dto(self) -> AnneeUniversitaireDto {
        AnneeUniversitaireDto {
            debut: self.debut,
            fin: self.fin,
        }
    }
}
