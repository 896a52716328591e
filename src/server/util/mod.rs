pub mod academic_year;
