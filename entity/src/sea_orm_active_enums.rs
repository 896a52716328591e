use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room type, stored as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TypeChambre {
    #[sea_orm(string_value = "SIMPLE")]
    Simple,
    #[sea_orm(string_value = "DOUBLE")]
    Double,
    #[sea_orm(string_value = "TRIPLE")]
    Triple,
}
