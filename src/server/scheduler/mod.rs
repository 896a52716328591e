//! Background jobs run by `tokio-cron-scheduler` independently of HTTP traffic.

pub mod chambre_listing;
