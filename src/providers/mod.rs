//! DNS Providers

pub mod godaddy;
