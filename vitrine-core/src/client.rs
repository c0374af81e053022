use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical client record used across the storefront
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
}

impl fmt::Display for ClientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Client Information:")?;
        writeln!(f, "Name: {}", self.full_name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phone: {}", self.phone_number)?;
        write!(f, "Email: {}", self.email)
    }
}

/// Record shape exported by the legacy CRM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyClientRecord {
    pub name: String,
    pub residence: String,
    pub contact_number: String,
    pub mail: String,
}

/// Record shape pushed to us by partner marketplaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerClientRecord {
    pub first_name: String,
    pub last_name: String,
    pub postal_address: String,
    pub phone: String,
    pub email_address: String,
}

/// Converts a foreign client record into [`ClientData`]
pub trait ClientDataAdapter {
    fn convert(&self) -> ClientData;
}

pub struct LegacyClientAdapter {
    record: LegacyClientRecord,
}

impl LegacyClientAdapter {
    pub fn new(record: LegacyClientRecord) -> Self {
        Self { record }
    }
}

impl ClientDataAdapter for LegacyClientAdapter {
    fn convert(&self) -> ClientData {
        ClientData {
            full_name: self.record.name.clone(),
            address: self.record.residence.clone(),
            phone_number: self.record.contact_number.clone(),
            email: self.record.mail.clone(),
        }
    }
}

pub struct PartnerClientAdapter {
    record: PartnerClientRecord,
}

impl PartnerClientAdapter {
    pub fn new(record: PartnerClientRecord) -> Self {
        Self { record }
    }
}

impl ClientDataAdapter for PartnerClientAdapter {
    fn convert(&self) -> ClientData {
        let record = &self.record;
        tracing::debug!(last_name = %record.last_name, "converting partner client record");

        ClientData {
            full_name: format!("{} {}", record.first_name, record.last_name),
            address: record.postal_address.clone(),
            phone_number: record.phone.clone(),
            email: record.email_address.clone(),
        }
    }
}
