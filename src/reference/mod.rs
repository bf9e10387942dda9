pub mod incident_types;
pub mod paraguay;
