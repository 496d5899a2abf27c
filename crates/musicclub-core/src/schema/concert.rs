//! ConcertService messages.

use serde::{Deserialize, Serialize};

use super::{FieldMask, MethodDescriptor, ServiceDescriptor, Timestamp};

pub const SERVICE_NAME: &str = "musicclub.ConcertService";

pub static CREATE_CONCERT: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "CreateConcert");
pub static GET_CONCERT: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "GetConcert");
pub static LIST_CONCERTS: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "ListConcerts");
pub static UPDATE_CONCERT: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "UpdateConcert");
pub static DELETE_CONCERT: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "DeleteConcert");

pub static SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: SERVICE_NAME,
    methods: &[
        &CREATE_CONCERT,
        &GET_CONCERT,
        &LIST_CONCERTS,
        &UPDATE_CONCERT,
        &DELETE_CONCERT,
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concert {
    pub id: u64,
    pub name: String,
    /// Concert day at 00:00 UTC. Absent while the date is not fixed yet.
    pub date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateConcertRequest {
    pub concert: Option<Concert>,
}

/// `name` is the decimal concert id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetConcertRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConcertsRequest {
    /// <= 0 lets the server pick its default page size.
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConcertsResponse {
    pub concerts: Vec<Concert>,
    pub next_page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConcertRequest {
    pub concert: Option<Concert>,
    pub update_mask: Option<FieldMask>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConcertRequest {
    pub name: String,
}

/// Resource name of a concert.
pub fn concert_name(id: u64) -> String {
    id.to_string()
}
