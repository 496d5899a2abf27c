//! ParticipationService messages.
//!
//! A participation is keyed by the triple (song, member, role). Its resource
//! name joins the three with `:`; the role title is last so it may itself
//! contain colons.

use serde::{Deserialize, Serialize};

use super::{FieldMask, MethodDescriptor, ServiceDescriptor};

pub const SERVICE_NAME: &str = "musicclub.ParticipationService";

pub static CREATE_PARTICIPATION: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "CreateParticipation");
pub static GET_PARTICIPATION: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "GetParticipation");
pub static LIST_PARTICIPATIONS: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "ListParticipations");
pub static UPDATE_PARTICIPATION: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "UpdateParticipation");
pub static DELETE_PARTICIPATION: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "DeleteParticipation");

pub static SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: SERVICE_NAME,
    methods: &[
        &CREATE_PARTICIPATION,
        &GET_PARTICIPATION,
        &LIST_PARTICIPATIONS,
        &UPDATE_PARTICIPATION,
        &DELETE_PARTICIPATION,
    ],
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participation {
    /// Telegram id of the member.
    pub tg_id: u64,
    pub song_id: u64,
    pub role_title: String,
}

impl Participation {
    pub fn name(&self) -> String {
        participation_name(self.song_id, self.tg_id, &self.role_title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateParticipationRequest {
    pub participation: Option<Participation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetParticipationRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParticipationsRequest {
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParticipationsResponse {
    pub participations: Vec<Participation>,
    pub next_page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateParticipationRequest {
    pub participation: Option<Participation>,
    pub update_mask: Option<FieldMask>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteParticipationRequest {
    pub name: String,
}

// ── Resource names ────────────────────────────────────────────────────────────

/// Parsed form of a participation resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationKey {
    pub song_id: u64,
    pub tg_id: u64,
    pub role_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid participation name: {0:?}")]
pub struct InvalidParticipationName(pub String);

/// Build `"<song_id>:<tg_id>:<role_title>"`.
pub fn participation_name(song_id: u64, tg_id: u64, role_title: &str) -> String {
    format!("{song_id}:{tg_id}:{role_title}")
}

/// Inverse of [`participation_name`]. Ids must be non-zero and the role
/// title non-blank.
pub fn parse_participation_name(name: &str) -> Result<ParticipationKey, InvalidParticipationName> {
    let invalid = || InvalidParticipationName(name.to_string());

    let mut parts = name.splitn(3, ':');
    let song_id = parts.next().ok_or_else(invalid)?;
    let tg_id = parts.next().ok_or_else(invalid)?;
    let role_title = parts.next().ok_or_else(invalid)?;

    let song_id: u64 = song_id.trim().parse().map_err(|_| invalid())?;
    let tg_id: u64 = tg_id.trim().parse().map_err(|_| invalid())?;

    if song_id == 0 || tg_id == 0 || role_title.trim().is_empty() {
        return Err(invalid());
    }

    Ok(ParticipationKey {
        song_id,
        tg_id,
        role_title: role_title.to_string(),
    })
}
