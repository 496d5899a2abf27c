//! The five service stubs bound to one transport.

use std::sync::Arc;

use musicclub_core::config::ClientConfig;

use crate::auth::BearerAuth;
use crate::credential::CredentialSource;
use crate::error::TransportError;
use crate::stubs::{AuthClient, ConcertClient, ParticipationClient, SongClient, UserClient};
use crate::transport::Transport;

/// Every service stub, all sharing a single [`Transport`].
///
/// Build it once in the composition root and hand out clones (or
/// references) to whatever issues calls; cloning never creates a new
/// transport.
#[derive(Debug, Clone)]
pub struct Clients {
    pub song: SongClient,
    pub concert: ConcertClient,
    pub participation: ParticipationClient,
    pub auth: AuthClient,
    pub user: UserClient,
    transport: Arc<Transport>,
}

impl Clients {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self {
            song: SongClient::new(transport.clone()),
            concert: ConcertClient::new(transport.clone()),
            participation: ParticipationClient::new(transport.clone()),
            auth: AuthClient::new(transport.clone()),
            user: UserClient::new(transport.clone()),
            transport,
        }
    }

    /// Build the transport from `config` with the bearer interceptor as its
    /// only interceptor, then bind all stubs to it.
    pub fn connect<C>(config: &ClientConfig, credential: C) -> Result<Self, TransportError>
    where
        C: CredentialSource + 'static,
    {
        let transport = Transport::from_config(config)
            .interceptor(BearerAuth::new(credential))
            .build()?;
        Ok(Self::new(Arc::new(transport)))
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// True when every stub is bound to this registry's transport.
    pub fn shares_transport(&self) -> bool {
        [
            self.song.transport(),
            self.concert.transport(),
            self.participation.transport(),
            self.auth.transport(),
            self.user.transport(),
        ]
        .into_iter()
        .all(|t| Arc::ptr_eq(t, &self.transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::NoCredential;
    use musicclub_core::WireFormat;

    #[test]
    fn all_stubs_share_one_transport() {
        let config = ClientConfig::default();
        let clients = Clients::connect(&config, NoCredential).unwrap();

        assert!(clients.shares_transport());
        assert_eq!(clients.transport().base_url(), "http://localhost:8080");
        assert_eq!(clients.transport().wire_format(), WireFormat::Binary);
        assert_eq!(clients.transport().interceptor_count(), 1);

        // 1 held by the registry + 5 stubs
        assert_eq!(Arc::strong_count(clients.transport()), 6);
    }

    #[test]
    fn cloning_reuses_the_transport() {
        let clients = Clients::connect(&ClientConfig::default(), NoCredential).unwrap();
        let copy = clients.clone();
        assert!(Arc::ptr_eq(clients.transport(), copy.transport()));
        assert!(Arc::ptr_eq(copy.song.transport(), clients.user.transport()));
    }

    #[test]
    fn separately_built_registries_do_not_share() {
        let a = Clients::connect(&ClientConfig::default(), NoCredential).unwrap();
        let b = Clients::connect(&ClientConfig::default(), NoCredential).unwrap();
        assert!(!Arc::ptr_eq(a.transport(), b.transport()));
    }

    #[test]
    fn bad_endpoint_fails_at_construction() {
        let mut config = ClientConfig::default();
        config.endpoint.base_url = "not a url".to_string();
        assert!(matches!(
            Clients::connect(&config, NoCredential),
            Err(TransportError::InvalidEndpoint { .. })
        ));
    }
}
