//! Process-wide clients.
//!
//! For applications that want importable singletons rather than threading
//! a [`Clients`] value through their own code. The registry is installed at
//! most once; later attempts fail instead of building a second transport.

use once_cell::sync::OnceCell;

use musicclub_core::config::ClientConfig;

use crate::credential::CredentialSource;
use crate::error::Error;
use crate::registry::Clients;

static CLIENTS: OnceCell<Clients> = OnceCell::new();

/// Build the process-wide clients from `config` and `credential`.
///
/// Concurrent callers race for one construction; only the winner builds a
/// transport and every other caller gets `AlreadyInitialized`.
pub fn init<C>(config: &ClientConfig, credential: C) -> Result<&'static Clients, Error>
where
    C: CredentialSource + 'static,
{
    init_with(|| Ok(Clients::connect(config, credential)?))
}

fn init_with<F>(build: F) -> Result<&'static Clients, Error>
where
    F: FnOnce() -> Result<Clients, Error>,
{
    let mut initialized_here = false;
    let clients = CLIENTS.get_or_try_init(|| {
        initialized_here = true;
        build()
    })?;
    if initialized_here {
        Ok(clients)
    } else {
        Err(Error::AlreadyInitialized)
    }
}

/// Install an already built registry.
pub fn install(clients: Clients) -> Result<&'static Clients, Error> {
    CLIENTS.set(clients).map_err(|_| Error::AlreadyInitialized)?;
    get()
}

pub fn get() -> Result<&'static Clients, Error> {
    CLIENTS.get().ok_or(Error::NotInitialized)
}

pub fn try_get() -> Option<&'static Clients> {
    CLIENTS.get()
}
