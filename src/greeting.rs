//! Greeting fetch.

use crate::config::Endpoints;
use crate::error::Result;
use crate::page::{PageSurface, Slot};
use crate::remote::Remote;
use tracing::info;

/// Fetch the greeting and write it, unmodified, into the greeting slot.
/// Nothing is written if the request fails.
pub async fn display_greeting<R, P>(remote: &R, endpoints: &Endpoints, page: &mut P) -> Result<String>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let greeting = remote.get_text(&endpoints.greeting, &[]).await?;
    page.set_text(Slot::Greeting, &greeting)?;

    info!(len = greeting.len(), "displayed greeting");
    Ok(greeting)
}
