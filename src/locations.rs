//! Locations display.

use crate::config::Endpoints;
use crate::error::{PortfolioError, Result};
use crate::models::{LOCATION_COUNT, LOCATION_LABELS};
use crate::page::{PageSurface, Slot};
use crate::remote::{get_json, Remote};
use tracing::info;

/// Label each location by its position. Needs at least `LOCATION_COUNT`
/// entries; anything past that is ignored.
pub fn label_locations(locations: &[String]) -> Result<Vec<String>> {
    if locations.len() < LOCATION_COUNT {
        return Err(PortfolioError::ShortResponse {
            expected: LOCATION_COUNT,
            got: locations.len(),
        });
    }

    Ok(LOCATION_LABELS
        .iter()
        .map(|(label, index)| format!("{}{}", label, locations[*index]))
        .collect())
}

/// Fetch the locations and replace the locations slot with one labelled
/// item per position. A short response is rejected before anything is
/// written.
pub async fn display_locations<R, P>(
    remote: &R,
    endpoints: &Endpoints,
    page: &mut P,
) -> Result<Vec<String>>
where
    R: Remote + ?Sized,
    P: PageSurface + ?Sized,
{
    let locations: Vec<String> = get_json(remote, &endpoints.locations, &[]).await?;
    let items = label_locations(&locations)?;

    page.clear(Slot::Locations)?;
    for item in &items {
        page.append_item(Slot::Locations, item)?;
    }

    info!(count = items.len(), "displayed locations");
    Ok(items)
}
