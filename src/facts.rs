//! Random fact display.

use crate::error::Result;
use crate::models::{FACTS, FACT_STYLE};
use crate::page::{PageSurface, Slot};
use rand::Rng;
use tracing::info;

/// Write one fact, picked uniformly at random, into the fact slot.
pub fn display_random_fact<P>(page: &mut P) -> Result<&'static str>
where
    P: PageSurface + ?Sized,
{
    display_fact_with(&mut rand::thread_rng(), page)
}

pub fn display_fact_with<G, P>(rng: &mut G, page: &mut P) -> Result<&'static str>
where
    G: Rng + ?Sized,
    P: PageSurface + ?Sized,
{
    let fact = FACTS[rng.gen_range(0..FACTS.len())];

    page.set_style(Slot::RandomFact, FACT_STYLE)?;
    page.set_text(Slot::RandomFact, fact)?;

    info!(fact, "displayed random fact");
    Ok(fact)
}
