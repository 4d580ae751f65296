use crate::catalog::{Catalog, CategoryIndex};
use crate::shuffle::types::{Assignment, Quarter};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pre-shuffle domain: categories in rank order, serials 1..=N within each
pub fn domain(catalog: &Catalog) -> Vec<Quarter> {
    let serials = catalog.serials_per_category();
    let mut quarters = Vec::with_capacity(catalog.total_supply() as usize);
    for category in 0..catalog.category_count() {
        for serial in 1..=serials {
            quarters.push(Quarter {
                category: category as CategoryIndex,
                serial,
            });
        }
    }
    quarters
}

/// Random source for the shuffle. A seed makes the output reproducible.
fn shuffle_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Build the domain and apply a uniform permutation drawn from `rng`
pub fn shuffle_with<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Assignment {
    let mut quarters = domain(catalog);
    quarters.shuffle(rng);
    Assignment::from_quarters(quarters)
}

/// Generate a fresh assignment for the catalog
pub fn generate(catalog: &Catalog, seed: Option<u64>) -> Assignment {
    let mut rng = shuffle_rng(seed);
    let assignment = shuffle_with(catalog, &mut rng);
    tracing::debug!(
        total = assignment.supply(),
        seeded = seed.is_some(),
        "shuffled domain"
    );
    assignment
}
