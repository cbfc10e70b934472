//! Synthetic catalog generation.

use megashop_core::{Category, Price, ProductId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Product;

/// Generate a synthetic catalog of `count` products.
///
/// Generation is deterministic for a fixed seed: IDs run from 1 upward,
/// categories rotate through [`Category::ALL`], prices fall in whole units
/// between 5 and 1000, and ratings between 3.0 and 5.0 with one decimal.
#[must_use]
pub fn generate(count: u32, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);

    (1..=count)
        .zip(Category::ALL.into_iter().cycle())
        .map(|(i, category)| {
            let price = Price::from_units(rng.random_range(5..=1000));
            // Sample tenths directly so ratings land on one decimal place.
            let rating = f32::from(rng.random_range(30_u8..=50)) / 10.0;

            Product {
                id: ProductId::new(i.cast_signed()),
                title: format!("Product {i}"),
                price,
                category,
                rating,
                image: format!("https://picsum.photos/seed/p{i}/400/300"),
            }
        })
        .collect()
}
