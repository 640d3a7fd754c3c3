// Product catalog records (external, untrusted input)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRating {
    pub rate: f64,
}

/// Only the fields used to derive metrics; anything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub price: f64,
    pub rating: ProductRating,
}

impl ProductRecord {
    pub fn new(rate: f64, price: f64) -> Self {
        Self {
            price,
            rating: ProductRating { rate },
        }
    }
}
