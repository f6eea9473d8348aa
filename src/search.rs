use crate::models::listing::Listing;

/// Narrow listings to those whose make contains `make_query`
/// (case-insensitive, an empty query matches everything) and whose price
/// lies within `min_price..=max_price`. Preserves the input order and
/// never touches storage.
pub fn filter_listings(
    listings: &[Listing],
    make_query: &str,
    min_price: f64,
    max_price: f64,
) -> Vec<Listing> {
    let needle = make_query.to_lowercase();

    listings
        .iter()
        .filter(|listing| {
            listing.make.to_lowercase().contains(&needle)
                && listing.price >= min_price
                && listing.price <= max_price
        })
        .cloned()
        .collect()
}
