use scraper::ElementRef;

use crate::document::{element_text, Document};
use crate::extract::rules::{HERO_PRODUCT_LIMIT, HERO_PRODUCT_RULES, HERO_TITLE};
use crate::types::HeroProduct;

/// Featured product tiles on the homepage.
///
/// Only the highest-priority selector that matches anything is used. The
/// limit applies to matched tiles before title lookup, so tiles without a
/// heading shrink the result below the limit. A heading with no text still
/// records the tile, with an empty title.
#[must_use]
pub fn extract_hero_products(doc: &Document) -> Vec<HeroProduct> {
    // Selector-level first match, so `find_map` rather than `resolve_if_absent`.
    let Some((selector_used, tiles)) = HERO_PRODUCT_RULES.iter().find_map(|(pattern, selector)| {
        let tiles: Vec<ElementRef<'_>> = doc.select(selector).take(HERO_PRODUCT_LIMIT).collect();
        (!tiles.is_empty()).then_some((*pattern, tiles))
    }) else {
        return Vec::new();
    };

    tiles
        .into_iter()
        .filter_map(|tile| {
            let heading = tile.select(&HERO_TITLE).next()?;
            Some(HeroProduct {
                title: element_text(heading),
                selector_used: selector_used.to_owned(),
            })
        })
        .collect()
}
