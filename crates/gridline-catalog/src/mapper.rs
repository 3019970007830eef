//! Catalog entry → product record mapping.

use rustc_hash::FxHashSet;

use gridline_gfn::GameRow;

use crate::model::{Discount, GfnData, Pricing, Product, ProductVariant, Reviews};
use crate::slug::slugify;

/// Map one catalog entry to a product record under the given slug.
///
/// Pure: copies identifying/display fields, flattens store and
/// publisher lists, and fills the fixed single-tier offering. Missing
/// source fields become empty strings/lists.
pub fn map_game(game: &GameRow, slug: &str) -> Product {
    let title = &game.title;
    Product {
        id: slug.to_string(),
        slug: slug.to_string(),
        name: title.clone(),
        game: title.clone(),
        category: "gaming".to_string(),
        optimization_level: "community".to_string(),
        description: format!("Cloud gaming for {title}"),
        long_description: format!(
            "GeForce NOW cloud gaming environment for {title}. \
             Standard configuration with community support."
        ),
        status: "ACTIVE".to_string(),
        gfn_data: GfnData {
            play_type: game.gfn.play_type.clone(),
            minimum_tier: game.gfn.minimum_tier.clone(),
            stores: game.stores().iter().map(|s| s.to_string()).collect(),
            icon_url: game.icon_url().to_string(),
            logo_url: game.logo_url().to_string(),
        },
        variants: vec![standard_variant(title, slug)],
        reviews: Reviews {
            average: 4.0,
            count: 0,
        },
        discount: Discount {
            active: false,
            percentage: 0,
            code: String::new(),
        },
    }
}

/// The fixed "standard" offering tier.
fn standard_variant(title: &str, slug: &str) -> ProductVariant {
    ProductVariant {
        id: "standard".to_string(),
        name: "Standard".to_string(),
        tier: "standard".to_string(),
        gpu: "RTX 3060".to_string(),
        ram: "16 GB".to_string(),
        cpu: "Intel i5-12400".to_string(),
        usage: "Standard cloud configuration".to_string(),
        description: format!("VM cloud for {title}"),
        use_cases: vec![
            "Casual gaming".to_string(),
            "Practice".to_string(),
            "Standard play".to_string(),
        ],
        features: vec![
            "Cloud VM optimized".to_string(),
            "Community support".to_string(),
            "Regular updates".to_string(),
        ],
        target_audience: format!("{title} players"),
        highlight: "Community supported".to_string(),
        protection: "Standard".to_string(),
        updates: "Regular".to_string(),
        pricing: Pricing {
            hourly: 0.5,
            monthly: 199.0,
        },
        sla: "99.9%".to_string(),
        support_level: "community".to_string(),
        badges: vec!["Community".to_string(), "Standard".to_string()],
        image: format!("/images/products/{slug}/standard/main.png"),
    }
}

/// Result of mapping one batch.
#[derive(Debug)]
pub struct MapOutcome {
    pub products: Vec<Product>,
    /// Entries dropped for having an empty title.
    pub skipped: usize,
    /// Slug collisions resolved by ordinal suffixing.
    pub collisions: usize,
}

/// Map up to `limit` catalog entries into product records.
///
/// Slugs are `prefix` + slug of the sort name (title when the sort name
/// is empty). A slug already present in the batch gets the source
/// entry's 1-based ordinal appended, repeatedly if the suffixed slug is
/// itself taken, so slugs are always unique within one batch. Entries
/// without a title are skipped but still count toward ordinals.
pub fn map_batch(games: &[GameRow], limit: usize, prefix: &str) -> MapOutcome {
    let mut products = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut skipped = 0;
    let mut collisions = 0;

    for (ordinal, game) in games.iter().take(limit).enumerate() {
        let ordinal = ordinal + 1;
        if game.title.is_empty() {
            skipped += 1;
            continue;
        }
        let base = if game.sort_name.is_empty() {
            &game.title
        } else {
            &game.sort_name
        };
        let mut slug = format!("{prefix}{}", slugify(base));
        if seen.contains(&slug) {
            collisions += 1;
            // Suffixing can itself collide with a natural slug taken
            // earlier in the batch; repeat until unique
            while seen.contains(&slug) {
                slug = format!("{slug}-{ordinal}");
            }
        }
        seen.insert(slug.clone());
        products.push(map_game(game, &slug));
    }

    MapOutcome {
        products,
        skipped,
        collisions,
    }
}
