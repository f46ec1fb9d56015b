//! Placeholder product payloads
//!
//! Used when the price API has no data for an identifier. The payload has the
//! same shape as a real product response and reports `status: 1`; only the
//! `"Demo Data"` message and the placeholder image URLs give it away.

use rand::Rng;
use serde::Serialize;

pub const DEMO_MESSAGE: &str = "Demo Data";
pub const DEMO_NAME_MARKER: &str = "[DEMO]";

const DEMO_IMAGE: &str = "https://via.placeholder.com/300x300?text=Demo+Product";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoPayload {
    pub status: u8,
    pub msg: &'static str,
    pub data: DemoProduct,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoProduct {
    pub name: String,
    pub image: &'static str,
    pub cur_price: u32,
    pub avg: u32,
    pub min: u32,
    pub maxall: u32,
    /// One decimal place, serialized as a string like the real API does
    pub rating: String,
    #[serde(rename = "ratingCount")]
    pub rating_count: u32,
    pub site_name: String,
    pub site_logo: String,
    pub brand: &'static str,
    pub category: &'static str,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub pnt: u32,
    #[serde(rename = "originalUrl")]
    pub original_url: String,
}

/// Build a demo payload from the given random source
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    platform_name: &str,
    product_id: &str,
    original_url: &str,
) -> DemoPayload {
    let initial = platform_name.chars().next().map(String::from).unwrap_or_default();

    DemoPayload {
        status: 1,
        msg: DEMO_MESSAGE,
        data: DemoProduct {
            name: format!("{DEMO_NAME_MARKER} Sample {platform_name} Product - ID: {product_id}"),
            image: DEMO_IMAGE,
            cur_price: rng.gen_range(5_000..55_000),
            avg: rng.gen_range(10_000..70_000),
            min: rng.gen_range(3_000..33_000),
            maxall: rng.gen_range(20_000..100_000),
            rating: format!("{:.1}", rng.gen_range(3.0..5.0_f64)),
            rating_count: rng.gen_range(100..10_100),
            site_name: platform_name.to_string(),
            site_logo: format!("https://via.placeholder.com/24x24?text={initial}"),
            brand: "Demo Brand",
            category: "Demo Category",
            in_stock: rng.gen_bool(0.7),
            pnt: rng.gen_range(50..550),
            original_url: original_url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const URL: &str = "https://www.myntra.com/tshirts/2314583/buy";

    #[test]
    fn test_labels_and_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let payload = generate(&mut rng, "Myntra", "2314583", URL);

        assert_eq!(payload.status, 1);
        assert_eq!(payload.msg, "Demo Data");
        assert_eq!(
            payload.data.name,
            "[DEMO] Sample Myntra Product - ID: 2314583"
        );
        assert_eq!(payload.data.site_name, "Myntra");
        assert_eq!(
            payload.data.site_logo,
            "https://via.placeholder.com/24x24?text=M"
        );
        assert_eq!(payload.data.original_url, URL);
    }

    #[test]
    fn test_values_stay_in_range() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let d = generate(&mut rng, "Nykaa", "412345", URL).data;

            assert!((5_000..55_000).contains(&d.cur_price));
            assert!((10_000..70_000).contains(&d.avg));
            assert!((3_000..33_000).contains(&d.min));
            assert!((20_000..100_000).contains(&d.maxall));
            assert!((100..10_100).contains(&d.rating_count));
            assert!((50..550).contains(&d.pnt));

            let rating: f64 = d.rating.parse().expect("rating is numeric");
            assert!((3.0..=5.0).contains(&rating), "rating {rating}");
            assert_eq!(d.rating.split('.').nth(1).map(str::len), Some(1));
        }
    }

    #[test]
    fn test_same_seed_same_payload() {
        let a = generate(&mut StdRng::seed_from_u64(42), "Ajio", "abc123", URL);
        let b = generate(&mut StdRng::seed_from_u64(42), "Ajio", "abc123", URL);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialized_field_names() {
        let payload = generate(&mut StdRng::seed_from_u64(1), "Amazon", "B0CHX1W1XY", URL);
        let json = serde_json::to_value(&payload).expect("serializes");

        assert_eq!(json["msg"], "Demo Data");
        assert!(json["data"]["ratingCount"].is_u64());
        assert!(json["data"]["inStock"].is_boolean());
        assert!(json["data"]["rating"].is_string());
        assert_eq!(json["data"]["originalUrl"], URL);
        assert!(json["data"].get("rating_count").is_none());
    }
}
