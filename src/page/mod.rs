use serde::{Deserialize, Serialize};

use crate::normalize::{FieldNormalizer, ResolvedImage};
use crate::record::RawContent;

pub mod cctv;
pub mod document_management;
pub mod hero;
pub mod products;
pub mod solutions;
pub mod web_hosting;
pub mod why_choose_us;

/// One titled page section with an image and a bullet list. The service
/// pages are built from numbered runs of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSection {
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
    pub image: ResolvedImage,
}

/// Normalizes section `index` out of `raw`, reading `sub_title_{i}`,
/// `sub_description_{i}`, `{points_key}_{i}` and `{image_key}_{i}`. Any
/// field the record lacks comes from `default`.
pub(crate) async fn load_section(
    normalizer: &FieldNormalizer<'_>,
    raw: &RawContent,
    index: usize,
    points_key: &str,
    image_key: &str,
    default: &ServiceSection,
) -> ServiceSection {
    let title = FieldNormalizer::text(
        raw.field(&format!("sub_title_{}", index)),
        &default.title,
    );
    let description = FieldNormalizer::text(
        raw.field(&format!("sub_description_{}", index)),
        &default.description,
    );
    let points = match raw.field(&format!("{}_{}", points_key, index)) {
        Some(value) => FieldNormalizer::points(Some(value)),
        None => default.points.clone(),
    };
    let image = normalizer
        .image(
            raw.field(&format!("{}_{}", image_key, index)),
            &default.image.url,
            &title,
        )
        .await;
    ServiceSection {
        title,
        description,
        points,
        image,
    }
}
