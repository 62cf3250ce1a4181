use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random::shuffle;
use crate::tmdb::types::{BaseImage, ImageSet};

/// A poster or backdrop of a title, tagged with which one it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedImage {
    #[serde(flatten)]
    pub image: BaseImage,
    #[serde(rename = "backdrop")]
    pub is_backdrop: bool,
}

/// Posters and backdrops in one list, in random order.
pub fn combine_images(images: ImageSet) -> Vec<CombinedImage> {
    combine_images_with(images, &mut rand::rng())
}

pub fn combine_images_with<R: Rng + ?Sized>(images: ImageSet, rng: &mut R) -> Vec<CombinedImage> {
    let posters = images.posters.into_iter().map(|image| CombinedImage {
        image,
        is_backdrop: false,
    });
    let backdrops = images.backdrops.into_iter().map(|image| CombinedImage {
        image,
        is_backdrop: true,
    });

    let mut combined: Vec<CombinedImage> = posters.chain(backdrops).collect();
    shuffle(&mut combined, rng);
    combined
}
