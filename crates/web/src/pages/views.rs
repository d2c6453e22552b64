//! Page templates and the view models they render.

use askama::Template;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use carlot_app::domain::cars::records::CarRecord;

/// Bytes escaped in a photo filename placed in a URL path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A car as shown on a page.
#[derive(Debug, Clone)]
pub(crate) struct CarView {
    pub id: String,
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub color: String,
    pub short_description: String,
    pub price: String,
    pub photo_urls: Vec<String>,
}

impl From<CarRecord> for CarView {
    fn from(car: CarRecord) -> Self {
        CarView {
            id: car.uuid.to_string(),
            vin: car.vin,
            brand: car.brand,
            model: car.model,
            production_year: car.production_year,
            color: car.color,
            short_description: car.short_description,
            price: car
                .price
                .map_or_else(|| "not set".to_string(), |price| price.to_string()),
            photo_urls: car
                .photos
                .into_iter()
                .map(|photo| format!("/static/{}", utf8_percent_encode(&photo.img_url, PATH_SEGMENT)))
                .collect(),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "index.html")]
pub(crate) struct HomePage;

#[derive(Debug, Template)]
#[template(path = "cars.html")]
pub(crate) struct CarsPage {
    pub cars: Vec<CarView>,
}

impl CarsPage {
    pub(crate) fn new(cars: Vec<CarRecord>) -> Self {
        Self {
            cars: cars.into_iter().map(CarView::from).collect(),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "details.html")]
pub(crate) struct CarDetailsPage {
    pub car: CarView,
}

#[derive(Debug, Template)]
#[template(path = "add.html")]
pub(crate) struct AddCarPage;
