//! Create Car Handlers

use salvo::prelude::*;
use serde::Deserialize;
use tokio::fs;

use carlot_app::domain::cars::data::{NewCar, NewPhoto};

use crate::{
    cars::errors::into_status_error,
    extensions::*,
    pages::{AddCarPage, CarsPage, PageReply},
};

/// Form field carrying the uploaded photo files.
const PHOTOS_FIELD: &str = "photos";

/// Add Car Form
#[derive(Debug, Deserialize)]
pub(crate) struct AddCarForm {
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub production_year: i32,
    pub color: String,
    pub short_description: String,
    pub price: i64,
}

impl From<AddCarForm> for NewCar {
    fn from(input: AddCarForm) -> Self {
        NewCar {
            vin: input.vin,
            brand: input.brand,
            model: input.model,
            production_year: input.production_year,
            color: input.color,
            short_description: input.short_description,
            price: input.price,
        }
    }
}

/// Raises the request body limit so whole photos fit in the add form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UploadLimit {
    max_bytes: usize,
}

impl UploadLimit {
    pub(crate) fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

#[handler]
impl UploadLimit {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        req.set_secure_max_size(self.max_bytes);

        ctrl.call_next(req, depot, res).await;
    }
}

/// Add Car Form Handler
#[handler]
pub(crate) async fn add_form() -> Result<PageReply, StatusError> {
    PageReply::page(&AddCarPage)
}

/// Create Car Handler
///
/// Accepts the add form (urlencoded or multipart), stores the uploaded photos
/// and renders the updated catalog.
#[handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot) -> Result<PageReply, StatusError> {
    let state = depot.state_or_500()?;

    let car = req
        .parse_form::<AddCarForm>()
        .await
        .or_422("invalid add car form")?;

    let photos = uploaded_photos(req).await?;

    let cars = state
        .cars
        .add_car(car.into(), photos)
        .await
        .map_err(into_status_error)?;

    PageReply::page(&CarsPage::new(cars))
}

/// Read every uploaded photo. Parts without a filename are empty file inputs.
async fn uploaded_photos(req: &mut Request) -> Result<Vec<NewPhoto>, StatusError> {
    let Some(files) = req.files(PHOTOS_FIELD).await else {
        return Ok(Vec::new());
    };

    let mut photos = Vec::with_capacity(files.len());

    for file in files {
        let Some(file_name) = file.name().filter(|name| !name.is_empty()) else {
            continue;
        };

        let contents = fs::read(file.path())
            .await
            .or_500("failed to read uploaded photo")?;

        photos.push(NewPhoto {
            file_name: file_name.to_string(),
            contents,
        });
    }

    Ok(photos)
}
