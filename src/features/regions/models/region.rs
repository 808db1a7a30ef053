use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::features::regions::validation::validate_not_blank;

/// Persisted region. `id` is assigned by the repository and never changes.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Everything about a region except its identity
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RegionAttributes {
    #[validate(custom(function = "validate_not_blank"))]
    pub code: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Area must be greater than zero"))]
    pub area: f64,

    pub lat: f64,

    #[validate(range(exclusive_min = 0.0, message = "Long must be greater than zero"))]
    pub long: f64,

    #[validate(range(min = 0, message = "Population cannot be less than zero"))]
    pub population: i64,
}

impl Region {
    pub fn new(id: Uuid, attributes: RegionAttributes) -> Self {
        Self {
            id,
            code: attributes.code,
            name: attributes.name,
            area: attributes.area,
            lat: attributes.lat,
            long: attributes.long,
            population: attributes.population,
        }
    }

    /// Overwrite every field except `id`
    pub fn apply(&mut self, attributes: RegionAttributes) {
        self.code = attributes.code;
        self.name = attributes.name;
        self.area = attributes.area;
        self.lat = attributes.lat;
        self.long = attributes.long;
        self.population = attributes.population;
    }
}
