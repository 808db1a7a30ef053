//! Regions feature.
//!
//! CRUD over geographic regions (code, name, area, coordinates, population).
//! Persistence sits behind [`repositories::RegionRepository`]; the Postgres and
//! in-memory implementations are interchangeable at startup.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/regions` | List all regions |
//! | GET | `/regions/{id}` | Get region by id |
//! | POST | `/regions` | Create region |
//! | PUT | `/regions/{id}` | Replace region fields |
//! | DELETE | `/regions/{id}` | Delete region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validation;

pub use repositories::{InMemoryRegionRepository, PgRegionRepository, RegionRepository};
pub use services::RegionService;
