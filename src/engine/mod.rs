pub mod download;
pub mod filter;
pub mod gallery;
pub mod generator;

pub use download::DownloadJob;
pub use filter::{ActiveFilters, DateRange, FilterFacets};
pub use gallery::{default_archive_name, DownloadReport, GalleryEngine, Lightbox};
pub use generator::GenerationOrchestrator;
