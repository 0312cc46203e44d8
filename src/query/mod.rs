//! Directional, paginated views over tracked records.

pub mod bearing;
pub mod page;
pub mod present;

pub use bearing::{bearing, direction, horizontal_distance, Direction, VerticalOffset};
pub use page::{paginate, total_pages, ListArgument, Page, PAGE_SIZE};
pub use present::{
    default_map_world, dimension_label, present, ColorCategory, ListRow, Location, MapLinkBuilder,
};
