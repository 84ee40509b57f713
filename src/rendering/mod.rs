pub mod chart;
pub mod colormap;
pub mod encode;
pub mod raster;
pub mod surface;
pub mod svg;

pub use colormap::{ColorMap, DEMO_MAPS};
pub use encode::{gray_to_base64_png, gray_to_png, rgb_to_png, to_base64};
pub use raster::Rasterizer;
pub use surface::{SurfaceView, MAX_MESH_QUADS};
pub use svg::{Anchor, SvgDoc};
