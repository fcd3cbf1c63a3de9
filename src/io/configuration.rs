//! Rendering constants and runtime configuration defaults

// Tile output settings
/// Edge-to-edge width of a finished tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 400;
/// Integer factor tiles are drawn at before Lanczos downsampling
pub const DEFAULT_SUPERSAMPLE: u32 = 2;
/// Counter-clockwise rotation applied to every finished tile
pub const DEFAULT_ROTATION_DEGREES: i32 = 90;
/// Edge labels of the full game: three ring levels of red and of blue
pub const DEFAULT_ALPHABET: &str = "AaeBbc";

// Safety limits to prevent degenerate or excessive canvases
/// Smallest tile size that keeps connector strokes closed
pub const MIN_TILE_SIZE: u32 = 32;
/// Largest accepted tile size
pub const MAX_TILE_SIZE: u32 = 8192;
/// Largest accepted supersampling factor
pub const MAX_SUPERSAMPLE: u32 = 8;

// Hexagon geometry, all relative to the supersampled radius
/// Stroke width as a fraction of the radius
pub const LINE_WIDTH_RATIO: f64 = 0.02;
/// Thinnest stroke that still seals regions for 4-connected flood fill
pub const MIN_LINE_WIDTH: u32 = 2;
/// Arc radius is `(ARC_BASE_LEVEL + size) * r / ARC_SIZE_DIVISOR`
pub const ARC_BASE_LEVEL: f64 = 3.0;
/// Divisor turning a ring level into an arc radius
pub const ARC_SIZE_DIVISOR: f64 = 6.0;
/// Line offset is `-r * offset / LINE_OFFSET_DIVISOR`
pub const LINE_OFFSET_DIVISOR: f64 = 10.0;
/// Flood fill seeds sit this far out along the heading
pub const FILL_SEED_RATIO: f64 = 8.0 / 9.0;

// Turtle angles, in whole degrees
/// Angle between the three pattern edges
pub const EDGE_TURN: i32 = 120;
/// Angle between adjacent hexagon vertices
pub const VERTEX_TURN: i32 = 60;
/// Half-width of a connector arc around its vertex
pub const ARC_HALF_SPAN: i32 = 60;
/// Heading skew that aligns a chord with two edge midpoints
pub const LINE_SKEW: i32 = 30;

// Naming contract consumed by downstream packaging
/// Prefix shared by every tile name
pub const TILE_NAME_PREFIX: &str = "gamutile";
/// Suffix naming the shared back face
pub const BACK_NAME: &str = "back";
/// Extension of exported tiles
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
