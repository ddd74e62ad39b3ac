/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Largest 8-bit intensity. Configured thresholds are divided by this.
pub const MAX_INTENSITY: f32 = 255.0;

/// Default internal processing resolution (width, height).
pub const DEFAULT_PROCESSING_SIZE: (usize, usize) = (320, 180);

/// Default intensity threshold (0-255) for the reference-frame differencer.
pub const DEFAULT_DIFF_THRESHOLD: u8 = 25;

/// Default Gaussian kernel size for the differencer and transient detector.
/// Grew from 21 to 31 to 41 while tuning; larger kernels give smoother blobs.
pub const DEFAULT_BLUR_KERNEL: usize = 41;

/// Weight kept by the old reference frame on each update.
pub const DEFAULT_REFERENCE_DECAY: f32 = 0.8;

/// Mean absolute difference (fraction of full scale) above which a frame is
/// treated as a scene cut.
pub const DEFAULT_JUMP_CUT_THRESHOLD: f32 = 0.2;

/// Weight given to the new frame when re-seeding the reference after a cut.
pub const DEFAULT_JUMP_CUT_RESEED: f32 = 0.95;

/// Default thresholds (0-255) for the two chained transient passes.
pub const DEFAULT_TRANSIENT_THRESHOLDS: (u8, u8) = (100, 100);

/// Default region area band in pixels.
pub const DEFAULT_MIN_REGION_AREA: usize = 50;
pub const DEFAULT_MAX_REGION_AREA: usize = 1_000_000;

/// Upper bound on regions per frame fed into the line search.
pub const DEFAULT_MAX_REGIONS_PER_FRAME: usize = 8;

/// Area above which debug outlines are drawn around regions.
pub const DEBUG_OUTLINE_MIN_AREA: usize = 500;

/// Default motion history capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Trail compositor weighting.
pub const DEFAULT_TRAIL_TRANSPARENCY: f32 = 0.3;
pub const DEFAULT_TRAIL_DROPOFF: f32 = 0.8;

/// Collinearity tolerance in radians.
pub const DEFAULT_COLINEAR_TOLERANCE: f32 = 0.2;

/// History frames required before any line search runs.
pub const DEFAULT_MIN_LINE_HISTORY: usize = 6;

/// Number of most recent history frames sampled for line search.
pub const DEFAULT_LINE_WINDOW: usize = 3;

/// Detected lines kept per frame.
pub const DEFAULT_MAX_LINES: usize = 3;

/// Maximum per-axis start-point drift (pixels) of decorative lines.
pub const DEFAULT_MAX_DRIFT: f32 = 30.0;

/// Length scale range of decorative lines.
pub const DEFAULT_SCALE_RANGE: (f32, f32) = (0.8, 1.2);

/// Number of decorative lines added per detected line.
pub const DEFAULT_DECORATIONS: (usize, usize) = (1, 2);

/// Number of most recent line sets rendered (and retained).
pub const DEFAULT_LINE_RENDER_CAP: usize = 50;

/// Line renderer weighting.
pub const DEFAULT_LINE_TRANSPARENCY: f32 = 1.0;
pub const DEFAULT_LINE_DROPOFF: f32 = 0.9;

/// Radius of the median-point marker disc.
pub const DEFAULT_MARKER_RADIUS: usize = 5;
