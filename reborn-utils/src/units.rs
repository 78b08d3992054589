//! Fluid unit constants, all expressed in droplets, the smallest
//! indivisible amount of fluid.

/// Droplets in a legacy millibucket.
pub const MILLIBUCKET: i64 = 81;
/// Droplets in a bucket, matching the host's fluid constant.
pub const BUCKET: i64 = 1000 * MILLIBUCKET;
