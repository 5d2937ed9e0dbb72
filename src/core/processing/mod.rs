//! Fit geometry, RGBA resampling, canvas padding and the pipeline that
//! chains them for a single decoded image.
pub mod padding;
pub mod pipeline;
pub mod resize;
