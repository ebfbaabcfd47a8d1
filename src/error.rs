//! The tracer's single failure type. Every error aborts the whole trace —
//! there is no partial-result / retry path (see spec §7).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("can't trace an empty image: zero pixels, zero-sized dimensions, or only one color present")]
    EmptyImage,

    #[error("color index 255 is reserved, please adjust your input")]
    ReservedColorIndex,

    #[error("corrupt walk: no lookup transition for edge code {code} at direction {dir}")]
    CorruptWalk { code: i32, dir: i32 },
}

pub type Result<T> = std::result::Result<T, TraceError>;
