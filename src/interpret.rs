// Response interpreter: one reply schema per task mode. The HTTP
// status is checked first; only a 200 reply has its body examined, so
// an HTTP-level failure never surfaces as a parsing failure. Missing
// or mistyped fields become `MalformedResponse`, a condition the
// caller can tell apart from `ResponseError`.

use image::RgbImage;
use serde::Deserialize;

use crate::api::RawResponse;
use crate::codec;
use crate::endpoint::TaskMode;
use crate::error::ClientError;

/// Absolute pixel coordinates in the submitted image's space. The
/// client performs no bounds validation; corners may legitimately lie
/// at or beyond the image edges, and clamping is the drawer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// The interpreted outcome of one successful inference request.
#[derive(Debug)]
pub enum InferenceResult {
    Classify { label: String },
    Detect { label: String, bbox: BoundingBox },
    Segment { labels: Vec<String>, overlay: RgbImage },
}

#[derive(Deserialize)]
struct ClassifyReply {
    label: String,
}

/// A coordinate as the backend sends it: a number or a numeric string.
/// Either way it is truncated to an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coord {
    Num(f64),
    Text(String),
}

impl Coord {
    fn to_i32(&self, key: &str) -> Result<i32, ClientError> {
        match self {
            Coord::Num(n) => Ok(*n as i32),
            // `as i32` on f64 saturates, so both arms clamp out-of-range
            // values the same way instead of wrapping.
            Coord::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(|f| f as i32)
                .map_err(|_| ClientError::malformed(format!("field '{key}' is not numeric: {s:?}"))),
        }
    }
}

#[derive(Deserialize)]
struct DetectReply {
    label: String,
    x1: Coord,
    y1: Coord,
    x2: Coord,
    y2: Coord,
}

#[derive(Deserialize)]
struct SegmentReply {
    labels: Vec<String>,
    #[serde(rename = "imageData")]
    image_data: String,
}

/// Interpret one raw reply under the given task mode.
///
/// `Unknown` mode never reaches this function in the normal flow (no
/// request is issued for it); it is still mapped to `UnknownMode` here
/// so the state machine is total.
pub fn interpret(mode: TaskMode, response: &RawResponse) -> Result<InferenceResult, ClientError> {
    if response.status != 200 {
        return Err(ClientError::ResponseError {
            status: response.status,
            reason: response.reason.clone(),
        });
    }
    match mode {
        TaskMode::Classify => {
            let reply: ClassifyReply = parse(&response.body)?;
            Ok(InferenceResult::Classify { label: reply.label })
        }
        TaskMode::Detect => {
            let reply: DetectReply = parse(&response.body)?;
            let bbox = BoundingBox {
                x1: reply.x1.to_i32("x1")?,
                y1: reply.y1.to_i32("y1")?,
                x2: reply.x2.to_i32("x2")?,
                y2: reply.y2.to_i32("y2")?,
            };
            Ok(InferenceResult::Detect {
                label: reply.label,
                bbox,
            })
        }
        TaskMode::Segment => {
            let reply: SegmentReply = parse(&response.body)?;
            let overlay = codec::decode(&reply.image_data)?;
            Ok(InferenceResult::Segment {
                labels: reply.labels,
                overlay,
            })
        }
        TaskMode::Unknown => Err(ClientError::UnknownMode),
    }
}

fn parse<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::malformed(e.to_string()))
}
