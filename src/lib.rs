// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement a single inference round
// trip: load an image, post it to an inference endpoint, interpret the
// reply according to the task encoded in the URL.
//
// Module responsibilities:
// - `codec`: converts between in-memory RGB images and the data-URL
//   style `"<mime>,<base64>"` transport string used by the backend.
// - `endpoint`: derives the task mode (classify / detect / segment)
//   from the endpoint URL's trailing path segment.
// - `source`: loads the image to submit, from a local file or a
//   remote URL, exactly once per invocation.
// - `api`: the blocking HTTP client that uploads the image as
//   multipart form data and hands back the raw reply.
// - `interpret`: decodes the reply body into a typed result for the
//   task mode, or a typed error.
// - `render`: draws bounding boxes / writes overlays to disk.
// - `cli`: clap argument surface and the run flow tying it together.
pub mod api;
pub mod cli;
pub mod codec;
pub mod endpoint;
pub mod error;
pub mod interpret;
pub mod render;
pub mod source;
