use thiserror::Error;

/// Crate-wide error type. The teacher crate returns raw `std::io::Error`
/// or bare `String`s at its fallible boundaries; this generalizes that
/// into distinguishable variants so the scene/mesh/texture/PPM boundaries
/// can each be handled (and reported) on their own terms.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("could not read scene file {path}: {source}")]
    SceneFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene JSON in {path}: {source}")]
    SceneParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown material type {type_name:?} in scene file")]
    UnknownMaterialType { type_name: String },

    #[error("unknown object type {type_name:?} in scene file")]
    UnknownObjectType { type_name: String },

    #[error("could not load mesh {path}: {reason}")]
    MeshLoad { path: String, reason: String },

    #[error("could not load texture {path}: {source}")]
    TextureFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("texture {path} has unsupported channel count {channels} (expected 3 or 4)")]
    UnsupportedChannelCount { path: String, channels: u32 },

    #[error("could not decode texture {path}: {source}")]
    TextureDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("could not write image to {path}: {source}")]
    ImageWriteIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("filtering mode {0:?} is not implemented")]
    NotImplemented(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
