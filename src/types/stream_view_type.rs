use aws_sdk_dynamodb::types;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamViewType {
    KeysOnly,
    NewAndOldImages,
    #[default]
    NewImage,
    OldImage,
}

impl StreamViewType {
    pub fn from_sdk(value: &types::StreamViewType) -> Option<StreamViewType> {
        match value {
            types::StreamViewType::KeysOnly => Some(StreamViewType::KeysOnly),
            types::StreamViewType::NewAndOldImages => Some(StreamViewType::NewAndOldImages),
            types::StreamViewType::NewImage => Some(StreamViewType::NewImage),
            types::StreamViewType::OldImage => Some(StreamViewType::OldImage),
            _ => None,
        }
    }
}

impl From<StreamViewType> for types::StreamViewType {
    fn from(value: StreamViewType) -> types::StreamViewType {
        match value {
            StreamViewType::KeysOnly => types::StreamViewType::KeysOnly,
            StreamViewType::NewAndOldImages => types::StreamViewType::NewAndOldImages,
            StreamViewType::NewImage => types::StreamViewType::NewImage,
            StreamViewType::OldImage => types::StreamViewType::OldImage,
        }
    }
}
