mod qwen_vision_client;

pub use qwen_vision_client::{
    DESCRIBE_PROMPT, QwenVisionClient, STORY_PROMPT, parse_compatible_response,
    parse_native_response,
};
