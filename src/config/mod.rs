pub mod moderation;

pub use moderation::{
    CompiledPattern, CompiledPatterns, ModerationConfig, PatternCfg, SentimentFailurePolicy,
    DEFAULT_MODERATION_CONFIG_PATH, ENV_MODERATION_CONFIG_PATH,
};
