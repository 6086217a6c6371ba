pub mod gemini {
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    pub const API_BASE: &str = "https://generativelanguage.googleapis.com";
    pub const API_VERSION: &str = "v1beta";
    pub const GENERATE_CONTENT_METHOD: &str = "generateContent";
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
    /// Finish reasons for which the SDK refuses to hand back candidate text.
    pub const BLOCKING_FINISH_REASONS: &[&str] = &["SAFETY", "RECITATION", "LANGUAGE"];
}
