/// Maximum characters of serialized tool input shown per `tool_use` block
pub const TOOL_INPUT_MAX: usize = 200;
/// Maximum characters of tool output shown per `tool_result` block
pub const TOOL_RESULT_MAX: usize = 100;
/// Maximum characters of reasoning shown per `thinking` block
pub const THINKING_MAX: usize = 300;

/// Display limits applied while extracting content blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub tool_input_max: usize,
    pub tool_result_max: usize,
    pub thinking_max: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            tool_input_max: TOOL_INPUT_MAX,
            tool_result_max: TOOL_RESULT_MAX,
            thinking_max: THINKING_MAX,
        }
    }
}
