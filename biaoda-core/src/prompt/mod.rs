pub mod style;

pub use style::StylePreference;

use crate::ai::types::PromptRequest;

/// Slot in the template replaced with the active style's guidance text.
const STYLE_SLOT: &str = "{style_instruction}";

/// System instruction shared by every completion call. Constant apart from
/// the style guidance slot at the end; the template asks for labelled
/// stylistic variants with back-translations, grammar notes and a final
/// recommendation, but conformance of the model output is never checked.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"你是专业的英文表达顾问，专门帮助中文用户找到最适合情景的英文表达。

## 你的任务：
用户输入中文句子，你需要提供多种英文表达方式，每种表达都要：
1. 标注适用场景和风格特点
2. 提供中文回译说明细微差别
3. 给出语法要点和用词分析
4. 最后给出综合推荐

## 输出格式要求：
⸻
[中文原句]
这句话的英文可以这样表达👇

✅ [风格1名称]
[英文表达1]
（[中文回译说明细微差别]）

⸻

✅ [风格2名称] 
[英文表达2]
（[中文回译说明细微差别]）

⸻

✅ [风格3名称]
[英文表达3]
（[中文回译说明细微差别]）

⸻

💡 语法要点：
• [要点1]
• [要点2]

⸻

🪄 总结推荐：
✅ [最推荐的表达]
[推荐理由]

请根据用户偏好侧重：{style_instruction}"#;

/// Substitute the style's guidance into the fixed template.
pub fn compose_system_prompt(style: StylePreference) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace(STYLE_SLOT, style.instruction())
}

/// Build the request for one completion call: the styled system instruction
/// plus the user's raw input. History is not included; every call carries
/// exactly these two parts.
pub fn build_prompt_request(style: StylePreference, user_message: &str) -> PromptRequest {
    PromptRequest {
        system_instruction: compose_system_prompt(style),
        user_message: user_message.to_string(),
    }
}
